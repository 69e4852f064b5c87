use std::fmt;

use crate::email::Email;

/// The confirmed outcome of a successful membership change.
///
/// `Display` renders the confirmation message shown to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Enrollment {
    /// `email` was added to the roster of `activity`.
    SignedUp { activity: String, email: Email },
    /// `email` was removed from the roster of `activity`.
    Unregistered { activity: String, email: Email },
}

impl Enrollment {
    /// Name of the activity whose roster changed.
    #[must_use]
    pub fn activity(&self) -> &str {
        match self {
            Self::SignedUp { activity, .. } | Self::Unregistered { activity, .. } => activity,
        }
    }

    /// The participant that was added or removed.
    #[must_use]
    pub fn email(&self) -> &Email {
        match self {
            Self::SignedUp { email, .. } | Self::Unregistered { email, .. } => email,
        }
    }
}

impl fmt::Display for Enrollment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SignedUp { activity, email } => write!(f, "Signed up {email} for {activity}"),
            Self::Unregistered { activity, email } => {
                write!(f, "Unregistered {email} from {activity}")
            }
        }
    }
}
