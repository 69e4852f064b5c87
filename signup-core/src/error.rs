use crate::email::Email;

/// Errors produced while building the activity catalog.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// An activity was declared with room for zero participants.
    #[error("invalid capacity for activity '{activity}': max_participants must be positive")]
    InvalidCapacity { activity: String },

    /// Two activities share the same name.
    #[error("duplicate activity '{activity}'")]
    DuplicateActivity { activity: String },
}

/// Errors returned by membership operations on an [`ActivityDirectory`].
///
/// [`ActivityDirectory`]: crate::ActivityDirectory
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DirectoryError {
    /// No activity is registered under the requested name.
    #[error("Activity not found: {activity}")]
    ActivityNotFound { activity: String },

    /// The email is already on the activity's roster.
    #[error("{email} is already signed up for {activity}")]
    AlreadySignedUp { activity: String, email: Email },

    /// The email is not on the activity's roster.
    #[error("{email} is not signed up for {activity}")]
    NotSignedUp { activity: String, email: Email },
}
