use std::num::NonZeroU32;

use indexmap::IndexSet;
use serde::Serialize;

use crate::email::Email;
use crate::error::CoreError;

/// An extracurricular activity and its current roster.
///
/// The name is the directory key and is not part of the serialized form:
/// `GET /activities` returns an object keyed by name whose values carry the
/// remaining fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct Activity {
    /// Unique display name (e.g. `"Chess Club"`).
    #[serde(skip)]
    pub name: String,
    /// Short description of what the activity offers.
    pub description: String,
    /// Human-readable meeting schedule.
    pub schedule: String,
    /// Advertised capacity. Informational only; signups are not capped.
    pub max_participants: NonZeroU32,
    participants: IndexSet<Email>,
}

impl Activity {
    /// Creates an activity with an empty roster.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidCapacity`] if `max_participants` is zero.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Result<Self, CoreError> {
        let name = name.into();
        let Some(max_participants) = NonZeroU32::new(max_participants) else {
            return Err(CoreError::InvalidCapacity { activity: name });
        };
        Ok(Self {
            name,
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: IndexSet::new(),
        })
    }

    /// Replaces the roster with `participants`, dropping duplicates.
    #[must_use]
    pub fn with_participants<I, E>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Email>,
    {
        self.participants = participants.into_iter().map(Into::into).collect();
        self
    }

    /// Current participants in signup order.
    pub fn participants(&self) -> impl ExactSizeIterator<Item = &Email> + '_ {
        self.participants.iter()
    }

    /// Number of participants currently signed up.
    #[must_use]
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    #[must_use]
    pub fn is_participant(&self, email: &Email) -> bool {
        self.participants.contains(email)
    }

    /// Remaining spots before `max_participants` is reached, saturating at zero.
    #[must_use]
    pub fn spots_left(&self) -> usize {
        usize::try_from(self.max_participants.get())
            .unwrap_or(usize::MAX)
            .saturating_sub(self.participants.len())
    }

    /// Adds `email` to the roster. Returns `false` if it was already present.
    pub(crate) fn add(&mut self, email: Email) -> bool {
        self.participants.insert(email)
    }

    /// Removes `email` from the roster. Returns `false` if it was absent.
    pub(crate) fn remove(&mut self, email: &Email) -> bool {
        // Keep signup order for the remaining participants.
        self.participants.shift_remove(email)
    }
}
