//! The in-memory activity directory and its membership operations.

use indexmap::{map::Entry, IndexMap};
use serde::Serialize;

use crate::activity::Activity;
use crate::catalog::{build_directory, SEEDS};
use crate::email::Email;
use crate::enrollment::Enrollment;
use crate::error::{CoreError, DirectoryError};

/// Mapping from activity name to [`Activity`], in catalog order.
///
/// Serializes as a JSON object keyed by activity name. The directory itself
/// does no locking; callers that share it across tasks wrap it in a lock.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ActivityDirectory {
    activities: IndexMap<String, Activity>,
}

impl ActivityDirectory {
    /// Create an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory holding the fixed school catalog.
    ///
    /// # Errors
    /// Returns [`CoreError`] if a catalog row has zero capacity or repeats a name.
    pub fn seeded() -> Result<Self, CoreError> {
        build_directory(&SEEDS)
    }

    /// Create a directory from `activities`, in order.
    ///
    /// # Errors
    /// Returns [`CoreError::DuplicateActivity`] if two activities share a name.
    pub fn from_activities(
        activities: impl IntoIterator<Item = Activity>,
    ) -> Result<Self, CoreError> {
        let mut directory = Self::new();
        for activity in activities {
            directory.insert(activity)?;
        }
        Ok(directory)
    }

    /// Register a new activity.
    ///
    /// # Errors
    /// Returns [`CoreError::DuplicateActivity`] if the name is already taken.
    pub fn insert(&mut self, activity: Activity) -> Result<(), CoreError> {
        match self.activities.entry(activity.name.clone()) {
            Entry::Occupied(_) => Err(CoreError::DuplicateActivity { activity: activity.name }),
            Entry::Vacant(slot) => {
                slot.insert(activity);
                Ok(())
            }
        }
    }

    /// Every activity keyed by name, including current participants.
    #[must_use]
    pub fn list(&self) -> &IndexMap<String, Activity> {
        &self.activities
    }

    /// Look up one activity by exact name.
    #[must_use]
    pub fn get(&self, activity_name: &str) -> Option<&Activity> {
        self.activities.get(activity_name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Add `email` to the roster of `activity_name`.
    ///
    /// Capacity is not enforced: an activity may exceed `max_participants`.
    ///
    /// # Errors
    /// - [`DirectoryError::ActivityNotFound`] if no such activity exists.
    /// - [`DirectoryError::AlreadySignedUp`] if `email` is already on the roster.
    pub fn signup(&mut self, activity_name: &str, email: Email) -> Result<Enrollment, DirectoryError> {
        let activity = self.find_mut(activity_name)?;
        if activity.is_participant(&email) {
            return Err(DirectoryError::AlreadySignedUp {
                activity: activity.name.clone(),
                email,
            });
        }
        activity.add(email.clone());
        Ok(Enrollment::SignedUp { activity: activity.name.clone(), email })
    }

    /// Remove `email` from the roster of `activity_name`.
    ///
    /// # Errors
    /// - [`DirectoryError::ActivityNotFound`] if no such activity exists.
    /// - [`DirectoryError::NotSignedUp`] if `email` is not on the roster.
    pub fn unregister(
        &mut self,
        activity_name: &str,
        email: Email,
    ) -> Result<Enrollment, DirectoryError> {
        let activity = self.find_mut(activity_name)?;
        if !activity.remove(&email) {
            return Err(DirectoryError::NotSignedUp {
                activity: activity.name.clone(),
                email,
            });
        }
        Ok(Enrollment::Unregistered { activity: activity.name.clone(), email })
    }

    fn find_mut(&mut self, activity_name: &str) -> Result<&mut Activity, DirectoryError> {
        self.activities
            .get_mut(activity_name)
            .ok_or_else(|| DirectoryError::ActivityNotFound { activity: activity_name.to_owned() })
    }
}
