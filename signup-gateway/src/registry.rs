//! Shared, lock-guarded owner of the activity directory.
//!
//! Handlers receive an `Arc<Registry>` through axum state. Each membership
//! change takes the write lock for one check-and-mutate, so concurrent
//! requests against the same activity are serialized.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use signup_core::{ActivityDirectory, CoreError, DirectoryError, Email, Enrollment};

/// Thread-safe registry wrapping one [`ActivityDirectory`].
#[derive(Debug, Default)]
pub struct Registry {
    directory: RwLock<ActivityDirectory>,
}

impl Registry {
    /// Wrap an existing directory.
    #[must_use]
    pub fn new(directory: ActivityDirectory) -> Self {
        Self { directory: RwLock::new(directory) }
    }

    /// Create a registry holding the seeded school catalog.
    ///
    /// # Errors
    /// Propagates [`CoreError`] if the catalog fails validation.
    pub fn seeded() -> Result<Self, CoreError> {
        ActivityDirectory::seeded().map(Self::new)
    }

    /// Clone the current directory for serialization outside the lock.
    #[must_use]
    pub fn snapshot(&self) -> ActivityDirectory {
        self.read().clone()
    }

    /// Number of activities in the catalog.
    #[must_use]
    pub fn activity_count(&self) -> usize {
        self.read().len()
    }

    /// Sign `email` up for `activity_name`.
    ///
    /// # Errors
    /// Propagates [`DirectoryError`] from [`ActivityDirectory::signup`].
    pub fn signup(&self, activity_name: &str, email: Email) -> Result<Enrollment, DirectoryError> {
        self.write().signup(activity_name, email)
    }

    /// Remove `email` from `activity_name`.
    ///
    /// # Errors
    /// Propagates [`DirectoryError`] from [`ActivityDirectory::unregister`].
    pub fn unregister(
        &self,
        activity_name: &str,
        email: Email,
    ) -> Result<Enrollment, DirectoryError> {
        self.write().unregister(activity_name, email)
    }

    // Mutations are a single insert or remove, so a poisoned lock still
    // guards a consistent directory.
    fn read(&self) -> RwLockReadGuard<'_, ActivityDirectory> {
        self.directory.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ActivityDirectory> {
        self.directory.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, thread};

    use super::*;

    fn seeded() -> Registry {
        match Registry::seeded() {
            Ok(r) => r,
            Err(e) => panic!("seeded catalog invalid: {e}"),
        }
    }

    #[test]
    fn registry_signup_and_unregister_lifecycle() {
        let registry = seeded();
        let email = Email::new("tester@example.com");
        assert!(registry.signup("Chess Club", email.clone()).is_ok());
        let present = registry
            .snapshot()
            .get("Chess Club")
            .is_some_and(|a| a.is_participant(&email));
        assert!(present, "participant should be listed after signup");

        assert!(registry.unregister("Chess Club", email.clone()).is_ok());
        let present = registry
            .snapshot()
            .get("Chess Club")
            .is_some_and(|a| a.is_participant(&email));
        assert!(!present, "participant should be gone after unregister");
    }

    #[test]
    fn registry_snapshot_is_detached_from_later_changes() {
        let registry = seeded();
        let before = registry.snapshot();
        assert!(registry.signup("Math Club", "late@example.com".into()).is_ok());
        assert_ne!(before, registry.snapshot(), "snapshot must not observe later signups");
    }

    #[test]
    fn registry_concurrent_duplicate_signups_admit_exactly_one() {
        let registry = Arc::new(seeded());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || registry.signup("Gym Class", "racer@example.com".into()).is_ok())
            })
            .collect();
        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap_or(false))
            .filter(|ok| *ok)
            .count();
        assert_eq!(successes, 1, "only one concurrent signup may win");
        assert_eq!(
            registry.snapshot().get("Gym Class").map(signup_core::Activity::participant_count),
            Some(3)
        );
    }

    #[test]
    fn default_registry_is_empty() {
        assert_eq!(Registry::default().activity_count(), 0);
        assert_eq!(seeded().activity_count(), 9);
    }
}
