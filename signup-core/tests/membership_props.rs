//! Property tests: roster invariants hold under arbitrary signup/unregister
//! sequences against the seeded directory.

use std::collections::HashSet;

use proptest::prelude::*;
use signup_core::{ActivityDirectory, DirectoryError, Email};

const ACTIVITIES: [&str; 3] = ["Chess Club", "Math Club", "Debate Team"];

#[derive(Debug, Clone)]
enum Op {
    Signup { activity: usize, email: usize },
    Unregister { activity: usize, email: usize },
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..ACTIVITIES.len(), 0..6usize).prop_map(|(activity, email)| Op::Signup { activity, email }),
        (0..ACTIVITIES.len(), 0..6usize)
            .prop_map(|(activity, email)| Op::Unregister { activity, email }),
    ]
}

fn email(n: usize) -> Email {
    Email::new(format!("student{n}@example.com"))
}

fn seeded() -> ActivityDirectory {
    ActivityDirectory::seeded().expect("seeded catalog is valid")
}

fn roster(dir: &ActivityDirectory, activity: &str) -> Vec<Email> {
    dir.get(activity)
        .map(|a| a.participants().cloned().collect())
        .unwrap_or_default()
}

proptest! {
    #[test]
    fn directory_matches_set_model(ops in prop::collection::vec(op(), 0..64)) {
        let mut dir = seeded();
        let mut model: Vec<HashSet<Email>> = ACTIVITIES
            .iter()
            .map(|name| roster(&dir, name).into_iter().collect())
            .collect();

        for op in ops {
            match op {
                Op::Signup { activity, email: n } => {
                    let result = dir.signup(ACTIVITIES[activity], email(n));
                    let inserted = model[activity].insert(email(n));
                    prop_assert_eq!(result.is_ok(), inserted);
                    if !inserted {
                        let is_conflict = matches!(result, Err(DirectoryError::AlreadySignedUp { .. }));
                        prop_assert!(is_conflict);
                    }
                }
                Op::Unregister { activity, email: n } => {
                    let result = dir.unregister(ACTIVITIES[activity], email(n));
                    let removed = model[activity].remove(&email(n));
                    prop_assert_eq!(result.is_ok(), removed);
                    if !removed {
                        let is_missing = matches!(result, Err(DirectoryError::NotSignedUp { .. }));
                        prop_assert!(is_missing);
                    }
                }
            }
        }

        for (name, expected) in ACTIVITIES.iter().zip(&model) {
            let actual = roster(&dir, name);
            let unique: HashSet<Email> = actual.iter().cloned().collect();
            prop_assert_eq!(unique.len(), actual.len(), "duplicate participant in {}", name);
            prop_assert_eq!(&unique, expected);
        }
    }

    #[test]
    fn signup_unregister_cycle_always_succeeds(n in 0usize..1000, cycles in 1usize..5) {
        let mut dir = seeded();
        for _ in 0..cycles {
            prop_assert!(dir.signup("Chess Club", email(n)).is_ok());
            prop_assert!(dir.signup("Chess Club", email(n)).is_err());
            prop_assert!(dir.unregister("Chess Club", email(n)).is_ok());
            prop_assert!(dir.unregister("Chess Club", email(n)).is_err());
        }
        prop_assert_eq!(roster(&dir, "Chess Club").len(), 2);
    }

    #[test]
    fn unknown_activity_never_mutates(name in "[a-z ]{1,20}", n in 0usize..10) {
        let mut dir = seeded();
        let before = dir.clone();
        let result = dir.signup(&name, email(n));
        let is_not_found = matches!(result, Err(DirectoryError::ActivityNotFound { .. }));
        prop_assert!(is_not_found);
        prop_assert_eq!(dir, before);
    }
}
