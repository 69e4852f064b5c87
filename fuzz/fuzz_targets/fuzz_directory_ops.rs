//! Fuzz target: arbitrary signup/unregister sequences against the seeded
//! directory.
//!
//! Each input byte pair selects an operation, an activity, and an email.
//! After every step the touched roster must be free of duplicates and agree
//! with the operation's outcome.

#![no_main]

use libfuzzer_sys::fuzz_target;
use signup_core::{ActivityDirectory, Email};

const NAMES: [&str; 4] = ["Chess Club", "Gym Class", "Math Club", "Unknown Club"];

fuzz_target!(|data: &[u8]| {
    let Ok(mut dir) = ActivityDirectory::seeded() else {
        return;
    };

    for pair in data.chunks_exact(2) {
        let name = NAMES[usize::from(pair[0] & 0b11)];
        let email = Email::new(format!("p{}@example.com", pair[1] & 0x0f));
        let was_member = dir.get(name).is_some_and(|a| a.is_participant(&email));

        let result = if pair[0] & 0x80 == 0 {
            dir.signup(name, email.clone())
        } else {
            dir.unregister(name, email.clone())
        };

        let Some(activity) = dir.get(name) else {
            assert!(result.is_err(), "unknown activity must be rejected");
            continue;
        };
        let is_member = activity.is_participant(&email);
        match (pair[0] & 0x80 == 0, result.is_ok()) {
            (true, true) => assert!(!was_member && is_member),
            (false, true) => assert!(was_member && !is_member),
            (_, false) => assert_eq!(was_member, is_member),
        }

        let mut seen = std::collections::HashSet::new();
        assert!(activity.participants().all(|p| seen.insert(p)), "duplicate participant");
    }
});
