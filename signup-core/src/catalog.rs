//! The fixed activity catalog the server starts with.
//!
//! Every entry carries two seeded participants so a fresh server shows
//! populated rosters.

use crate::activity::Activity;
use crate::directory::ActivityDirectory;
use crate::error::CoreError;

/// One catalog row before validation.
#[derive(Debug, Clone, Copy)]
pub struct Seed {
    pub name: &'static str,
    pub description: &'static str,
    pub schedule: &'static str,
    pub max_participants: u32,
    pub participants: &'static [&'static str],
}

/// The nine seeded activities in display order.
pub const SEEDS: [Seed; 9] = [
    Seed {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    Seed {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    Seed {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
    Seed {
        name: "Soccer Team",
        description: "Join the school soccer team and compete in matches",
        schedule: "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        max_participants: 22,
        participants: &["liam@mergington.edu", "noah@mergington.edu"],
    },
    Seed {
        name: "Basketball Team",
        description: "Practice and play basketball with the school team",
        schedule: "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
        max_participants: 15,
        participants: &["ava@mergington.edu", "mia@mergington.edu"],
    },
    Seed {
        name: "Art Club",
        description: "Explore your creativity through painting and drawing",
        schedule: "Thursdays, 3:30 PM - 5:00 PM",
        max_participants: 15,
        participants: &["amelia@mergington.edu", "harper@mergington.edu"],
    },
    Seed {
        name: "Drama Club",
        description: "Act, direct, and produce plays and performances",
        schedule: "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        max_participants: 20,
        participants: &["ella@mergington.edu", "scarlett@mergington.edu"],
    },
    Seed {
        name: "Math Club",
        description: "Solve challenging problems and participate in math competitions",
        schedule: "Tuesdays, 3:30 PM - 4:30 PM",
        max_participants: 10,
        participants: &["james@mergington.edu", "benjamin@mergington.edu"],
    },
    Seed {
        name: "Debate Team",
        description: "Develop public speaking and argumentation skills",
        schedule: "Fridays, 4:00 PM - 5:30 PM",
        max_participants: 12,
        participants: &["charlotte@mergington.edu", "henry@mergington.edu"],
    },
];

impl Seed {
    /// Validate this row into an [`Activity`].
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidCapacity`] if `max_participants` is zero.
    pub fn build(&self) -> Result<Activity, CoreError> {
        Ok(Activity::new(self.name, self.description, self.schedule, self.max_participants)?
            .with_participants(self.participants.iter().copied()))
    }
}

/// Build a directory from `seeds`, in order.
///
/// # Errors
/// Returns [`CoreError::InvalidCapacity`] for a zero-capacity row and
/// [`CoreError::DuplicateActivity`] if two rows share a name.
pub fn build_directory(seeds: &[Seed]) -> Result<ActivityDirectory, CoreError> {
    let mut directory = ActivityDirectory::new();
    for seed in seeds {
        directory.insert(seed.build()?)?;
    }
    Ok(directory)
}

/// Returns the validated seeded activities in display order.
///
/// # Errors
/// Returns [`CoreError`] if a row in [`SEEDS`] is invalid.
pub fn seeded_catalog() -> Result<Vec<Activity>, CoreError> {
    SEEDS.iter().map(Seed::build).collect()
}
