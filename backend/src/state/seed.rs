// Activity seeding
// Built-in catalogue plus loading/saving of versioned JSON seed files

use super::activity::{Activity, ActivityName};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Current seed file format version
pub const SEED_VERSION: u32 = 1;

/// Error types for seed file operations
#[derive(Error, Debug)]
pub enum SeedError {
    /// File I/O error
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON serialization/deserialization error
    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),
    /// Seed file version this build does not understand
    #[error("Unsupported seed file version: {0}")]
    UnsupportedVersion(u32),
}

/// On-disk seed format
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SeedData {
    version: u32,
    activities: BTreeMap<ActivityName, Activity>,
}

/// Seed file operations
pub struct SeedFile;

impl SeedFile {
    /// Load activities from a JSON seed file
    ///
    /// Returns `Ok(None)` when the file does not exist.
    pub fn load_from_file<P: AsRef<Path>>(
        path: P,
    ) -> Result<Option<BTreeMap<ActivityName, Activity>>, SeedError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(path)?;
        let data: SeedData = serde_json::from_str(&json)?;

        if data.version != SEED_VERSION {
            return Err(SeedError::UnsupportedVersion(data.version));
        }

        Ok(Some(data.activities))
    }

    /// Write activities to a JSON seed file
    pub fn save_to_file<P: AsRef<Path>>(
        activities: &BTreeMap<ActivityName, Activity>,
        path: P,
    ) -> Result<(), SeedError> {
        let data = SeedData {
            version: SEED_VERSION,
            activities: activities.clone(),
        };
        let json = serde_json::to_string_pretty(&data)?;
        fs::write(path.as_ref(), json)?;
        Ok(())
    }
}

/// The built-in school activities catalogue
pub fn default_activities() -> BTreeMap<ActivityName, Activity> {
    let entries = [
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Soccer Team",
            Activity::new(
                "Join the school soccer team and compete in matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                22,
            )
            .with_participants(["liam@mergington.edu", "noah@mergington.edu"]),
        ),
        (
            "Basketball Team",
            Activity::new(
                "Practice and play basketball with the school team",
                "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
                15,
            )
            .with_participants(["ava@mergington.edu", "mia@mergington.edu"]),
        ),
        (
            "Art Club",
            Activity::new(
                "Explore your creativity through painting and drawing",
                "Thursdays, 3:30 PM - 5:00 PM",
                15,
            )
            .with_participants(["amelia@mergington.edu", "harper@mergington.edu"]),
        ),
        (
            "Drama Club",
            Activity::new(
                "Act, direct, and produce plays and performances",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                20,
            )
            .with_participants(["ella@mergington.edu", "scarlett@mergington.edu"]),
        ),
        (
            "Math Club",
            Activity::new(
                "Solve challenging problems and participate in math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
            )
            .with_participants(["james@mergington.edu", "benjamin@mergington.edu"]),
        ),
        (
            "Debate Team",
            Activity::new(
                "Develop public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
            )
            .with_participants(["charlotte@mergington.edu", "henry@mergington.edu"]),
        ),
    ];

    entries
        .into_iter()
        .map(|(name, activity)| (name.to_string(), activity))
        .collect()
}
