// Activity record
// A named event with a schedule, a capacity and the emails signed up for it

use serde::{Deserialize, Serialize};

/// Activity names double as registry keys
pub type ActivityName = String;

/// Activity structure
/// The name is not stored here, it is the key in the registry map
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Activity {
    /// Human-readable description of the activity
    pub description: String,
    /// Free-form schedule, e.g. "Fridays, 3:30 PM - 5:00 PM"
    pub schedule: String,
    /// Capacity of the activity
    pub max_participants: u32,
    /// Participant emails in signup order
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Create an activity with no participants
    pub fn new(description: &str, schedule: &str, max_participants: u32) -> Self {
        Self {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Builder-style helper used when seeding
    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants = participants.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the given email is signed up
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Remaining capacity. Saturates at zero when an activity is over-subscribed.
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }

    /// Whether the activity has reached its capacity
    pub fn is_full(&self) -> bool {
        self.spots_left() == 0
    }
}
