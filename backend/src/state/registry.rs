// Activity registry
// Owns the activity map and is the only place participants are added or removed

use super::activity::{Activity, ActivityName};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::info;

/// Errors returned by registry mutations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No activity with the given name
    #[error("Activity not found")]
    ActivityNotFound(ActivityName),

    /// Email is already in the participant list
    #[error("Student is already signed up for this activity")]
    AlreadySignedUp {
        /// Activity the signup targeted
        activity: ActivityName,
        /// Email that was already present
        email: String,
    },

    /// Email is not in the participant list
    #[error("Student is not signed up for this activity")]
    ParticipantNotFound {
        /// Activity the removal targeted
        activity: ActivityName,
        /// Email that was missing
        email: String,
    },

    /// Capacity reached (only when capacity is enforced)
    #[error("Activity is full")]
    ActivityFull(ActivityName),
}

/// Registry of all activities (name -> Activity)
///
/// Created once at startup and shared with the handlers through axum state.
#[derive(Debug, Clone, Default)]
pub struct ActivityRegistry {
    activities: BTreeMap<ActivityName, Activity>,
    enforce_capacity: bool,
}

impl ActivityRegistry {
    /// Create a registry from a seeded set of activities
    pub fn new(activities: BTreeMap<ActivityName, Activity>) -> Self {
        Self {
            activities,
            enforce_capacity: false,
        }
    }

    /// Turn capacity enforcement on or off
    pub fn with_capacity_enforcement(mut self, enforce: bool) -> Self {
        self.enforce_capacity = enforce;
        self
    }

    /// Full mapping of activity name to record
    pub fn list(&self) -> &BTreeMap<ActivityName, Activity> {
        &self.activities
    }

    /// Get an activity by name
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.get(name)
    }

    /// Number of activities
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    /// Whether the registry has no activities
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Remaining capacity for an activity, if it exists
    pub fn spots_left(&self, name: &str) -> Option<u32> {
        self.activities.get(name).map(Activity::spots_left)
    }

    /// Add a participant to an activity
    pub fn signup(&mut self, name: &str, email: &str) -> Result<(), RegistryError> {
        let enforce_capacity = self.enforce_capacity;
        let activity = self
            .activities
            .get_mut(name)
            .ok_or_else(|| RegistryError::ActivityNotFound(name.to_string()))?;

        if activity.has_participant(email) {
            return Err(RegistryError::AlreadySignedUp {
                activity: name.to_string(),
                email: email.to_string(),
            });
        }

        if enforce_capacity && activity.is_full() {
            return Err(RegistryError::ActivityFull(name.to_string()));
        }

        activity.participants.push(email.to_string());
        info!(activity = %name, email = %email, "Participant signed up");
        Ok(())
    }

    /// Remove a participant from an activity, keeping the order of the rest
    pub fn unregister(&mut self, name: &str, email: &str) -> Result<(), RegistryError> {
        let activity = self
            .activities
            .get_mut(name)
            .ok_or_else(|| RegistryError::ActivityNotFound(name.to_string()))?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| RegistryError::ParticipantNotFound {
                activity: name.to_string(),
                email: email.to_string(),
            })?;

        activity.participants.remove(position);
        info!(activity = %name, email = %email, "Participant unregistered");
        Ok(())
    }
}
