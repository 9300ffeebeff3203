// State management module
// Handles the activity registry and its seed data

/// Activity record type
pub mod activity;
/// Registry owning the activity map
pub mod registry;
/// Built-in catalogue and seed files
pub mod seed;

pub use activity::{Activity, ActivityName};
pub use registry::{ActivityRegistry, RegistryError};
pub use seed::{default_activities, SeedError, SeedFile};

use std::sync::Arc;
use tokio::sync::RwLock;

/// Registry handle shared with the request handlers
pub type SharedRegistry = Arc<RwLock<ActivityRegistry>>;
