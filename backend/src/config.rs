//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use std::env;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Activity registry configuration
    pub activities: ActivitiesConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
}

/// Activity registry configuration
#[derive(Debug, Clone)]
pub struct ActivitiesConfig {
    /// Optional JSON seed file (None = built-in catalogue)
    pub seed_file: Option<PathBuf>,
    /// Reject signups once an activity reaches `max_participants`
    pub enforce_capacity: bool,
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8000),
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                static_dir: env::var_os("STATIC_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from("static")),
            },
            activities: ActivitiesConfig {
                seed_file: env::var_os("ACTIVITIES_FILE").map(PathBuf::from),
                enforce_capacity: env::var("ENFORCE_CAPACITY")
                    .map(|v| parse_flag(&v))
                    .unwrap_or(false),
            },
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
