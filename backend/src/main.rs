//! Activities Backend
//!
//! A REST API for listing school activities and managing their participants.
//! Also serves the browser frontend under `/static`.

use activities_backend::app::build_router;
use activities_backend::config::Config;
use activities_backend::state::{default_activities, ActivityRegistry, SeedFile};
use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

/// Seed the registry from the configured file, or the built-in catalogue
fn load_registry(config: &Config) -> anyhow::Result<ActivityRegistry> {
    let activities = match &config.activities.seed_file {
        Some(path) => match SeedFile::load_from_file(path)
            .with_context(|| format!("Failed to load activities from {}", path.display()))?
        {
            Some(activities) => {
                info!("Loaded {} activities from {}", activities.len(), path.display());
                activities
            }
            None => {
                warn!(
                    "Seed file {} does not exist, using built-in activities",
                    path.display()
                );
                default_activities()
            }
        },
        None => default_activities(),
    };

    Ok(ActivityRegistry::new(activities)
        .with_capacity_enforcement(config.activities.enforce_capacity))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = Config::from_env();
    info!("Configuration loaded: {:?}", config);

    let registry = load_registry(&config)?;
    info!("Serving {} activities", registry.len());
    let registry = Arc::new(RwLock::new(registry));

    let app = build_router(registry, &config.server.static_dir);

    // Bind to address from config
    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid server address: {}", e))?;

    info!("🚀 Server running on http://{}", addr);
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    // Setup graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Handle graceful shutdown signals (Ctrl+C, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully...");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down gracefully...");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn config_with_seed(seed_file: Option<std::path::PathBuf>) -> Config {
        let mut config = Config::from_env();
        config.activities.seed_file = seed_file;
        config.activities.enforce_capacity = false;
        config
    }

    #[test]
    fn test_load_registry_defaults() {
        let registry = load_registry(&config_with_seed(None)).unwrap();
        assert_eq!(registry.len(), default_activities().len());
    }

    #[test]
    fn test_load_registry_from_file() {
        let temp_file = NamedTempFile::new().unwrap();
        let mut activities = default_activities();
        activities.retain(|name, _| name == "Chess Club");
        SeedFile::save_to_file(&activities, temp_file.path()).unwrap();

        let registry =
            load_registry(&config_with_seed(Some(temp_file.path().to_path_buf()))).unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.get("Chess Club").is_some());
    }

    #[test]
    fn test_load_registry_missing_file_falls_back() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_path_buf();
        drop(temp_file);

        let registry = load_registry(&config_with_seed(Some(path))).unwrap();
        assert_eq!(registry.len(), default_activities().len());
    }
}
