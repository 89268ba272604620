//! Infrastructure layer with configuration and collaborator adapters.

/// Application configuration.
pub mod config;
/// Simulated backend services.
pub mod simulated;

pub use config::{AppConfig, CliArgs, ConfigError, LogLevel, StorageManager, ThemeMode};
pub use simulated::{SimulatedAuthService, SimulatedCodeDelivery};
