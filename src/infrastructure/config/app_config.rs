//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::application::login::LoginTimings;

pub(super) const APP_NAME: &str = "earnings-tui";
pub(super) const APP_QUALIFIER: &str = "com";
pub(super) const APP_ORGANIZATION: &str = "earnings";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl LogLevel {
    /// Converts to tracing level.
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Login screen configuration.
    #[serde(default)]
    pub login: LoginConfig,

    /// Simulated backend configuration.
    #[serde(default)]
    pub simulation: SimulationConfig,

    /// Theme configuration.
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Login screen configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginConfig {
    /// Seconds before another code may be requested.
    #[serde(default = "default_countdown_seconds")]
    pub countdown_seconds: u32,

    /// Cooldown tick period in milliseconds.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

impl LoginConfig {
    /// Returns runtime timings.
    #[must_use]
    pub const fn timings(&self) -> LoginTimings {
        LoginTimings {
            countdown_seconds: self.countdown_seconds,
            tick_interval: Duration::from_millis(self.tick_interval_ms),
        }
    }
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            countdown_seconds: default_countdown_seconds(),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

/// Simulated backend latency and failure injection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Code delivery latency in milliseconds.
    #[serde(default = "default_send_code_delay_ms")]
    pub send_code_delay_ms: u64,

    /// Login latency in milliseconds.
    #[serde(default = "default_login_delay_ms")]
    pub login_delay_ms: u64,

    /// Make every code delivery fail with a network error.
    #[serde(default)]
    pub fail_code_delivery: bool,
}

impl SimulationConfig {
    /// Returns code delivery latency.
    #[must_use]
    pub const fn send_code_delay(&self) -> Duration {
        Duration::from_millis(self.send_code_delay_ms)
    }

    /// Returns login latency.
    #[must_use]
    pub const fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            send_code_delay_ms: default_send_code_delay_ms(),
            login_delay_ms: default_login_delay_ms(),
            fail_code_delivery: false,
        }
    }
}

/// Theme mode configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light mode (default).
    #[default]
    Light,
    /// Dark mode.
    Dark,
}

impl ThemeMode {
    /// Returns the other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Accent color (name or hex code).
    #[serde(default = "default_accent_color")]
    pub accent_color: String,

    /// Theme mode (Light, Dark).
    #[serde(default)]
    pub mode: ThemeMode,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
            mode: ThemeMode::default(),
        }
    }
}

fn default_accent_color() -> String {
    "#4169E1".to_string()
}

const fn default_countdown_seconds() -> u32 {
    60
}

const fn default_tick_interval_ms() -> u64 {
    1000
}

const fn default_send_code_delay_ms() -> u64 {
    1000
}

const fn default_login_delay_ms() -> u64 {
    2000
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(accent_color) = args.accent_color {
            self.theme.accent_color = accent_color;
        }
        if let Some(dark_mode) = args.dark_mode {
            self.theme.mode = if dark_mode {
                ThemeMode::Dark
            } else {
                ThemeMode::Light
            };
        }
        if let Some(countdown_seconds) = args.countdown_seconds {
            self.login.countdown_seconds = countdown_seconds;
        }
        if let Some(fail) = args.fail_code_delivery {
            self.simulation.fail_code_delivery = fail;
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default config file path.
    #[must_use]
    pub fn default_config_path() -> Option<PathBuf> {
        Self::default_config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("earnings-tui.log"))
    }

    /// Returns effective config path.
    #[must_use]
    pub fn effective_config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(Self::default_config_path)
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}
