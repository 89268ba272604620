use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "earnings-tui",
    version,
    about = "Revenue dashboard for the terminal",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,

    /// Start in dark mode.
    #[arg(long)]
    pub dark_mode: Option<bool>,

    /// Seconds before another verification code may be requested.
    #[arg(long, value_name = "SECONDS")]
    pub countdown_seconds: Option<u32>,

    /// Make the simulated code delivery fail.
    #[arg(long)]
    pub fail_code_delivery: Option<bool>,
}
