use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use earnings_tui::application::{LoginRuntime, LoginUseCase, SendCodeUseCase};
use earnings_tui::infrastructure::{
    AppConfig, CliArgs, SimulatedAuthService, SimulatedCodeDelivery, StorageManager,
};
use earnings_tui::presentation::App;
use earnings_tui::presentation::theme::Theme;
use earnings_tui::presentation::ui::ThemeStore;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn create_app() -> Result<App> {
    let args = CliArgs::parse();
    let storage = StorageManager::new()?;
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);

    init_logging(&config)?;

    info!(
        version = earnings_tui::VERSION,
        countdown_seconds = config.login.countdown_seconds,
        fail_code_delivery = config.simulation.fail_code_delivery,
        "Starting {}",
        earnings_tui::NAME
    );

    let delivery = Arc::new(
        SimulatedCodeDelivery::new(config.simulation.send_code_delay())
            .failing(config.simulation.fail_code_delivery),
    );
    let auth = Arc::new(SimulatedAuthService::new(config.simulation.login_delay()));

    let runtime = LoginRuntime::new(
        SendCodeUseCase::new(delivery),
        LoginUseCase::new(auth),
        config.login.timings(),
    );
    let theme = Theme::from_config(&config.theme);
    let theme_store = ThemeStore::new(storage, config.config.clone());

    Ok(App::new(runtime, theme).with_theme_store(theme_store))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let app = create_app()?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
