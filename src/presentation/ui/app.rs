//! Main application orchestrator.

use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use futures_util::future::Either;
use ratatui::layout::{Constraint, Layout};
use ratatui::{DefaultTerminal, Frame};
use tokio::time::interval;
use tracing::{debug, error, info, warn};

use super::login_screen::{LoginAction, LoginScreen, LoginView};
use super::main_screen::{MainAction, MainScreen, MainView};
use crate::application::login::{LoginHandle, LoginRuntime, LoginSnapshot};
use crate::domain::entities::Session;
use crate::infrastructure::config::{ConfigError, StorageManager, ThemeMode};
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::FooterBar;

const RENDER_TICK_RATE: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Login,
    Home,
    Exiting,
}

enum CurrentScreen {
    Login {
        screen: LoginScreen,
        handle: LoginHandle,
        snapshot: LoginSnapshot,
    },
    Home(MainScreen),
}

/// Writes theme mode changes back to the config file.
pub struct ThemeStore {
    storage: StorageManager,
    path: Option<PathBuf>,
}

impl ThemeStore {
    #[must_use]
    pub const fn new(storage: StorageManager, path: Option<PathBuf>) -> Self {
        Self { storage, path }
    }

    fn save(&self, mode: ThemeMode) -> Result<(), ConfigError> {
        let path = self.path.as_deref();
        let mut config = self.storage.load_config(path)?;
        config.theme.mode = mode;
        self.storage.save_config(path, &config)
    }
}

pub struct App {
    state: AppState,
    screen: CurrentScreen,
    runtime: LoginRuntime,
    theme: Theme,
    theme_store: Option<ThemeStore>,
}

impl App {
    /// Creates the app on the login screen. Must be called inside a Tokio
    /// runtime since it spawns the login actor.
    #[must_use]
    pub fn new(runtime: LoginRuntime, theme: Theme) -> Self {
        let screen = Self::login_screen(&runtime);
        Self {
            state: AppState::Login,
            screen,
            runtime,
            theme,
            theme_store: None,
        }
    }

    #[must_use]
    pub fn with_theme_store(mut self, store: ThemeStore) -> Self {
        self.theme_store = Some(store);
        self
    }

    fn login_screen(runtime: &LoginRuntime) -> CurrentScreen {
        let handle = runtime.spawn();
        let snapshot = handle.snapshot();
        CurrentScreen::Login {
            screen: LoginScreen::new(),
            handle,
            snapshot,
        }
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.run_event_loop(terminal).await?;

        if let CurrentScreen::Login { handle, .. } = self.screen {
            handle.shutdown().await;
        }
        info!("Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut render_interval = interval(RENDER_TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            let snapshot_changed = match &mut self.screen {
                CurrentScreen::Login { handle, .. } => Either::Left(handle.changed()),
                CurrentScreen::Home(_) => Either::Right(std::future::pending::<bool>()),
            };
            let terminal_event = terminal_events.next();

            tokio::select! {
                Some(Ok(event)) = terminal_event => {
                    if self.handle_terminal_event(&event) == EventResult::Exit {
                        self.state = AppState::Exiting;
                    }
                }

                alive = snapshot_changed => {
                    if alive {
                        self.sync_login().await;
                    } else {
                        error!("Login actor stopped unexpectedly, restarting");
                        self.screen = Self::login_screen(&self.runtime);
                    }
                }

                _ = render_interval.tick() => {}
            }

            terminal.draw(|frame| self.render(frame))?;
        }

        Ok(())
    }

    fn handle_terminal_event(&mut self, event: &Event) -> EventResult {
        let Some(key) = EventHandler::key_press(event) else {
            return EventResult::Continue;
        };
        if EventHandler::is_quit_event(&key) {
            return EventResult::Exit;
        }
        self.handle_key(key)
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        match &mut self.screen {
            CurrentScreen::Login {
                screen,
                handle,
                snapshot,
            } => match screen.handle_key(key, snapshot) {
                LoginAction::Intent(intent) => {
                    if !handle.send(intent) {
                        warn!("Login actor is gone, intent dropped");
                    }
                }
                LoginAction::Quit => return EventResult::Exit,
                LoginAction::None => {}
            },
            CurrentScreen::Home(screen) => match screen.handle_key(key) {
                MainAction::ToggleTheme => self.toggle_theme(),
                MainAction::SignOut => self.sign_out(),
                MainAction::Quit => return EventResult::Exit,
                MainAction::None => {}
            },
        }
        EventResult::Continue
    }

    /// Pulls the latest snapshot. Once the success alert has been dismissed
    /// the login actor is shut down and the home screen takes over.
    async fn sync_login(&mut self) {
        let CurrentScreen::Login {
            screen,
            handle,
            snapshot,
        } = &mut self.screen
        else {
            return;
        };

        *snapshot = handle.snapshot();
        screen.sync(snapshot);

        if snapshot.alert.is_none()
            && let Some(session) = snapshot.session.clone()
        {
            self.enter_home(session).await;
        }
    }

    async fn enter_home(&mut self, session: Session) {
        info!(session_id = %session.id(), "Signed in");
        let previous = std::mem::replace(
            &mut self.screen,
            CurrentScreen::Home(MainScreen::new(session)),
        );
        if let CurrentScreen::Login { handle, .. } = previous {
            handle.shutdown().await;
        }
        self.state = AppState::Home;
    }

    fn sign_out(&mut self) {
        if let CurrentScreen::Home(screen) = &self.screen {
            info!(session_id = %screen.session().id(), "Signed out");
        }
        self.screen = Self::login_screen(&self.runtime);
        self.state = AppState::Login;
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        debug!(mode = ?self.theme.mode, "Theme toggled");

        if let Some(store) = &self.theme_store
            && let Err(e) = store.save(self.theme.mode)
        {
            warn!(error = %e, "Failed to persist theme mode");
        }
    }

    fn render(&self, frame: &mut Frame) {
        let [body, footer] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());

        let (keybinds, context) = match &self.screen {
            CurrentScreen::Login {
                screen, snapshot, ..
            } => {
                frame.render_widget(LoginView::new(screen, snapshot, &self.theme), body);
                (screen.keybinds(snapshot), screen.context(snapshot))
            }
            CurrentScreen::Home(screen) => {
                frame.render_widget(MainView::new(screen, &self.theme), body);
                (screen.keybinds(), screen.context())
            }
        };

        let version = format!("V{}", crate::VERSION);
        frame.render_widget(
            FooterBar::new(keybinds, &self.theme)
                .context(context)
                .version(&version),
            footer,
        );
    }
}
