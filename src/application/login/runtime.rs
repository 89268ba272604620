//! Async driver for the login controller.
//!
//! A single task owns the [`LoginController`]. The view talks to it through
//! [`LoginHandle`]: user intents go in over an unbounded channel, and every
//! state change comes back as a [`LoginSnapshot`] on a watch channel. Timer
//! ticks and collaborator results are delivered into the same task, so the
//! controller is only ever mutated from one place.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};
use tracing::{debug, error, info};

use super::controller::{LoginController, LoginFlow, LoginSnapshot, OperationTicket};
use super::countdown::Countdown;
use crate::application::use_cases::{LoginUseCase, SendCodeUseCase};
use crate::domain::entities::Session;
use crate::domain::errors::{LoginError, NetworkError};

/// User action sent from the login screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginIntent {
    /// Phone field edited.
    EditPhoneNumber(String),
    /// Code field edited.
    EditVerificationCode(String),
    /// Terms checkbox toggled.
    ToggleAgreement,
    /// "Get code" pressed.
    RequestCode,
    /// "Login" pressed.
    Submit,
    /// Alert acknowledged.
    DismissAlert,
}

/// Cooldown timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginTimings {
    /// Cooldown length in ticks.
    pub countdown_seconds: u32,
    /// Time between ticks.
    pub tick_interval: Duration,
}

impl Default for LoginTimings {
    fn default() -> Self {
        Self {
            countdown_seconds: Countdown::DEFAULT_SECONDS,
            tick_interval: Duration::from_secs(1),
        }
    }
}

#[derive(Debug)]
enum Completion {
    CodeSent {
        ticket: OperationTicket,
        result: Result<(), NetworkError>,
    },
    LoggedIn {
        ticket: OperationTicket,
        result: Result<Session, LoginError>,
    },
}

/// Spawns login actors.
#[derive(Clone)]
pub struct LoginRuntime {
    send_code: SendCodeUseCase,
    login: LoginUseCase,
    timings: LoginTimings,
}

impl LoginRuntime {
    /// Creates runtime from the two collaborator use cases.
    #[must_use]
    pub const fn new(send_code: SendCodeUseCase, login: LoginUseCase, timings: LoginTimings) -> Self {
        Self {
            send_code,
            login,
            timings,
        }
    }

    /// Starts a fresh login actor for one screen lifetime.
    #[must_use]
    pub fn spawn(&self) -> LoginHandle {
        let controller = LoginController::new(self.timings.countdown_seconds);
        let (intent_tx, intent_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(controller.snapshot());
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let actor = LoginActor {
            controller,
            send_code: self.send_code.clone(),
            login: self.login.clone(),
            tick_interval: self.timings.tick_interval,
            intent_rx,
            shutdown_rx,
            snapshot_tx,
            ticker: None,
            in_flight: JoinSet::new(),
        };

        let task = tokio::spawn(actor.run());

        LoginHandle {
            intent_tx,
            snapshot_rx,
            shutdown_tx,
            task: Some(task),
        }
    }
}

/// View-side handle to a running login actor.
///
/// Dropping the handle aborts the actor; [`LoginHandle::shutdown`] stops it
/// gracefully and waits for it.
pub struct LoginHandle {
    intent_tx: mpsc::UnboundedSender<LoginIntent>,
    snapshot_rx: watch::Receiver<LoginSnapshot>,
    shutdown_tx: watch::Sender<bool>,
    task: Option<JoinHandle<()>>,
}

impl LoginHandle {
    /// Sends an intent. Returns `false` if the actor is gone.
    pub fn send(&self, intent: LoginIntent) -> bool {
        self.intent_tx.send(intent).is_ok()
    }

    /// Returns the latest snapshot.
    #[must_use]
    pub fn snapshot(&self) -> LoginSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// Waits for the next snapshot. Returns `false` once the actor has stopped.
    pub async fn changed(&mut self) -> bool {
        self.snapshot_rx.changed().await.is_ok()
    }

    /// Stops the actor: the cooldown ticker is dropped and pending
    /// collaborator calls are aborted.
    pub async fn shutdown(mut self) {
        let _ = self.shutdown_tx.send(true);
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                error!(error = %e, "Login actor terminated abnormally");
            }
        }
    }
}

impl Drop for LoginHandle {
    fn drop(&mut self) {
        let _ = self.shutdown_tx.send(true);
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

struct LoginActor {
    controller: LoginController,
    send_code: SendCodeUseCase,
    login: LoginUseCase,
    tick_interval: Duration,
    intent_rx: mpsc::UnboundedReceiver<LoginIntent>,
    shutdown_rx: watch::Receiver<bool>,
    snapshot_tx: watch::Sender<LoginSnapshot>,
    ticker: Option<Interval>,
    in_flight: JoinSet<Completion>,
}

impl LoginActor {
    async fn run(mut self) {
        debug!("Login actor started");

        loop {
            tokio::select! {
                biased;

                _ = self.shutdown_rx.changed() => break,

                intent = self.intent_rx.recv() => match intent {
                    Some(intent) => self.handle_intent(intent),
                    None => break,
                },

                Some(joined) = self.in_flight.join_next(), if !self.in_flight.is_empty() => {
                    match joined {
                        Ok(completion) => self.handle_completion(completion),
                        Err(e) if e.is_cancelled() => {}
                        Err(e) => error!(error = %e, "Collaborator task panicked"),
                    }
                }

                () = next_tick(&mut self.ticker) => self.handle_tick(),
            }

            self.publish();
        }

        self.teardown();
        debug!("Login actor stopped");
    }

    fn handle_intent(&mut self, intent: LoginIntent) {
        match intent {
            LoginIntent::EditPhoneNumber(value) => self.controller.set_phone_number(&value),
            LoginIntent::EditVerificationCode(value) => {
                self.controller.set_verification_code(&value);
            }
            LoginIntent::ToggleAgreement => self.controller.toggle_agreement(),
            LoginIntent::DismissAlert => self.controller.dismiss_alert(),
            LoginIntent::RequestCode => {
                if let Some(dispatch) = self.controller.send_code() {
                    self.start_ticker();
                    let use_case = self.send_code.clone();
                    self.in_flight.spawn(async move {
                        let result = use_case.execute(&dispatch.phone_number).await;
                        Completion::CodeSent {
                            ticket: dispatch.ticket,
                            result,
                        }
                    });
                }
            }
            LoginIntent::Submit => {
                if let Some(dispatch) = self.controller.login() {
                    let use_case = self.login.clone();
                    self.in_flight.spawn(async move {
                        let result = use_case.execute(&dispatch.request).await;
                        Completion::LoggedIn {
                            ticket: dispatch.ticket,
                            result,
                        }
                    });
                }
            }
        }
    }

    fn handle_completion(&mut self, completion: Completion) {
        match completion {
            Completion::CodeSent { ticket, result } => {
                self.controller.complete_send_code(ticket, result);
                if !self.controller.is_counting_down() {
                    self.ticker = None;
                }
            }
            Completion::LoggedIn { ticket, result } => {
                self.controller.complete_login(ticket, result);
            }
        }
    }

    fn handle_tick(&mut self) {
        if !self.controller.tick() {
            self.ticker = None;
        }
    }

    fn start_ticker(&mut self) {
        let mut ticker = interval_at(Instant::now() + self.tick_interval, self.tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.ticker = Some(ticker);
    }

    fn publish(&self) {
        let next = self.controller.snapshot();
        self.snapshot_tx.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }

    fn teardown(&mut self) {
        self.ticker = None;
        if self.controller.has_pending_operations() {
            info!(pending = self.in_flight.len(), "Cancelling in-flight login requests");
        }
        self.in_flight.abort_all();
        self.controller.teardown();
        self.publish();
    }
}

async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(ticker) => {
            ticker.tick().await;
        }
        None => std::future::pending().await,
    }
}
