//! Login flow controller.

use std::collections::VecDeque;

use tracing::{debug, info, warn};

use super::countdown::Countdown;
use crate::domain::entities::{
    LoginRequest, PHONE_NUMBER_MAX_LEN, PhoneNumber, Session, VERIFICATION_CODE_LEN,
    VerificationCode, sanitize_digits,
};
use crate::domain::errors::{LoginError, NetworkError};
use crate::domain::Alert;

const CODE_SENT_MESSAGE: &str = "Verification code sent";
const LOGIN_SUCCESS_MESSAGE: &str = "Login successful";

/// Identifies one dispatched collaborator call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperationTicket(u64);

/// Code delivery the caller must perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeDispatch {
    /// Ticket to hand back on completion.
    pub ticket: OperationTicket,
    /// Destination number.
    pub phone_number: PhoneNumber,
}

/// Login call the caller must perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginDispatch {
    /// Ticket to hand back on completion.
    pub ticket: OperationTicket,
    /// Submitted credentials.
    pub request: LoginRequest,
}

/// Operations every login screen drives.
///
/// `send_code` and `login` never perform I/O themselves: they return the work
/// to dispatch, and the caller reports the outcome through the matching
/// `complete_*` method. Completions for tickets that are no longer pending are
/// ignored and return `false`.
pub trait LoginFlow {
    /// Checks the phone number, raising an alert when it is malformed.
    fn validate_phone_number(&mut self) -> bool;

    /// Checks the verification code, raising an alert when it is malformed.
    fn validate_verification_code(&mut self) -> bool;

    /// Starts the request-code cooldown.
    fn start_countdown(&mut self);

    /// Stops the cooldown and resets it.
    fn stop_countdown(&mut self);

    /// Validates the phone and starts the cooldown.
    fn send_code(&mut self) -> Option<CodeDispatch>;

    /// Validates phone then code and enters the loading state.
    fn login(&mut self) -> Option<LoginDispatch>;

    /// Applies the outcome of a code delivery.
    fn complete_send_code(
        &mut self,
        ticket: OperationTicket,
        result: Result<(), NetworkError>,
    ) -> bool;

    /// Applies the outcome of a login call.
    fn complete_login(
        &mut self,
        ticket: OperationTicket,
        result: Result<Session, LoginError>,
    ) -> bool;
}

/// Read-only copy of the controller state handed to the view.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct LoginSnapshot {
    /// Phone field contents (digits only).
    pub phone_number: String,
    /// Code field contents (digits only).
    pub verification_code: String,
    /// Seconds left in the cooldown.
    pub countdown: u32,
    /// Whether the cooldown is running.
    pub is_counting_down: bool,
    /// Whether a login call is in flight.
    pub is_loading: bool,
    /// Whether the terms checkbox is ticked.
    pub is_agreed: bool,
    /// Whether the request-code button is enabled.
    pub can_request_code: bool,
    /// Whether the login button is enabled.
    pub can_login: bool,
    /// Alert currently shown, if any.
    pub alert: Option<Alert>,
    /// Session from a successful login.
    pub session: Option<Session>,
    /// Number of field edits applied so far.
    pub edits_applied: u64,
}

impl LoginSnapshot {
    /// Returns the request-code button caption.
    #[must_use]
    pub fn request_code_label(&self) -> String {
        if self.is_counting_down {
            format!("{}s", self.countdown)
        } else {
            "Get code".to_string()
        }
    }
}

impl Default for LoginSnapshot {
    fn default() -> Self {
        LoginController::default().snapshot()
    }
}

/// Owns all login screen state.
#[derive(Debug)]
pub struct LoginController {
    phone_number: String,
    verification_code: String,
    countdown: Countdown,
    is_loading: bool,
    is_agreed: bool,
    alerts: VecDeque<Alert>,
    session: Option<Session>,
    edits_applied: u64,
    pending_code: Option<OperationTicket>,
    pending_login: Option<OperationTicket>,
    next_ticket: u64,
}

impl LoginController {
    /// Creates controller with the given cooldown length in seconds.
    #[must_use]
    pub fn new(countdown_seconds: u32) -> Self {
        Self {
            phone_number: String::new(),
            verification_code: String::new(),
            countdown: Countdown::new(countdown_seconds),
            is_loading: false,
            is_agreed: false,
            alerts: VecDeque::new(),
            session: None,
            edits_applied: 0,
            pending_code: None,
            pending_login: None,
            next_ticket: 0,
        }
    }

    /// Replaces the phone field, keeping at most 11 digits.
    pub fn set_phone_number(&mut self, input: &str) {
        self.phone_number = sanitize_digits(input, PHONE_NUMBER_MAX_LEN);
        self.edits_applied += 1;
    }

    /// Replaces the code field, keeping at most 6 digits.
    pub fn set_verification_code(&mut self, input: &str) {
        self.verification_code = sanitize_digits(input, VERIFICATION_CODE_LEN);
        self.edits_applied += 1;
    }

    /// Flips the terms checkbox.
    pub fn toggle_agreement(&mut self) {
        self.is_agreed = !self.is_agreed;
    }

    /// Sets the terms checkbox.
    pub fn set_agreed(&mut self, agreed: bool) {
        self.is_agreed = agreed;
    }

    /// Dismisses the visible alert, revealing the next queued one.
    pub fn dismiss_alert(&mut self) {
        self.alerts.pop_front();
    }

    /// Advances the cooldown by one tick. Returns whether it is still running.
    pub fn tick(&mut self) -> bool {
        if self.countdown.tick() {
            debug!("Request-code cooldown finished");
        }
        self.countdown.is_counting()
    }

    /// Returns whether a code may be requested now. Stays disabled until the
    /// previous delivery has reported back, even if the cooldown is over.
    #[must_use]
    pub fn can_request_code(&self) -> bool {
        !self.countdown.is_counting()
            && self.pending_code.is_none()
            && !self.phone_number.is_empty()
    }

    /// Returns whether the login button is enabled.
    #[must_use]
    pub fn can_login(&self) -> bool {
        !self.is_loading
            && !self.phone_number.is_empty()
            && !self.verification_code.is_empty()
            && self.is_agreed
    }

    /// Returns whether the cooldown is running.
    #[must_use]
    pub const fn is_counting_down(&self) -> bool {
        self.countdown.is_counting()
    }

    /// Returns whether any collaborator call is pending.
    #[must_use]
    pub const fn has_pending_operations(&self) -> bool {
        self.pending_code.is_some() || self.pending_login.is_some()
    }

    /// Stops the cooldown and forgets pending calls. Called when the screen
    /// goes away; late completions are ignored afterwards.
    pub fn teardown(&mut self) {
        self.countdown.stop();
        self.is_loading = false;
        self.pending_code = None;
        self.pending_login = None;
    }

    /// Returns a snapshot for rendering.
    #[must_use]
    pub fn snapshot(&self) -> LoginSnapshot {
        LoginSnapshot {
            phone_number: self.phone_number.clone(),
            verification_code: self.verification_code.clone(),
            countdown: self.countdown.remaining(),
            is_counting_down: self.countdown.is_counting(),
            is_loading: self.is_loading,
            is_agreed: self.is_agreed,
            can_request_code: self.can_request_code(),
            can_login: self.can_login(),
            alert: self.alerts.front().cloned(),
            session: self.session.clone(),
            edits_applied: self.edits_applied,
        }
    }

    fn show_error(&mut self, error: &LoginError) {
        self.alerts.push_back(Alert::from(error));
    }

    fn issue_ticket(&mut self) -> OperationTicket {
        self.next_ticket += 1;
        OperationTicket(self.next_ticket)
    }
}

impl Default for LoginController {
    fn default() -> Self {
        Self::new(Countdown::DEFAULT_SECONDS)
    }
}

impl LoginFlow for LoginController {
    fn validate_phone_number(&mut self) -> bool {
        let valid = PhoneNumber::is_valid(&self.phone_number);
        if !valid {
            self.show_error(&LoginError::InvalidPhoneNumber);
        }
        valid
    }

    fn validate_verification_code(&mut self) -> bool {
        let valid = VerificationCode::is_valid(&self.verification_code);
        if !valid {
            self.show_error(&LoginError::InvalidVerificationCode);
        }
        valid
    }

    fn start_countdown(&mut self) {
        self.countdown.start();
    }

    fn stop_countdown(&mut self) {
        self.countdown.stop();
    }

    fn send_code(&mut self) -> Option<CodeDispatch> {
        if !self.can_request_code() {
            return None;
        }
        if !self.validate_phone_number() {
            return None;
        }
        let phone_number = PhoneNumber::new(self.phone_number.as_str())?;

        self.start_countdown();
        let ticket = self.issue_ticket();
        self.pending_code = Some(ticket);

        debug!(phone = %phone_number.masked(), "Dispatching verification code");
        Some(CodeDispatch {
            ticket,
            phone_number,
        })
    }

    fn login(&mut self) -> Option<LoginDispatch> {
        if !self.can_login() {
            return None;
        }
        if !self.validate_phone_number() || !self.validate_verification_code() {
            return None;
        }
        let phone_number = PhoneNumber::new(self.phone_number.as_str())?;
        let verification_code = VerificationCode::new(self.verification_code.as_str())?;

        self.is_loading = true;
        let ticket = self.issue_ticket();
        self.pending_login = Some(ticket);

        debug!(phone = %phone_number.masked(), "Dispatching login");
        Some(LoginDispatch {
            ticket,
            request: LoginRequest::new(phone_number, verification_code),
        })
    }

    fn complete_send_code(
        &mut self,
        ticket: OperationTicket,
        result: Result<(), NetworkError>,
    ) -> bool {
        if self.pending_code != Some(ticket) {
            debug!(?ticket, "Ignoring stale code delivery result");
            return false;
        }
        self.pending_code = None;

        match result {
            Ok(()) => {
                info!("Verification code sent");
                self.alerts.push_back(Alert::info(CODE_SENT_MESSAGE));
            }
            Err(e) => {
                warn!(error = %e, "Verification code delivery failed");
                self.countdown.stop();
                self.show_error(&LoginError::from(e));
            }
        }
        true
    }

    fn complete_login(
        &mut self,
        ticket: OperationTicket,
        result: Result<Session, LoginError>,
    ) -> bool {
        if self.pending_login != Some(ticket) {
            debug!(?ticket, "Ignoring stale login result");
            return false;
        }
        self.pending_login = None;
        self.is_loading = false;

        match result {
            Ok(session) => {
                info!(session_id = %session.id(), "Login successful");
                self.session = Some(session);
                self.alerts.push_back(Alert::success(LOGIN_SUCCESS_MESSAGE));
            }
            Err(e) => {
                warn!(error = %e, network = e.is_network_error(), "Login failed");
                self.show_error(&e);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AlertKind;

    const PHONE: &str = "13521032797";

    fn ready_controller() -> LoginController {
        let mut controller = LoginController::default();
        controller.set_phone_number(PHONE);
        controller.set_verification_code("000000");
        controller.set_agreed(true);
        controller
    }

    #[test]
    fn test_initial_snapshot() {
        let snapshot = LoginController::default().snapshot();
        assert_eq!(snapshot.countdown, 60);
        assert!(!snapshot.is_counting_down);
        assert!(!snapshot.is_loading);
        assert!(!snapshot.is_agreed);
        assert!(!snapshot.can_request_code);
        assert!(!snapshot.can_login);
        assert!(snapshot.alert.is_none());
        assert_eq!(snapshot.request_code_label(), "Get code");
        assert_eq!(snapshot, LoginSnapshot::default());
    }

    #[test]
    fn test_inputs_are_sanitized() {
        let mut controller = LoginController::default();
        controller.set_phone_number("135 2103 2797 99");
        controller.set_verification_code("12ab3456789");

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.phone_number, PHONE);
        assert_eq!(snapshot.verification_code, "123456");
    }

    #[test]
    fn test_invalid_phone_raises_one_alert() {
        let mut controller = LoginController::default();
        controller.set_phone_number("12345678901");

        assert!(!controller.validate_phone_number());
        let alert = controller.snapshot().alert.unwrap();
        assert_eq!(alert.kind, AlertKind::Error);
        assert_eq!(alert.message, LoginError::InvalidPhoneNumber.message());

        controller.dismiss_alert();
        assert!(controller.snapshot().alert.is_none());
    }

    #[test]
    fn test_valid_inputs_raise_no_alert() {
        let mut controller = ready_controller();
        assert!(controller.validate_phone_number());
        assert!(controller.validate_verification_code());
        assert!(controller.snapshot().alert.is_none());
    }

    #[test]
    fn test_login_gating() {
        let mut controller = LoginController::default();
        assert!(!controller.can_login());

        controller.set_phone_number(PHONE);
        assert!(!controller.can_login());

        controller.set_verification_code("000000");
        assert!(!controller.can_login());

        controller.toggle_agreement();
        assert!(controller.can_login());

        controller.login().unwrap();
        assert!(!controller.can_login());
    }

    #[test]
    fn test_login_disabled_does_not_alert() {
        let mut controller = ready_controller();
        controller.set_agreed(false);

        assert!(controller.login().is_none());
        assert!(controller.snapshot().alert.is_none());
    }

    #[test]
    fn test_login_reports_phone_before_code() {
        let mut controller = ready_controller();
        controller.set_phone_number("1352103279");
        controller.set_verification_code("123");

        assert!(controller.login().is_none());
        let snapshot = controller.snapshot();
        assert_eq!(
            snapshot.alert.unwrap().message,
            LoginError::InvalidPhoneNumber.message()
        );
        controller.dismiss_alert();
        assert!(controller.snapshot().alert.is_none());
        assert!(!snapshot.is_loading);
    }

    #[test]
    fn test_login_rejects_short_code() {
        let mut controller = ready_controller();
        controller.set_verification_code("12345");

        assert!(controller.login().is_none());
        assert_eq!(
            controller.snapshot().alert.unwrap().message,
            LoginError::InvalidVerificationCode.message()
        );
    }

    #[test]
    fn test_login_success_flow() {
        let mut controller = ready_controller();

        let dispatch = controller.login().unwrap();
        assert_eq!(dispatch.request.phone_number.as_str(), PHONE);
        assert_eq!(dispatch.request.verification_code.as_str(), "000000");
        assert!(controller.snapshot().is_loading);

        let session = Session::new(dispatch.request.phone_number.clone());
        assert!(controller.complete_login(dispatch.ticket, Ok(session.clone())));

        let snapshot = controller.snapshot();
        assert!(!snapshot.is_loading);
        assert_eq!(snapshot.session, Some(session));
        let alert = snapshot.alert.unwrap();
        assert_eq!(alert.kind, AlertKind::Success);
        assert_eq!(alert.message, LOGIN_SUCCESS_MESSAGE);

        controller.dismiss_alert();
        assert!(controller.snapshot().alert.is_none());
    }

    #[test]
    fn test_login_failure_clears_loading() {
        let mut controller = ready_controller();
        let dispatch = controller.login().unwrap();

        controller.complete_login(
            dispatch.ticket,
            Err(NetworkError::timeout().into()),
        );

        let snapshot = controller.snapshot();
        assert!(!snapshot.is_loading);
        assert!(snapshot.session.is_none());
        assert_eq!(
            snapshot.alert.unwrap().message,
            "Network error, please try again later"
        );
    }

    #[test]
    fn test_completion_applies_once() {
        let mut controller = ready_controller();
        let dispatch = controller.login().unwrap();
        let session = Session::new(dispatch.request.phone_number.clone());

        assert!(controller.complete_login(dispatch.ticket, Ok(session.clone())));
        assert!(!controller.complete_login(dispatch.ticket, Ok(session)));

        controller.dismiss_alert();
        assert!(controller.snapshot().alert.is_none());
    }

    #[test]
    fn test_send_code_starts_countdown() {
        let mut controller = LoginController::default();
        controller.set_phone_number(PHONE);

        let dispatch = controller.send_code().unwrap();
        assert_eq!(dispatch.phone_number.as_str(), PHONE);

        let snapshot = controller.snapshot();
        assert!(snapshot.is_counting_down);
        assert!(!snapshot.can_request_code);
        assert_eq!(snapshot.request_code_label(), "60s");
        assert!(snapshot.alert.is_none());

        assert!(controller.complete_send_code(dispatch.ticket, Ok(())));
        assert_eq!(
            controller.snapshot().alert.unwrap().message,
            CODE_SENT_MESSAGE
        );
    }

    #[test]
    fn test_send_code_invalid_phone() {
        let mut controller = LoginController::default();
        controller.set_phone_number("12345678901");

        assert!(controller.send_code().is_none());
        let snapshot = controller.snapshot();
        assert!(!snapshot.is_counting_down);
        assert_eq!(
            snapshot.alert.unwrap().message,
            LoginError::InvalidPhoneNumber.message()
        );
    }

    #[test]
    fn test_send_code_disabled_while_counting() {
        let mut controller = LoginController::default();
        controller.set_phone_number(PHONE);
        controller.send_code().unwrap();

        assert!(controller.send_code().is_none());
        assert!(controller.snapshot().alert.is_none());
    }

    #[test]
    fn test_delivery_failure_stops_countdown() {
        let mut controller = LoginController::default();
        controller.set_phone_number(PHONE);
        let dispatch = controller.send_code().unwrap();
        controller.tick();

        controller.complete_send_code(dispatch.ticket, Err(NetworkError::timeout()));

        let snapshot = controller.snapshot();
        assert!(!snapshot.is_counting_down);
        assert_eq!(snapshot.countdown, 60);
        assert!(snapshot.can_request_code);
        assert_eq!(snapshot.alert.unwrap().kind, AlertKind::Error);
    }

    #[test]
    fn test_request_code_reenabled_after_countdown() {
        let mut controller = LoginController::default();
        controller.set_phone_number(PHONE);
        let dispatch = controller.send_code().unwrap();
        controller.complete_send_code(dispatch.ticket, Ok(()));

        for _ in 0..59 {
            assert!(controller.tick());
            assert!(!controller.can_request_code());
        }
        assert!(!controller.tick());

        let snapshot = controller.snapshot();
        assert!(snapshot.can_request_code);
        assert_eq!(snapshot.countdown, 60);
    }

    #[test]
    fn test_request_code_waits_for_pending_delivery() {
        let mut controller = LoginController::new(1);
        controller.set_phone_number(PHONE);
        let first = controller.send_code().unwrap();

        assert!(!controller.tick());
        assert!(!controller.is_counting_down());
        assert!(!controller.can_request_code());
        assert!(controller.send_code().is_none());

        assert!(controller.complete_send_code(first.ticket, Err(NetworkError::timeout())));
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.alert.unwrap().kind, AlertKind::Error);
        assert!(snapshot.can_request_code);

        controller.dismiss_alert();
        let second = controller.send_code().unwrap();
        assert_ne!(second.ticket, first.ticket);
    }

    #[test]
    fn test_edits_are_counted() {
        let mut controller = LoginController::default();
        controller.set_phone_number("1");
        controller.set_phone_number("13");
        controller.set_verification_code("0");
        controller.toggle_agreement();

        assert_eq!(controller.snapshot().edits_applied, 3);
    }

    #[test]
    fn test_alerts_queue_in_order() {
        let mut controller = LoginController::default();
        controller.set_phone_number(PHONE);
        let dispatch = controller.send_code().unwrap();

        controller.set_verification_code("1");
        controller.set_agreed(true);
        controller.login();
        controller.complete_send_code(dispatch.ticket, Ok(()));

        assert_eq!(
            controller.snapshot().alert.unwrap().message,
            LoginError::InvalidVerificationCode.message()
        );
        controller.dismiss_alert();
        assert_eq!(
            controller.snapshot().alert.unwrap().message,
            CODE_SENT_MESSAGE
        );
    }

    #[test]
    fn test_teardown_drops_pending_results() {
        let mut controller = ready_controller();
        let code = controller.send_code().unwrap();
        let login = controller.login().unwrap();
        assert!(controller.has_pending_operations());

        controller.teardown();
        let session = Session::new(login.request.phone_number.clone());

        assert!(!controller.complete_send_code(code.ticket, Ok(())));
        assert!(!controller.complete_login(login.ticket, Ok(session)));

        let snapshot = controller.snapshot();
        assert!(!snapshot.is_counting_down);
        assert!(!snapshot.is_loading);
        assert!(snapshot.alert.is_none());
        assert!(snapshot.session.is_none());
    }
}
