//! Phone number + verification code login form.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use super::alert_popup::AlertPopup;
use super::utils::centered;
use crate::application::login::{LoginIntent, LoginSnapshot};
use crate::domain::entities::{PHONE_NUMBER_MAX_LEN, VERIFICATION_CODE_LEN};
use crate::domain::keybinding::{Action, Keybind, alert_keybinds, login_keybinds, resolve};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{ScreenContext, TextInput};

const FORM_WIDTH: u16 = 52;
const FORM_HEIGHT: u16 = 18;
const BUTTON_WIDTH: u16 = 12;

/// Focusable element of the form, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    PhoneNumber,
    VerificationCode,
    RequestCode,
    Login,
    Agreement,
    UserAgreement,
    PrivacyPolicy,
}

impl LoginField {
    const ORDER: [Self; 7] = [
        Self::PhoneNumber,
        Self::VerificationCode,
        Self::RequestCode,
        Self::Login,
        Self::Agreement,
        Self::UserAgreement,
        Self::PrivacyPolicy,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    fn previous(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Terms documents linked under the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Document {
    UserAgreement,
    PrivacyPolicy,
}

impl Document {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::UserAgreement => "User Agreement",
            Self::PrivacyPolicy => "Privacy Policy",
        }
    }

    #[must_use]
    pub const fn body(self) -> &'static str {
        match self {
            Self::UserAgreement => "This is the content of the user agreement...",
            Self::PrivacyPolicy => "This is the content of the privacy policy...",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginAction {
    None,
    Intent(LoginIntent),
    Quit,
}

/// View-local state of the login form. Everything else lives in the
/// [`LoginSnapshot`] published by the login actor.
pub struct LoginScreen {
    phone_input: TextInput,
    code_input: TextInput,
    focus: LoginField,
    document: Option<Document>,
    edits_sent: u64,
    keybinds: Vec<Keybind>,
    alert_keybinds: Vec<Keybind>,
}

impl LoginScreen {
    #[must_use]
    pub fn new() -> Self {
        let mut phone_input = TextInput::new(" Phone number ", PHONE_NUMBER_MAX_LEN)
            .placeholder("Enter your phone number");
        phone_input.set_focused(true);
        let code_input = TextInput::new(" Verification code ", VERIFICATION_CODE_LEN)
            .placeholder("6-digit code");

        Self {
            phone_input,
            code_input,
            focus: LoginField::PhoneNumber,
            document: None,
            edits_sent: 0,
            keybinds: login_keybinds(),
            alert_keybinds: alert_keybinds(),
        }
    }

    #[must_use]
    pub const fn focus(&self) -> LoginField {
        self.focus
    }

    #[must_use]
    pub const fn document(&self) -> Option<Document> {
        self.document
    }

    /// Bindings for the footer, depending on what is on top.
    #[must_use]
    pub fn keybinds(&self, snapshot: &LoginSnapshot) -> &[Keybind] {
        if snapshot.alert.is_some() || self.document.is_some() {
            &self.alert_keybinds
        } else {
            &self.keybinds
        }
    }

    #[must_use]
    pub const fn context(&self, snapshot: &LoginSnapshot) -> ScreenContext {
        if snapshot.alert.is_some() || self.document.is_some() {
            ScreenContext::Alert
        } else {
            ScreenContext::Login
        }
    }

    /// Pulls field values from the latest snapshot.
    ///
    /// The inputs own the text while edits are in flight: a snapshot that has
    /// not yet applied every edit sent from here is not copied back.
    pub fn sync(&mut self, snapshot: &LoginSnapshot) {
        if snapshot.edits_applied < self.edits_sent {
            return;
        }
        if self.phone_input.value() != snapshot.phone_number {
            self.phone_input.set_value(snapshot.phone_number.as_str());
        }
        if self.code_input.value() != snapshot.verification_code {
            self.code_input.set_value(snapshot.verification_code.as_str());
        }
    }

    fn set_focus(&mut self, field: LoginField) {
        self.focus = field;
        self.phone_input.set_focused(field == LoginField::PhoneNumber);
        self.code_input.set_focused(field == LoginField::VerificationCode);
    }

    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            LoginField::PhoneNumber => Some(&mut self.phone_input),
            LoginField::VerificationCode => Some(&mut self.code_input),
            _ => None,
        }
    }

    fn edit_intent(&mut self) -> LoginAction {
        let intent = match self.focus {
            LoginField::PhoneNumber => {
                LoginIntent::EditPhoneNumber(self.phone_input.value().to_string())
            }
            LoginField::VerificationCode => {
                LoginIntent::EditVerificationCode(self.code_input.value().to_string())
            }
            _ => return LoginAction::None,
        };
        self.edits_sent += 1;
        LoginAction::Intent(intent)
    }

    fn request_code(snapshot: &LoginSnapshot) -> LoginAction {
        if snapshot.can_request_code {
            LoginAction::Intent(LoginIntent::RequestCode)
        } else {
            LoginAction::None
        }
    }

    fn submit(snapshot: &LoginSnapshot) -> LoginAction {
        if snapshot.can_login {
            LoginAction::Intent(LoginIntent::Submit)
        } else {
            LoginAction::None
        }
    }

    fn activate(&mut self, snapshot: &LoginSnapshot) -> LoginAction {
        match self.focus {
            LoginField::PhoneNumber => {
                self.set_focus(LoginField::VerificationCode);
                LoginAction::None
            }
            LoginField::VerificationCode | LoginField::Login => Self::submit(snapshot),
            LoginField::RequestCode => Self::request_code(snapshot),
            LoginField::Agreement => LoginAction::Intent(LoginIntent::ToggleAgreement),
            LoginField::UserAgreement => {
                self.document = Some(Document::UserAgreement);
                LoginAction::None
            }
            LoginField::PrivacyPolicy => {
                self.document = Some(Document::PrivacyPolicy);
                LoginAction::None
            }
        }
    }

    /// Maps a key press to an intent for the login actor.
    pub fn handle_key(&mut self, key: KeyEvent, snapshot: &LoginSnapshot) -> LoginAction {
        if snapshot.alert.is_some() || self.document.is_some() {
            return match resolve(&self.alert_keybinds, &key) {
                Some(Action::Quit) => LoginAction::Quit,
                Some(Action::Submit | Action::Cancel) => {
                    if self.document.take().is_some() {
                        LoginAction::None
                    } else {
                        LoginAction::Intent(LoginIntent::DismissAlert)
                    }
                }
                _ => LoginAction::None,
            };
        }

        if let Some(action) = resolve(&self.keybinds, &key) {
            return match action {
                Action::Submit => self.activate(snapshot),
                Action::FocusNext => {
                    self.set_focus(self.focus.next());
                    LoginAction::None
                }
                Action::FocusPrevious => {
                    self.set_focus(self.focus.previous());
                    LoginAction::None
                }
                Action::RequestCode => Self::request_code(snapshot),
                Action::ClearInput => match self.focused_input() {
                    Some(input) => {
                        input.clear();
                        self.edit_intent()
                    }
                    None => LoginAction::None,
                },
                Action::ToggleAgreement => LoginAction::Intent(LoginIntent::ToggleAgreement),
                Action::Quit => LoginAction::Quit,
                _ => LoginAction::None,
            };
        }

        let Some(input) = self.focused_input() else {
            return LoginAction::None;
        };
        let changed = match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                input.input_char(c)
            }
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Left => {
                input.move_left();
                false
            }
            KeyCode::Right => {
                input.move_right();
                false
            }
            KeyCode::Home => {
                input.move_start();
                false
            }
            KeyCode::End => {
                input.move_end();
                false
            }
            _ => false,
        };

        if changed {
            self.edit_intent()
        } else {
            LoginAction::None
        }
    }
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders a [`LoginScreen`] against a snapshot.
pub struct LoginView<'a> {
    screen: &'a LoginScreen,
    snapshot: &'a LoginSnapshot,
    theme: &'a Theme,
}

impl<'a> LoginView<'a> {
    #[must_use]
    pub const fn new(screen: &'a LoginScreen, snapshot: &'a LoginSnapshot, theme: &'a Theme) -> Self {
        Self {
            screen,
            snapshot,
            theme,
        }
    }

    fn focus_style(&self, field: LoginField) -> Style {
        if self.screen.focus == field {
            Style::default()
                .fg(self.theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(self.theme.accent)
        }
    }

    fn button(&self, label: &str, field: LoginField, enabled: bool) -> Paragraph<'static> {
        let focused = self.screen.focus == field;
        let style = if enabled {
            Style::default()
                .bg(self.theme.accent)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            self.theme.dimmed_style
        };
        let border = if focused {
            BorderType::Thick
        } else {
            BorderType::Rounded
        };

        Paragraph::new(label.to_string())
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(border)
                    .border_style(style),
            )
    }

    fn agreement_line(&self) -> Line<'static> {
        let checkbox = if self.snapshot.is_agreed { "[x]" } else { "[ ]" };
        let checkbox_style = if self.screen.focus == LoginField::Agreement {
            Style::default()
                .fg(self.theme.accent)
                .add_modifier(Modifier::REVERSED)
        } else {
            Style::default().fg(self.theme.accent)
        };

        Line::from(vec![
            Span::styled(checkbox, checkbox_style),
            Span::styled(" I agree to the ", self.theme.dimmed_style),
            Span::styled(
                Document::UserAgreement.title(),
                self.focus_style(LoginField::UserAgreement),
            ),
            Span::styled(" and ", self.theme.dimmed_style),
            Span::styled(
                Document::PrivacyPolicy.title(),
                self.focus_style(LoginField::PrivacyPolicy),
            ),
        ])
    }
}

impl Widget for LoginView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.theme.base_style);

        let form = centered(area, FORM_WIDTH, FORM_HEIGHT);
        let [
            logo,
            subtitle,
            _,
            phone,
            code_row,
            _,
            login,
            _,
            agreement,
        ] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .areas(form);

        Paragraph::new(vec![
            Line::from(Span::styled(
                "◆ Earnings",
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Welcome back",
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center)
        .render(logo, buf);

        Paragraph::new(Span::styled(
            "Sign in with your phone number",
            self.theme.dimmed_style,
        ))
        .alignment(Alignment::Center)
        .render(subtitle, buf);

        (&self.screen.phone_input).render(phone, buf);

        let [code, request] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(BUTTON_WIDTH)])
                .areas(code_row);
        (&self.screen.code_input).render(code, buf);
        self.button(
            &self.snapshot.request_code_label(),
            LoginField::RequestCode,
            self.snapshot.can_request_code,
        )
        .render(request, buf);

        let login_label = if self.snapshot.is_loading {
            "Signing in..."
        } else {
            "Login"
        };
        self.button(login_label, LoginField::Login, self.snapshot.can_login)
            .render(login, buf);

        Paragraph::new(self.agreement_line())
            .wrap(Wrap { trim: true })
            .render(agreement, buf);

        if let Some(document) = self.screen.document {
            AlertPopup::new(document.title(), document.body(), self.theme).render(area, buf);
        } else if let Some(alert) = &self.snapshot.alert {
            AlertPopup::for_alert(alert, self.theme).render(area, buf);
        }
    }
}
