//! Key bindings per screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::borrow::Cow;

/// Action a key press maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    Submit,
    Cancel,

    // Login form
    FocusNext,
    FocusPrevious,
    ClearInput,
    ToggleAgreement,
    RequestCode,

    // Home
    NextTab,
    PreviousTab,
    SelectTab(usize),
    ToggleDrawer,
    NavigateUp,
    NavigateDown,
    Select,

    // Drawer
    ToggleTheme,
}

/// Key bound to an action, with its footer caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub key: KeyEvent,
    pub action: Action,
    pub label: Cow<'static, str>,
    pub key_display: Option<Cow<'static, str>>,
    pub visible_in_bar: bool,
}

impl Keybind {
    pub fn new(key: KeyEvent, action: Action, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            action,
            label: label.into(),
            key_display: None,
            visible_in_bar: true,
        }
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible_in_bar = false;
        self
    }

    #[must_use]
    pub fn display(mut self, text: impl Into<Cow<'static, str>>) -> Self {
        self.key_display = Some(text.into());
        self
    }

    /// Returns whether the event triggers this binding.
    #[must_use]
    pub fn matches(&self, key: &KeyEvent) -> bool {
        if self.key.code != key.code {
            return false;
        }
        // Terminals disagree on whether Shift accompanies BackTab.
        matches!(key.code, KeyCode::BackTab) || self.key.modifiers == key.modifiers
    }
}

fn plain(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Returns the first action bound to `key`.
#[must_use]
pub fn resolve(bindings: &[Keybind], key: &KeyEvent) -> Option<Action> {
    bindings.iter().find(|b| b.matches(key)).map(|b| b.action)
}

#[must_use]
pub fn login_keybinds() -> Vec<Keybind> {
    vec![
        Keybind::new(plain(KeyCode::Enter), Action::Submit, "Press"),
        Keybind::new(plain(KeyCode::Tab), Action::FocusNext, "Next"),
        Keybind::new(plain(KeyCode::BackTab), Action::FocusPrevious, "Prev").hidden(),
        Keybind::new(plain(KeyCode::Down), Action::FocusNext, "Next").hidden(),
        Keybind::new(plain(KeyCode::Up), Action::FocusPrevious, "Prev").hidden(),
        Keybind::new(ctrl('g'), Action::RequestCode, "Get code"),
        Keybind::new(ctrl('u'), Action::ClearInput, "Clear"),
        Keybind::new(plain(KeyCode::Char(' ')), Action::ToggleAgreement, "Agree")
            .display("Space"),
        Keybind::new(plain(KeyCode::Esc), Action::Quit, "Quit"),
        Keybind::new(ctrl('c'), Action::Quit, "Quit").hidden(),
    ]
}

#[must_use]
pub fn home_keybinds() -> Vec<Keybind> {
    vec![
        Keybind::new(plain(KeyCode::Char('m')), Action::ToggleDrawer, "Menu"),
        Keybind::new(plain(KeyCode::Tab), Action::NextTab, "Tab"),
        Keybind::new(plain(KeyCode::BackTab), Action::PreviousTab, "Tab").hidden(),
        Keybind::new(plain(KeyCode::Char('1')), Action::SelectTab(0), "Home").hidden(),
        Keybind::new(plain(KeyCode::Char('2')), Action::SelectTab(1), "Data").hidden(),
        Keybind::new(plain(KeyCode::Char('3')), Action::SelectTab(2), "Stats").hidden(),
        Keybind::new(plain(KeyCode::Char('j')), Action::NavigateDown, "Down").hidden(),
        Keybind::new(plain(KeyCode::Char('k')), Action::NavigateUp, "Up").hidden(),
        Keybind::new(plain(KeyCode::Down), Action::NavigateDown, "Down").display("↓/j"),
        Keybind::new(plain(KeyCode::Up), Action::NavigateUp, "Up").display("↑/k"),
        Keybind::new(plain(KeyCode::Char('q')), Action::Quit, "Quit"),
        Keybind::new(ctrl('c'), Action::Quit, "Quit").hidden(),
    ]
}

#[must_use]
pub fn drawer_keybinds() -> Vec<Keybind> {
    vec![
        Keybind::new(plain(KeyCode::Down), Action::NavigateDown, "Down").display("↓/j"),
        Keybind::new(plain(KeyCode::Char('j')), Action::NavigateDown, "Down").hidden(),
        Keybind::new(plain(KeyCode::Up), Action::NavigateUp, "Up").display("↑/k"),
        Keybind::new(plain(KeyCode::Char('k')), Action::NavigateUp, "Up").hidden(),
        Keybind::new(plain(KeyCode::Enter), Action::Select, "Select"),
        Keybind::new(plain(KeyCode::Char('d')), Action::ToggleTheme, "Theme"),
        Keybind::new(plain(KeyCode::Esc), Action::Cancel, "Close"),
        Keybind::new(plain(KeyCode::Char('m')), Action::ToggleDrawer, "Close").hidden(),
        Keybind::new(ctrl('c'), Action::Quit, "Quit").hidden(),
    ]
}

#[must_use]
pub fn alert_keybinds() -> Vec<Keybind> {
    vec![
        Keybind::new(plain(KeyCode::Enter), Action::Submit, "OK"),
        Keybind::new(plain(KeyCode::Esc), Action::Cancel, "OK").hidden(),
        Keybind::new(ctrl('c'), Action::Quit, "Quit").hidden(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_login() {
        let binds = login_keybinds();
        assert_eq!(resolve(&binds, &plain(KeyCode::Tab)), Some(Action::FocusNext));
        assert_eq!(resolve(&binds, &ctrl('g')), Some(Action::RequestCode));
        assert_eq!(resolve(&binds, &plain(KeyCode::Char('5'))), None);
    }

    #[test]
    fn test_backtab_ignores_shift() {
        let binds = home_keybinds();
        let shifted = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(resolve(&binds, &shifted), Some(Action::PreviousTab));
    }

    #[test]
    fn test_modifiers_must_match() {
        let binds = home_keybinds();
        let ctrl_q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert_eq!(resolve(&binds, &ctrl_q), None);
        assert_eq!(resolve(&binds, &ctrl('c')), Some(Action::Quit));
    }

    #[test]
    fn test_tab_digits() {
        let binds = home_keybinds();
        assert_eq!(
            resolve(&binds, &plain(KeyCode::Char('3'))),
            Some(Action::SelectTab(2))
        );
    }
}
