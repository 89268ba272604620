use std::borrow::Cow;

use crate::domain::keybinding::Keybind;
use crate::presentation::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Which set of bindings the footer is describing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenContext {
    #[default]
    Login,
    Home,
    Drawer,
    Alert,
}

impl ScreenContext {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Login => "LOGIN",
            Self::Home => "HOME",
            Self::Drawer => "MENU",
            Self::Alert => "NOTICE",
        }
    }
}

fn key_label(key: &KeyEvent) -> Cow<'static, str> {
    let name: Cow<'static, str> = match key.code {
        KeyCode::Char(' ') => "Space".into(),
        KeyCode::Char(c) => c.to_string().into(),
        KeyCode::Enter => "Enter".into(),
        KeyCode::Esc => "Esc".into(),
        KeyCode::Tab => "Tab".into(),
        KeyCode::BackTab => "S-Tab".into(),
        KeyCode::Up => "↑".into(),
        KeyCode::Down => "↓".into(),
        other => format!("{other:?}").into(),
    };
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        format!("C-{name}").into()
    } else {
        name
    }
}

/// One-line key hint bar with the active context on the left and the app
/// version on the right.
pub struct FooterBar<'a> {
    keybindings: &'a [Keybind],
    theme: &'a Theme,
    context: Option<ScreenContext>,
    version: Option<&'a str>,
}

impl<'a> FooterBar<'a> {
    #[must_use]
    pub const fn new(keybindings: &'a [Keybind], theme: &'a Theme) -> Self {
        Self {
            keybindings,
            theme,
            context: None,
            version: None,
        }
    }

    #[must_use]
    pub const fn context(mut self, context: ScreenContext) -> Self {
        self.context = Some(context);
        self
    }

    #[must_use]
    pub const fn version(mut self, version: &'a str) -> Self {
        self.version = Some(version);
        self
    }

    fn hints(&self) -> Line<'a> {
        let key_style = Style::default()
            .fg(self.theme.accent)
            .add_modifier(Modifier::BOLD);
        let mut spans = Vec::new();

        if let Some(context) = self.context {
            spans.push(Span::styled(
                format!(" {} ", context.display_name()),
                Style::default()
                    .bg(self.theme.accent)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        for binding in self.keybindings.iter().filter(|k| k.visible_in_bar) {
            let key = binding
                .key_display
                .clone()
                .unwrap_or_else(|| key_label(&binding.key));
            spans.push(Span::raw("  "));
            spans.push(Span::styled(key, key_style));
            spans.push(Span::styled(
                format!(" {}", binding.label),
                self.theme.dimmed_style,
            ));
        }

        Line::from(spans)
    }
}

impl Widget for FooterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        buf.set_style(area, self.theme.base_style);

        let version_width = self
            .version
            .map_or(0, |v| u16::try_from(v.width() + 1).unwrap_or(u16::MAX));
        let [left, right] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(version_width)])
                .areas(area);

        Paragraph::new(self.hints()).render(left, buf);
        if let Some(version) = self.version {
            Paragraph::new(Span::styled(version, self.theme.dimmed_style))
                .right_aligned()
                .render(right, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::keybinding::{alert_keybinds, login_keybinds};

    fn rendered(bar: FooterBar<'_>, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        bar.render(area, &mut buf);
        (0..width).map(|x| buf[(x, 0)].symbol()).collect()
    }

    #[test]
    fn test_hidden_bindings_are_skipped() {
        let theme = Theme::default();
        let binds = alert_keybinds();
        let text = rendered(
            FooterBar::new(&binds, &theme).context(ScreenContext::Alert),
            60,
        );

        assert!(text.starts_with(" NOTICE "));
        assert!(text.contains("Enter OK"));
        assert!(!text.contains("Quit"));
    }

    #[test]
    fn test_key_labels() {
        let theme = Theme::default();
        let binds = login_keybinds();
        let text = rendered(FooterBar::new(&binds, &theme), 160);

        assert!(text.contains("Space"));
        assert!(text.contains("C-u"));
        assert!(text.contains("C-g Get code"));
    }

    #[test]
    fn test_version_is_right_aligned() {
        let theme = Theme::default();
        let text = rendered(FooterBar::new(&[], &theme).version("V0.1.0"), 20);
        assert!(text.ends_with("V0.1.0"));
    }
}
