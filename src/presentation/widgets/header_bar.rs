use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

pub struct HeaderBarStyle {
    pub background: Style,
    pub menu: Style,
    pub title: Style,
    pub account: Style,
}

impl HeaderBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        use crate::presentation::theme::adapter::ColorConverter;

        let account_bg = ColorConverter::shade(theme.accent, 0.08, 0.5);

        Self {
            background: theme.header_style,
            menu: theme.header_style,
            title: theme.header_style,
            account: Style::default().bg(account_bg).fg(Color::White),
        }
    }
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            menu: Style::default().fg(Color::Cyan),
            title: Style::default().add_modifier(Modifier::BOLD),
            account: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Navigation bar: menu glyph, centered page title, signed-in account.
pub struct HeaderBar<'a> {
    title: &'a str,
    account: Option<&'a str>,
    menu_open: bool,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    #[must_use]
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            account: None,
            menu_open: false,
            style: HeaderBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn account(mut self, account: Option<&'a str>) -> Self {
        self.account = account;
        self
    }

    #[must_use]
    pub const fn menu_open(mut self, open: bool) -> Self {
        self.menu_open = open;
        self
    }

    #[must_use]
    pub const fn style(mut self, style: HeaderBarStyle) -> Self {
        self.style = style;
        self
    }

    const fn menu_glyph(&self) -> &'static str {
        if self.menu_open { " ✕ " } else { " ☰ " }
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        Paragraph::new(Span::styled(self.menu_glyph(), self.style.menu))
            .render(Rect::new(area.x, area.y, area.width.min(3), 1), buf);

        let title_width = u16::try_from(self.title.width()).unwrap_or(u16::MAX);
        let title_x = area.x + area.width.saturating_sub(title_width) / 2;
        Paragraph::new(Line::from(Span::styled(self.title, self.style.title))).render(
            Rect::new(title_x, area.y, title_width.min(area.width), 1),
            buf,
        );

        if let Some(account) = self.account {
            let text = format!(" {account} ");
            let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
            let free = area.right().saturating_sub(title_x + title_width);
            if width < free {
                let right_area = Rect::new(area.right() - width, area.y, width, 1);
                Paragraph::new(Span::styled(text, self.style.account)).render(right_area, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(bar: HeaderBar<'_>, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        bar.render(area, &mut buf);
        (0..width).map(|x| buf[(x, 0)].symbol()).collect()
    }

    #[test]
    fn test_title_centered() {
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        HeaderBar::new("Home").render(area, &mut buf);

        let title: String = (8..12).map(|x| buf[(x, 0)].symbol()).collect();
        assert_eq!(title, "Home");
        assert_eq!(buf[(1, 0)].symbol(), "☰");
    }

    #[test]
    fn test_account_dropped_when_narrow() {
        let wide = rendered(HeaderBar::new("Home").account(Some("135****2797")), 60);
        assert!(wide.contains("135****2797"));

        let narrow = rendered(HeaderBar::new("Home").account(Some("135****2797")), 20);
        assert!(!narrow.contains("135"));
    }

    #[test]
    fn test_menu_glyph() {
        assert!(rendered(HeaderBar::new("Home").menu_open(true), 20).contains('✕'));
    }
}
