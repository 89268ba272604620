use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::{Alert, AlertKind};
use crate::presentation::theme::Theme;

const MAX_WIDTH: u16 = 48;
const MIN_WIDTH: u16 = 24;

/// Centered modal with a title, a message and a single OK button.
pub struct AlertPopup<'a> {
    title: &'a str,
    message: &'a str,
    color: Color,
    theme: &'a Theme,
}

impl<'a> AlertPopup<'a> {
    #[must_use]
    pub const fn new(title: &'a str, message: &'a str, theme: &'a Theme) -> Self {
        Self {
            title,
            message,
            color: theme.accent,
            theme,
        }
    }

    /// Popup for a controller alert, titled "Notice".
    #[must_use]
    pub fn for_alert(alert: &'a Alert, theme: &'a Theme) -> Self {
        let color = match alert.kind {
            AlertKind::Info => theme.accent,
            AlertKind::Success => theme.positive,
            AlertKind::Error => theme.danger,
        };
        Self::new("Notice", &alert.message, theme).color(color)
    }

    #[must_use]
    pub const fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    fn popup_area(&self, area: Rect) -> Rect {
        let max_width = MAX_WIDTH.min(area.width.saturating_sub(2));
        let text_width = u16::try_from(self.message.width().max(self.title.width()))
            .unwrap_or(u16::MAX)
            .saturating_add(4);
        let width = text_width.clamp(MIN_WIDTH.min(max_width), max_width);

        let inner_width = width.saturating_sub(2).max(1);
        let message_width = u16::try_from(self.message.width()).unwrap_or(u16::MAX);
        let lines = message_width.div_ceil(inner_width).max(1);

        // message, blank, button, borders
        let height = lines.saturating_add(4).min(area.height);

        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + area.height.saturating_sub(height) / 2;
        Rect::new(x, y, width, height)
    }
}

impl Widget for AlertPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = self.popup_area(area);
        if popup_area.area() == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.color))
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().fg(self.color).add_modifier(Modifier::BOLD),
            ))
            .title_alignment(Alignment::Center)
            .style(self.theme.surface_style);

        let lines = vec![
            Line::from(self.message),
            Line::from(""),
            Line::from(Span::styled(
                " OK ",
                Style::default()
                    .bg(self.color)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
        ];

        Clear.render(popup_area, buf);
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(popup_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        (area.y..area.bottom())
            .flat_map(|y| (area.x..area.right()).map(move |x| (x, y)))
            .map(|pos| buf[pos].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_popup_is_centered() {
        let theme = Theme::default();
        let popup = AlertPopup::new("Notice", "Verification code sent", &theme);
        let area = popup.popup_area(Rect::new(0, 0, 80, 24));

        assert_eq!(area.width, 26);
        assert_eq!(area.height, 5);
        assert_eq!(area.x, 27);
        assert_eq!(area.y, 9);
    }

    #[test]
    fn test_renders_message_and_button() {
        let theme = Theme::default();
        let alert = Alert::error("Network error, please try again later");
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);

        AlertPopup::for_alert(&alert, &theme).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Notice"));
        assert!(text.contains("Network error"));
        assert!(text.contains(" OK "));
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 3, 2);
        let mut buf = Buffer::empty(area);
        AlertPopup::new("Notice", "Login successful", &theme).render(area, &mut buf);
    }
}
