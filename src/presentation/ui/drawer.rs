//! Side drawer with account info and settings.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::infrastructure::config::ThemeMode;
use crate::presentation::theme::Theme;

/// Selectable drawer rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawerItem {
    #[default]
    DarkTheme,
    SignOut,
}

impl DrawerItem {
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::DarkTheme => Self::SignOut,
            Self::SignOut => Self::DarkTheme,
        }
    }

    #[must_use]
    pub const fn previous(self) -> Self {
        self.next()
    }
}

pub struct Drawer<'a> {
    phone_number: &'a str,
    selected: DrawerItem,
    theme: &'a Theme,
}

impl<'a> Drawer<'a> {
    #[must_use]
    pub const fn new(phone_number: &'a str, selected: DrawerItem, theme: &'a Theme) -> Self {
        Self {
            phone_number,
            selected,
            theme,
        }
    }

    /// Left three quarters of `area`.
    #[must_use]
    pub fn area(area: Rect) -> Rect {
        let [drawer, _] =
            Layout::horizontal([Constraint::Percentage(75), Constraint::Fill(1)]).areas(area);
        drawer
    }

    fn row_style(&self, item: DrawerItem) -> Style {
        if self.selected == item {
            self.theme.selection_style
        } else {
            self.theme.surface_style
        }
    }
}

impl Widget for Drawer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = Self::area(area);
        Clear.render(area, buf);
        buf.set_style(area, self.theme.surface_style);

        let [profile, menu] =
            Layout::vertical([Constraint::Length(6), Constraint::Fill(1)]).areas(area);

        let header = Style::default().bg(self.theme.accent);
        Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("  ◉", self.theme.header_style)),
            Line::from(Span::styled("  Administrator", self.theme.header_style)),
            Line::from(Span::styled(
                format!("  {}", self.phone_number),
                header.fg(Color::White),
            )),
        ])
        .style(header)
        .render(profile, buf);

        let dark = self.theme.mode == ThemeMode::Dark;
        let (moon, toggle) = if dark { ("●", "[ on]") } else { ("○", "[off]") };

        let rows = [
            Line::from(vec![
                Span::raw("  ⓘ  "),
                Span::raw(format!("Version V{}", crate::VERSION)),
            ])
            .style(self.theme.surface_style),
            Line::from(vec![
                Span::raw(format!("  {moon}  ")),
                Span::raw("Dark theme  "),
                Span::styled(toggle, Style::default().fg(self.theme.accent)),
            ])
            .style(self.row_style(DrawerItem::DarkTheme)),
            Line::from(vec![
                Span::raw("  ⇥  "),
                Span::styled(
                    "Sign out",
                    Style::default()
                        .fg(self.theme.danger)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
            .style(self.row_style(DrawerItem::SignOut)),
        ];

        let divider = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(self.theme.dimmed_style);
        let mut y = menu.y;
        for row in rows {
            if y.saturating_add(2) > menu.bottom() {
                break;
            }
            let row_area = Rect::new(menu.x, y, menu.width, 2);
            Paragraph::new(row).block(divider.clone()).render(row_area, buf);
            y += 2;
        }
    }
}
