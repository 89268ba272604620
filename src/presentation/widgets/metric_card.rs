//! Revenue figure cards.

use crate::domain::entities::MetricCard;
use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// Rows a single card occupies, borders included.
pub const CARD_HEIGHT: u16 = 5;

/// One headline figure: title, amount, and the change against the prior period.
pub struct MetricCardView<'a> {
    card: &'a MetricCard,
    theme: &'a Theme,
}

impl<'a> MetricCardView<'a> {
    #[must_use]
    pub const fn new(card: &'a MetricCard, theme: &'a Theme) -> Self {
        Self { card, theme }
    }
}

impl Widget for MetricCardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let change_color = if self.card.is_negative() {
            self.theme.negative
        } else {
            self.theme.positive
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.card_border))
            .style(self.theme.card_style);

        let lines = vec![
            Line::from(self.card.title),
            Line::from(Span::styled(
                self.card.amount,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(self.card.percentage, Style::default().fg(change_color)),
                Span::raw("  "),
                Span::styled(self.card.change, Style::default().fg(change_color)),
            ]),
        ];

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

/// Two-column grid of cards.
pub struct MetricGrid<'a> {
    cards: &'a [MetricCard],
    theme: &'a Theme,
}

impl<'a> MetricGrid<'a> {
    #[must_use]
    pub const fn new(cards: &'a [MetricCard], theme: &'a Theme) -> Self {
        Self { cards, theme }
    }

    /// Height needed to show every card.
    #[must_use]
    pub fn required_height(&self) -> u16 {
        let rows = u16::try_from(self.cards.len().div_ceil(2)).unwrap_or(u16::MAX);
        rows.saturating_mul(CARD_HEIGHT)
    }
}

impl Widget for MetricGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut y = area.y;
        for pair in self.cards.chunks(2) {
            if y.saturating_add(CARD_HEIGHT) > area.bottom() {
                break;
            }
            let row = Rect::new(area.x, y, area.width, CARD_HEIGHT);
            let [left, right] =
                Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(row);

            MetricCardView::new(&pair[0], self.theme).render(left, buf);
            if let Some(card) = pair.get(1) {
                MetricCardView::new(card, self.theme).render(right, buf);
            }
            y += CARD_HEIGHT;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Dashboard;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.right())
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn test_required_height() {
        let dashboard = Dashboard::sample();
        let theme = Theme::default();
        let grid = MetricGrid::new(&dashboard.metrics, &theme);
        assert_eq!(grid.required_height(), 3 * CARD_HEIGHT);
    }

    #[test]
    fn test_grid_renders_pairs() {
        let dashboard = Dashboard::sample();
        let theme = Theme::default();
        let area = Rect::new(0, 0, 60, 3 * CARD_HEIGHT);
        let mut buf = Buffer::empty(area);

        MetricGrid::new(&dashboard.metrics, &theme).render(area, &mut buf);

        let first_row = row_text(&buf, 1);
        assert!(first_row.contains("Today's revenue"));
        assert!(first_row.contains("Yesterday's revenue"));
        assert!(row_text(&buf, 2 * CARD_HEIGHT + 2).contains("330.3K"));
    }

    #[test]
    fn test_grid_clips_to_area() {
        let dashboard = Dashboard::sample();
        let theme = Theme::default();
        let area = Rect::new(0, 0, 60, CARD_HEIGHT + 2);
        let mut buf = Buffer::empty(area);

        MetricGrid::new(&dashboard.metrics, &theme).render(area, &mut buf);

        assert!(!row_text(&buf, CARD_HEIGHT + 1).contains("Yesterday (domestic)"));
    }
}
