use crate::domain::entities::DetailEntry;
use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget, Widget},
};

/// Drill-down rows under the metric grid.
pub struct DetailList<'a> {
    entries: &'a [DetailEntry],
    selected: Option<usize>,
    theme: &'a Theme,
}

impl<'a> DetailList<'a> {
    #[must_use]
    pub const fn new(entries: &'a [DetailEntry], theme: &'a Theme) -> Self {
        Self {
            entries,
            selected: None,
            theme,
        }
    }

    #[must_use]
    pub const fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    fn item(&self, entry: &'a DetailEntry) -> ListItem<'a> {
        ListItem::new(vec![
            Line::from(vec![
                Span::styled(
                    format!(" {} ", entry.icon),
                    Style::default().fg(self.theme.accent),
                ),
                Span::styled(entry.title, Style::default().add_modifier(Modifier::BOLD)),
                Span::styled("  ›", self.theme.dimmed_style),
            ]),
            Line::from(Span::styled(
                format!("    {}", entry.subtitle),
                self.theme.dimmed_style,
            )),
        ])
    }
}

impl Widget for DetailList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem<'_>> = self.entries.iter().map(|e| self.item(e)).collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(self.theme.dimmed_style),
            )
            .style(self.theme.surface_style)
            .highlight_style(self.theme.selection_style);

        let mut state = ListState::default().with_selected(self.selected);
        StatefulWidget::render(list, area, buf, &mut state);
    }
}
