use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Tabs, Widget},
};

/// Pages of the home container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomeTab {
    #[default]
    Home,
    Data,
    Statistics,
}

impl HomeTab {
    pub const ALL: [Self; 3] = [Self::Home, Self::Data, Self::Statistics];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Data => "Data",
            Self::Statistics => "Statistics",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Home => "⌂",
            Self::Data => "▤",
            Self::Statistics => "▥",
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Home => 0,
            Self::Data => 1,
            Self::Statistics => 2,
        }
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Bottom tab strip.
pub struct TabBar<'a> {
    selected: HomeTab,
    theme: &'a Theme,
}

impl<'a> TabBar<'a> {
    #[must_use]
    pub const fn new(selected: HomeTab, theme: &'a Theme) -> Self {
        Self { selected, theme }
    }
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let titles = HomeTab::ALL
            .iter()
            .map(|tab| Line::from(format!(" {} {} ", tab.icon(), tab.title())));

        Tabs::new(titles)
            .select(self.selected.index())
            .style(self.theme.surface_style.patch(self.theme.dimmed_style))
            .highlight_style(
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .divider("│")
            .render(area, buf);
    }
}
