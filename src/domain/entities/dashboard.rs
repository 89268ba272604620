//! Revenue dashboard entities.

/// Direction of a metric's change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    /// Value went up.
    Up,
    /// Value went down.
    Down,
}

/// One headline revenue figure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricCard {
    /// Card caption.
    pub title: &'static str,
    /// Formatted amount.
    pub amount: &'static str,
    /// Formatted relative change.
    pub percentage: &'static str,
    /// Formatted absolute change.
    pub change: &'static str,
    /// Change direction.
    pub trend: Trend,
}

impl MetricCard {
    const fn new(
        title: &'static str,
        amount: &'static str,
        percentage: &'static str,
        change: &'static str,
        trend: Trend,
    ) -> Self {
        Self {
            title,
            amount,
            percentage,
            change,
            trend,
        }
    }

    /// Returns whether the change is a loss.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        matches!(self.trend, Trend::Down)
    }
}

/// Kind of drill-down report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailKind {
    /// Per-account totals.
    Accounts,
    /// Per-app monetization.
    Apps,
    /// Per-ad-unit performance.
    AdUnits,
}

/// Row in the details list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailEntry {
    /// Report kind.
    pub kind: DetailKind,
    /// Glyph shown in front of the title.
    pub icon: &'static str,
    /// Row title.
    pub title: &'static str,
    /// Row subtitle.
    pub subtitle: &'static str,
}

/// Dashboard contents shown on the home tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    /// Headline figures, laid out two per row.
    pub metrics: Vec<MetricCard>,
    /// Drill-down rows.
    pub details: Vec<DetailEntry>,
}

impl Dashboard {
    /// Returns the built-in sample figures.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            metrics: vec![
                MetricCard::new("Today's revenue", "8911.07", "-12.52%", "-1274.86", Trend::Down),
                MetricCard::new("Yesterday's revenue", "10185.93", "-2.05%", "-212.73", Trend::Down),
                MetricCard::new("Yesterday (domestic)", "995.35", "-0.64%", "-6.37", Trend::Down),
                MetricCard::new("Yesterday (overseas)", "9190.58", "-2.2%", "-206.36", Trend::Down),
                MetricCard::new("This month", "162.3K", "-50.87%", "-168.0K", Trend::Down),
                MetricCard::new("Last month total", "330.3K", "+6.72%", "+20.8K", Trend::Up),
            ],
            details: vec![
                DetailEntry {
                    kind: DetailKind::Accounts,
                    icon: "🏛",
                    title: "Accounts",
                    subtitle: "Total revenue across every account",
                },
                DetailEntry {
                    kind: DetailKind::Apps,
                    icon: "▦",
                    title: "Apps",
                    subtitle: "How well each app monetizes",
                },
                DetailEntry {
                    kind: DetailKind::AdUnits,
                    icon: "</>",
                    title: "Ad units",
                    subtitle: "Know your data, tune your placements",
                },
            ],
        }
    }
}
