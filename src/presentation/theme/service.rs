use super::adapter::ColorConverter;
use crate::infrastructure::config::{ThemeConfig, ThemeMode};
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

const DEFAULT_ACCENT: Color = Color::Rgb(0x41, 0x69, 0xE1);

/// Resolved colors for every screen.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub mode: ThemeMode,
    pub accent: Color,
    pub base_style: Style,
    pub surface_style: Style,
    pub dimmed_style: Style,
    pub selection_style: Style,
    pub header_style: Style,
    pub card_style: Style,
    pub card_border: Color,
    pub positive: Color,
    pub negative: Color,
    pub danger: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_color(DEFAULT_ACCENT, ThemeMode::Light)
    }
}

impl Theme {
    #[must_use]
    pub fn new(accent_color_str: &str, mode: ThemeMode) -> Self {
        Self::from_color(parse_color(accent_color_str), mode)
    }

    #[must_use]
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self::new(&config.accent_color, config.mode)
    }

    #[must_use]
    pub fn from_color(accent: Color, mode: ThemeMode) -> Self {
        let (background, surface, text) = match mode {
            ThemeMode::Light => (
                Color::Rgb(0xF5, 0xF5, 0xF5),
                Color::Rgb(0xFF, 0xFF, 0xFF),
                Color::Rgb(0x1C, 0x1C, 0x1E),
            ),
            ThemeMode::Dark => (
                Color::Rgb(0x12, 0x12, 0x12),
                Color::Rgb(0x24, 0x24, 0x26),
                Color::Rgb(0xE5, 0xE5, 0xEA),
            ),
        };

        let card_base = ColorConverter::rotate_hue(accent, 28.0);
        let (card_bg, card_border) = match mode {
            ThemeMode::Light => (
                ColorConverter::shade(card_base, 0.67, 0.72),
                ColorConverter::shade(card_base, 0.55, 0.65),
            ),
            ThemeMode::Dark => (
                ColorConverter::shade(card_base, 0.32, 0.45),
                ColorConverter::shade(card_base, 0.45, 0.5),
            ),
        };

        let selection_bg = match mode {
            ThemeMode::Light => ColorConverter::shade(accent, 0.9, 0.6),
            ThemeMode::Dark => ColorConverter::shade(accent, 0.2, 0.3),
        };

        Self {
            mode,
            accent,
            base_style: Style::default().fg(text).bg(background),
            surface_style: Style::default().fg(text).bg(surface),
            dimmed_style: Style::default().fg(Color::Gray),
            selection_style: Style::default().bg(selection_bg).fg(text),
            header_style: Style::default()
                .bg(accent)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            card_style: Style::default().bg(card_bg).fg(Color::White),
            card_border,
            positive: Color::Rgb(0x34, 0xC7, 0x59),
            negative: Color::Rgb(0xFF, 0x3B, 0x30),
            danger: Color::Red,
        }
    }

    /// Returns the same accent in the other mode.
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self::from_color(self.accent, self.mode.toggled())
    }
}

fn parse_color(s: &str) -> Color {
    if let Ok(c) = Color::from_str(s) {
        return c;
    }

    if let Some((r, g, b)) = parse_hex_color(s) {
        return Color::Rgb(r, g, b);
    }

    DEFAULT_ACCENT
}

fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let s = s.trim().trim_start_matches('#');
    if !s.is_ascii() {
        return None;
    }

    let channel = |hex: &str| u8::from_str_radix(hex, 16).ok();
    match s.len() {
        6 => Some((channel(&s[0..2])?, channel(&s[2..4])?, channel(&s[4..6])?)),
        3 => {
            let expand = |i: usize| channel(&s[i..=i]).map(|v| v * 17);
            Some((expand(0)?, expand(1)?, expand(2)?))
        }
        _ => None,
    }
}
