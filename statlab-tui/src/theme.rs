//! Parrot/neon theme tokens for the StatLab viewer.
//!
//! Neon accents on a dark background. Series colours cycle through
//! [`Theme::series`] so the first curve of every chart is cyan, the second
//! green, and so on.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Near-black background
    pub background: Color,
    /// Electric cyan (focus, first series)
    pub accent: Color,
    /// Neon green
    pub positive: Color,
    /// Hot pink (errors, reference lines)
    pub negative: Color,
    /// Neon orange (warnings, annotations)
    pub warning: Color,
    /// Cool purple
    pub neutral: Color,
    /// Steel blue (secondary text)
    pub muted: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::parrot_neon()
    }
}

impl Theme {
    pub fn parrot_neon() -> Self {
        Self {
            background: Color::Rgb(18, 18, 20),
            accent: Color::Rgb(0, 255, 255),
            positive: Color::Rgb(0, 255, 128),
            negative: Color::Rgb(255, 20, 147),
            warning: Color::Rgb(255, 140, 0),
            neutral: Color::Rgb(147, 112, 219),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),
        }
    }

    /// Colour for the i-th data series of a chart.
    pub fn series(&self, index: usize) -> Color {
        let cycle = [
            self.accent,
            self.positive,
            self.neutral,
            self.warning,
            self.muted,
            self.text_primary,
        ];
        cycle[index % cycle.len()]
    }

    /// Colour for the i-th reference line of a chart.
    pub fn marker(&self, index: usize) -> Color {
        if index % 2 == 0 {
            self.negative
        } else {
            self.text_secondary
        }
    }
}

pub fn background() -> Style {
    Style::default().bg(Theme::default().background)
}

pub fn accent() -> Style {
    Style::default().fg(Theme::default().accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(Theme::default().muted)
}

pub fn neutral() -> Style {
    Style::default().fg(Theme::default().neutral)
}

pub fn warning() -> Style {
    Style::default().fg(Theme::default().warning)
}

pub fn negative() -> Style {
    Style::default().fg(Theme::default().negative)
}

pub fn text() -> Style {
    Style::default().fg(Theme::default().text_primary)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_creation() {
        let theme = Theme::default();
        assert_eq!(theme.background, Color::Rgb(18, 18, 20));
        assert_eq!(theme.accent, Color::Rgb(0, 255, 255));
    }

    #[test]
    fn series_colours_cycle() {
        let theme = Theme::default();
        assert_eq!(theme.series(0), theme.accent);
        assert_eq!(theme.series(1), theme.positive);
        assert_eq!(theme.series(6), theme.series(0));
        assert_ne!(theme.marker(0), theme.marker(1));
    }
}
