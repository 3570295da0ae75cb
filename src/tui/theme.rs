//! Theme system for consistent UI colors across dark and light modes.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Semantic color theme for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Borders, titles and the current key name
    pub primary: Color,
    /// Roman numerals and highlights
    pub accent: Color,
    /// Primary text content color
    pub text: Color,
    /// Labels and less important content
    pub text_secondary: Color,
    /// Help text and neighbor previews
    pub text_muted: Color,
    /// Main background color
    pub background: Color,
    /// Surface color for chord cells and panels
    pub surface: Color,
}

impl Theme {
    /// Detects the OS theme and returns the appropriate Theme.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            // Fall back to dark theme for dark mode, unspecified, or errors
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Resolves the configured mode; `Auto` asks the OS.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Creates a dark theme optimized for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            text: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,
            background: Color::Black,
            surface: Color::Rgb(30, 30, 30),
        }
    }

    /// Creates a light theme optimized for light terminal backgrounds.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0), // Dark orange for visibility
            text: Color::Black,
            text_secondary: Color::Rgb(60, 60, 60),
            text_muted: Color::Gray,
            background: Color::White,
            surface: Color::Rgb(245, 245, 245),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_dark() {
        let theme = Theme::dark();
        assert_eq!(theme.primary, Color::Cyan);
        assert_eq!(theme.background, Color::Black);
        assert_eq!(theme.text, Color::White);
    }

    #[test]
    fn test_theme_light() {
        let theme = Theme::light();
        assert_eq!(theme.text, Color::Black);
        assert_eq!(theme.background, Color::White);
        // Yellow is too bright for a light background
        assert_ne!(theme.accent, Color::Yellow);
    }

    #[test]
    fn test_from_explicit_mode() {
        assert_eq!(Theme::from_mode(ThemeMode::Dark), Theme::dark());
        assert_eq!(Theme::from_mode(ThemeMode::Light), Theme::light());
    }
}
