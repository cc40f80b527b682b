// Theme system for the TUI
//
// Provides customizable color themes that can be switched at runtime.
// Each theme defines colors for all UI elements.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
    Dracula,
    Nord,
}

impl ThemeKind {
    /// Get all available themes
    pub fn all() -> &'static [ThemeKind] {
        &[
            ThemeKind::Dark,
            ThemeKind::Light,
            ThemeKind::Dracula,
            ThemeKind::Nord,
        ]
    }

    /// Resolve a config theme name; unknown names fall back to Dark.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "light" => ThemeKind::Light,
            "dracula" => ThemeKind::Dracula,
            "nord" => ThemeKind::Nord,
            _ => ThemeKind::Dark,
        }
    }

    /// Get the next theme in the cycle
    pub fn next(self) -> Self {
        let themes = Self::all();
        let current = themes.iter().position(|&t| t == self).unwrap_or(0);
        themes[(current + 1) % themes.len()]
    }

    /// Get the previous theme in the cycle
    pub fn prev(self) -> Self {
        let themes = Self::all();
        let current = themes.iter().position(|&t| t == self).unwrap_or(0);
        themes[(current + themes.len() - 1) % themes.len()]
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "Dark",
            ThemeKind::Light => "Light",
            ThemeKind::Dracula => "Dracula",
            ThemeKind::Nord => "Nord",
        }
    }

    /// Get the theme configuration
    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
            ThemeKind::Dracula => Theme::dracula(),
            ThemeKind::Nord => Theme::nord(),
        }
    }
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub border: Color,

    // Nav bar
    pub deck_title: Color,
    pub nav_active: Color,
    pub nav_inactive: Color,

    // Dot indicators
    pub dot_active: Color,
    pub dot_inactive: Color,

    // Section content
    pub section_title: Color,
    pub tagline: Color,
    pub body: Color,

    // Starfield
    pub star_dim: Color,
    pub star_bright: Color,

    // Chrome
    pub status_bar: Color,
    pub highlight: Color,

    // Log levels
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
    pub log_trace: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg: Color::Reset,
            fg: Color::White,
            border: Color::Gray,

            deck_title: Color::Cyan,
            nav_active: Color::Yellow,
            nav_inactive: Color::Gray,

            dot_active: Color::Cyan,
            dot_inactive: Color::DarkGray,

            section_title: Color::Cyan,
            tagline: Color::Magenta,
            body: Color::White,

            star_dim: Color::DarkGray,
            star_bright: Color::White,

            status_bar: Color::Green,
            highlight: Color::Cyan,

            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Blue,
            log_debug: Color::Gray,
            log_trace: Color::DarkGray,
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            border: Color::DarkGray,

            deck_title: Color::Blue,
            nav_active: Color::Rgb(184, 134, 11), // Dark goldenrod
            nav_inactive: Color::DarkGray,

            dot_active: Color::Blue,
            dot_inactive: Color::Gray,

            section_title: Color::Blue,
            tagline: Color::Magenta,
            body: Color::Black,

            star_dim: Color::Gray,
            star_bright: Color::DarkGray,

            status_bar: Color::DarkGray,
            highlight: Color::Blue,

            log_error: Color::Red,
            log_warn: Color::Rgb(184, 134, 11),
            log_info: Color::Blue,
            log_debug: Color::DarkGray,
            log_trace: Color::Gray,
        }
    }

    /// Dracula theme
    pub fn dracula() -> Self {
        Self {
            bg: Color::Rgb(40, 42, 54),
            fg: Color::Rgb(248, 248, 242),
            border: Color::Rgb(68, 71, 90),

            deck_title: Color::Rgb(139, 233, 253),  // Cyan
            nav_active: Color::Rgb(241, 250, 140),  // Yellow
            nav_inactive: Color::Rgb(98, 114, 164), // Comment

            dot_active: Color::Rgb(189, 147, 249), // Purple
            dot_inactive: Color::Rgb(68, 71, 90),

            section_title: Color::Rgb(139, 233, 253),
            tagline: Color::Rgb(255, 121, 198), // Pink
            body: Color::Rgb(248, 248, 242),

            star_dim: Color::Rgb(98, 114, 164),
            star_bright: Color::Rgb(241, 250, 140),

            status_bar: Color::Rgb(80, 250, 123), // Green
            highlight: Color::Rgb(189, 147, 249),

            log_error: Color::Rgb(255, 85, 85),
            log_warn: Color::Rgb(241, 250, 140),
            log_info: Color::Rgb(139, 233, 253),
            log_debug: Color::Rgb(98, 114, 164),
            log_trace: Color::Rgb(68, 71, 90),
        }
    }

    /// Nord theme
    pub fn nord() -> Self {
        Self {
            bg: Color::Rgb(46, 52, 64),
            fg: Color::Rgb(236, 239, 244),
            border: Color::Rgb(76, 86, 106),

            deck_title: Color::Rgb(136, 192, 208), // Frost
            nav_active: Color::Rgb(235, 203, 139), // Yellow
            nav_inactive: Color::Rgb(76, 86, 106),

            dot_active: Color::Rgb(136, 192, 208),
            dot_inactive: Color::Rgb(59, 66, 82),

            section_title: Color::Rgb(136, 192, 208),
            tagline: Color::Rgb(180, 142, 173), // Purple
            body: Color::Rgb(236, 239, 244),

            star_dim: Color::Rgb(76, 86, 106),
            star_bright: Color::Rgb(229, 233, 240),

            status_bar: Color::Rgb(163, 190, 140), // Green
            highlight: Color::Rgb(136, 192, 208),

            log_error: Color::Rgb(191, 97, 106),
            log_warn: Color::Rgb(235, 203, 139),
            log_info: Color::Rgb(129, 161, 193),
            log_debug: Color::Rgb(76, 86, 106),
            log_trace: Color::Rgb(59, 66, 82),
        }
    }

    // Helper methods for creating styles

    /// Base style with theme foreground
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.fg)
    }

    /// Border style
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Deck title style
    pub fn deck_title_style(&self) -> Style {
        Style::default()
            .fg(self.deck_title)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the one active nav link
    pub fn nav_active_style(&self) -> Style {
        Style::default()
            .fg(self.nav_active)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Style for inactive nav links
    pub fn nav_inactive_style(&self) -> Style {
        Style::default().fg(self.nav_inactive)
    }

    /// Status bar style
    pub fn status_style(&self) -> Style {
        Style::default().fg(self.status_bar)
    }

    /// Style for a log level line
    pub fn log_style(&self, level: crate::logging::LogLevel) -> Style {
        use crate::logging::LogLevel;
        let color = match level {
            LogLevel::Error => self.log_error,
            LogLevel::Warn => self.log_warn,
            LogLevel::Info => self.log_info,
            LogLevel::Debug => self.log_debug,
            LogLevel::Trace => self.log_trace,
        };
        Style::default().fg(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_cycle_covers_all() {
        let mut kind = ThemeKind::Dark;
        for _ in 0..ThemeKind::all().len() {
            kind = kind.next();
        }
        assert_eq!(kind, ThemeKind::Dark);
        assert_eq!(ThemeKind::Dark.prev(), ThemeKind::Nord);
    }

    #[test]
    fn test_from_name_falls_back_to_dark() {
        assert_eq!(ThemeKind::from_name("nord"), ThemeKind::Nord);
        assert_eq!(ThemeKind::from_name("NORD"), ThemeKind::Nord);
        assert_eq!(ThemeKind::from_name("no-such-theme"), ThemeKind::Dark);
    }
}
