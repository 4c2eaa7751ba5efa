// Theme system for the TUI
//
// Two built-in palettes selected by name from config.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

impl ThemeKind {
    /// Resolve a config name; unknown names fall back to dark
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "light" => ThemeKind::Light,
            _ => ThemeKind::Dark,
        }
    }

    pub fn theme(self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
        }
    }
}

/// Colors for every UI element
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    /// Focused panel border, modal frame
    pub highlight: Color,
    pub selection: Color,
    pub selection_fg: Color,
    pub price: Color,
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub border_type: BorderType,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::Rgb(24, 26, 33),
            foreground: Color::Rgb(220, 223, 228),
            muted: Color::Rgb(110, 118, 129),
            border: Color::Rgb(62, 68, 81),
            highlight: Color::Rgb(97, 175, 239),
            selection: Color::Rgb(44, 50, 60),
            selection_fg: Color::Rgb(255, 255, 255),
            price: Color::Rgb(229, 192, 123),
            success: Color::Rgb(152, 195, 121),
            error: Color::Rgb(224, 108, 117),
            warning: Color::Rgb(209, 154, 102),
            border_type: BorderType::Rounded,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::Rgb(250, 250, 250),
            foreground: Color::Rgb(56, 58, 66),
            muted: Color::Rgb(160, 161, 167),
            border: Color::Rgb(200, 200, 205),
            highlight: Color::Rgb(64, 120, 242),
            selection: Color::Rgb(229, 229, 230),
            selection_fg: Color::Rgb(20, 20, 20),
            price: Color::Rgb(152, 104, 1),
            success: Color::Rgb(80, 161, 79),
            error: Color::Rgb(228, 86, 73),
            warning: Color::Rgb(193, 132, 1),
            border_type: BorderType::Plain,
        }
    }
}
