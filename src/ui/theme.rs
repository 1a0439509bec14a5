use ratatui::style::{Color, Modifier, Style};

/// Charcoal-and-indigo dashboard theme.
///
/// Base aesthetic:
/// - light grey text on charcoal
/// - indigo accent for charts and focus
/// - amber/red reserved for warnings and errors
pub struct Theme;

impl Theme {
    // Core palette
    pub const BG: Color = Color::Rgb(24, 24, 27);
    pub const FG: Color = Color::Rgb(245, 245, 245);
    pub const FG_DIM: Color = Color::Rgb(170, 170, 170);
    pub const FG_MUTED: Color = Color::Rgb(102, 102, 102);

    // Accents
    pub const ACCENT: Color = Color::Rgb(99, 110, 250);
    pub const ACCENT_GREEN: Color = Color::Rgb(0, 204, 150);
    pub const ACCENT_AMBER: Color = Color::Rgb(255, 161, 90);
    pub const ACCENT_RED: Color = Color::Rgb(239, 85, 59);

    /// Default full-screen style.
    pub fn base() -> Style {
        Style::default().fg(Self::FG).bg(Self::BG)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::FG_MUTED)
    }

    /// Border of the panel holding focus.
    pub fn border_focus() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    pub fn title() -> Style {
        Style::default().fg(Self::FG).add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::FG)
    }

    pub fn dim() -> Style {
        Style::default().fg(Self::FG_DIM)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::FG_MUTED)
    }

    /// Focused form row.
    pub fn focused() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Headline numbers (predicted price).
    pub fn metric() -> Style {
        Style::default()
            .fg(Self::ACCENT_GREEN)
            .add_modifier(Modifier::BOLD)
    }

    pub fn chart() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    pub fn warn() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Self::ACCENT_RED)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for an event-panel level tag.
    pub fn level(level: &str) -> Style {
        match level {
            "WARN" => Self::warn(),
            "ERROR" => Self::error(),
            _ => Self::dim(),
        }
    }
}
