//! Hardwood theme tokens for the CourtLab TUI.
//!
//! Dark court aesthetic: near-black surface, basketball-orange accent,
//! green/crimson for good/bad values, steel gray for secondary text.

use ratatui::style::{Color, Modifier, Style};

/// Near-black background.
pub const BACKGROUND: Color = Color::Rgb(16, 16, 18);
/// Basketball orange — focus, highlights, the selected team.
pub const ACCENT: Color = Color::Rgb(255, 145, 60);
/// Green — strong values.
pub const POSITIVE: Color = Color::Rgb(80, 220, 120);
/// Crimson — weak values, errors.
pub const NEGATIVE: Color = Color::Rgb(235, 70, 90);
/// Amber — warnings.
pub const WARNING: Color = Color::Rgb(240, 180, 40);
/// Slate blue — neutral info.
pub const NEUTRAL: Color = Color::Rgb(130, 150, 220);
/// Steel gray — muted, hints, disabled.
pub const MUTED: Color = Color::Rgb(120, 128, 140);
/// Primary text.
pub const TEXT_PRIMARY: Color = Color::White;
/// Secondary text.
pub const TEXT_SECONDARY: Color = Color::Rgb(170, 170, 170);

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn text() -> Style {
    Style::default().fg(TEXT_PRIMARY)
}

pub fn secondary() -> Style {
    Style::default().fg(TEXT_SECONDARY)
}

/// Border style for the active/inactive panel frame.
pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

/// Title style for the panel frame.
pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

/// Color for a win-percentage value (gradient from warning to positive).
pub fn win_pct_color(pct: f64) -> Color {
    match pct {
        p if p >= 0.75 => POSITIVE,
        p if p >= 0.60 => ACCENT,
        p if p >= 0.45 => NEUTRAL,
        _ => WARNING,
    }
}
