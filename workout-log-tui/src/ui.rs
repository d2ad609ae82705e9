// workout-log-tui/src/ui.rs

// Declare the modules within the ui directory
pub mod card;
pub mod entries;
pub mod form;
pub mod layout;
pub mod modals;
pub mod status_bar;

pub use layout::render_ui;

use ratatui::style::{Color, Modifier, Style};
use workout_log_lib::{parse_color, StandardColor};

use crate::app::App;

/// Maps our config color names onto ratatui colors.
fn theme_color(color: StandardColor) -> Color {
    match color {
        StandardColor::Black => Color::Black,
        StandardColor::Red => Color::Red,
        StandardColor::Green => Color::Green,
        StandardColor::Yellow => Color::Yellow,
        StandardColor::Blue => Color::Blue,
        StandardColor::Magenta => Color::Magenta,
        StandardColor::Cyan => Color::Cyan,
        StandardColor::White => Color::White,
        StandardColor::DarkGrey => Color::DarkGray,
        StandardColor::Grey => Color::Gray,
    }
}

/// Header style from the configured theme; unknown names fall back to green.
pub fn header_style(app: &App) -> Style {
    let color = parse_color(&app.service.config.theme.header_color)
        .map(theme_color)
        .unwrap_or(Color::Green);
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}
