// workout-log-tui/src/ui/entries.rs
use crate::app::{App, PaneFocus};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};
use workout_log_lib::{display_weight, weight_to_input};

pub fn render_entries_pane(f: &mut Frame, app: &mut App, area: Rect) {
    let count = app.session.entries().len();
    let title = format!("Logged Workouts ({} {})", count, pluralize(count, "entry", "entries"));

    let table_block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(if app.pane_focus == PaneFocus::Entries {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        });

    let unit = app.session.unit();
    let weight_header = format!("Weight ({})", unit.label());

    let header_cells = [
        Cell::from("Date"),
        Cell::from("Exercise"),
        Cell::from(weight_header.as_str()),
        Cell::from("Reps"),
        Cell::from("Sets"),
        Cell::from("Notes"),
    ]
    .map(|c| c.style(Style::default().fg(Color::LightBlue)));
    let header = Row::new(header_cells.to_vec()).height(1).bottom_margin(1);

    let rows: Vec<Row> = app
        .session
        .entries()
        .iter()
        .map(|entry| {
            Row::new(vec![
                Cell::from(entry.date.format("%Y-%m-%d").to_string()),
                Cell::from(entry.exercise.clone()),
                Cell::from(weight_to_input(display_weight(entry.weight, unit))),
                Cell::from(entry.reps.to_string()),
                Cell::from(entry.sets.to_string()),
                Cell::from(entry.notes.clone().unwrap_or_else(|| "-".to_string())),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(11),
        Constraint::Length(18),
        Constraint::Length(12),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Min(10), // Notes column expands
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(table_block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, &mut app.entries_state);
}

fn pluralize<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 {
        singular
    } else {
        plural
    }
}
