// workout-log-tui/src/ui/modals.rs
use crate::{
    app::{ActiveModal, App},
    ui::{card::DisplayCard, layout::centered_rect},
};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render_modal(f: &mut Frame, app: &App) {
    match &app.active_modal {
        ActiveModal::Help => render_help_modal(f),
        ActiveModal::Alert(message) => render_alert_modal(f, message),
        ActiveModal::None => {} // Should not happen if called correctly
    }
}

fn render_help_modal(f: &mut Frame) {
    let block = Block::default()
        .title("Help (?)")
        .borders(Borders::ALL)
        .title_style(Style::new().bold())
        .border_style(Style::new().yellow());
    let area = centered_rect(60, 70, f.size());
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let inner = area.inner(&ratatui::layout::Margin {
        vertical: 1,
        horizontal: 1,
    });
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(4)])
        .split(inner);

    let help_text = vec![
        Line::from("--- Form ---").style(Style::new().bold().underlined()),
        Line::from(" Tab / ↓: Next Field"),
        Line::from(" Shift+Tab / ↑: Previous Field"),
        Line::from(" Enter: Next Field / Press Focused Button"),
        Line::from(" Esc: Cancel Edit (or Leave the Form)"),
        Line::from(" Ctrl+U: Toggle lbs/kg (converts the weight field)"),
        Line::from(""),
        Line::from("--- Logged Workouts ---").style(Style::new().bold().underlined()),
        Line::from(" k / ↑: Navigate Up"),
        Line::from(" j / ↓: Navigate Down"),
        Line::from(" Tab: Focus the Form"),
        Line::from(" e / Enter: Edit Selected Entry"),
        Line::from(" d / Delete: Delete Selected Entry"),
        Line::from(" u: Toggle lbs/kg"),
        Line::from(" r: Re-fetch Entries from the Server"),
        Line::from(" q: Quit"),
        Line::from(""),
        Line::from(Span::styled(
            " Press Esc, ?, or Enter to close ",
            Style::new().italic().yellow(),
        )),
    ];

    let paragraph = Paragraph::new(help_text).wrap(Wrap { trim: false });
    f.render_widget(paragraph, chunks[0]);

    let card = DisplayCard::new()
        .title("Record Store")
        .description("Entries persist via a REST /logs API (json-server compatible).")
        .link("https://github.com/typicode/json-server");
    f.render_widget(card, chunks[1]);
}

fn render_alert_modal(f: &mut Frame, message: &str) {
    let block = Block::default()
        .title("Error")
        .borders(Borders::ALL)
        .title_style(Style::new().bold())
        .border_style(Style::default().fg(Color::Red));
    let area = centered_rect(50, 20, f.size());
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let inner = area.inner(&ratatui::layout::Margin {
        vertical: 1,
        horizontal: 1,
    });
    let lines = vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            " Press Esc or Enter to dismiss ",
            Style::new().italic(),
        )),
    ];
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
