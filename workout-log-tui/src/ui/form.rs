// workout-log-tui/src/ui/form.rs
use crate::app::{App, FormFocus, PaneFocus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const FIELD_ROWS: usize = 3; // label, input, error line

pub fn render_form_pane(f: &mut Frame, app: &App, area: Rect) {
    let editing = app.session.editing_entry().is_some();
    let title = if editing { "Edit Workout" } else { "Log Workout" };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(if app.pane_focus == PaneFocus::Form {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        });
    let inner = block.inner(area);
    f.render_widget(block, area);

    let today = chrono::Local::now().date_naive();
    let fields: [(FormFocus, String); 6] = [
        (FormFocus::Date, format!("Date (YYYY-MM-DD, max {today}):")),
        (
            FormFocus::Exercise,
            "Exercise (e.g., Bench Press):".to_string(),
        ),
        (
            FormFocus::Weight,
            format!("Weight ({}):", app.session.unit().label()),
        ),
        (FormFocus::Reps, "Reps:".to_string()),
        (FormFocus::Sets, "Sets:".to_string()),
        (FormFocus::Notes, "Notes:".to_string()),
    ];

    // One chunk per field row, one spacer, one button row
    let constraints = vec![Constraint::Length(1); fields.len() * FIELD_ROWS + 2];
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, (focus, label)) in fields.iter().enumerate() {
        let Some(field) = focus.field() else { continue };
        let base = i * FIELD_ROWS;

        f.render_widget(Paragraph::new(label.as_str()), chunks[base]);

        let value = app.session.form().field(field);
        let input_style = if app.pane_focus == PaneFocus::Form && app.form_focus == *focus {
            Style::default().reversed()
        } else {
            Style::default()
        };
        f.render_widget(Paragraph::new(value).style(input_style), chunks[base + 1]);

        if let Some(err) = app.session.errors().get(&field) {
            f.render_widget(
                Paragraph::new(err.as_str()).style(Style::default().fg(Color::Red)),
                chunks[base + 2],
            );
        }
    }

    render_buttons(f, app, editing, chunks[fields.len() * FIELD_ROWS + 1]);

    // Place the cursor in the focused input field
    if app.pane_focus == PaneFocus::Form {
        if let Some(field) = app.form_focus.field() {
            let idx = fields
                .iter()
                .position(|(focus, _)| focus.field() == Some(field));
            if let Some(i) = idx {
                let input = &chunks[i * FIELD_ROWS + 1];
                let len = app.session.form().field(field).chars().count() as u16;
                f.set_cursor(input.x + len, input.y);
            }
        }
    }
}

fn render_buttons(f: &mut Frame, app: &App, editing: bool, area: Rect) {
    let button_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let confirm_label = if editing {
        " Update Workout "
    } else {
        " Log Workout "
    };
    let focused = |target: FormFocus| {
        if app.pane_focus == PaneFocus::Form && app.form_focus == target {
            Style::default().reversed()
        } else {
            Style::default()
        }
    };

    let confirm_button = Paragraph::new(confirm_label)
        .alignment(Alignment::Center)
        .style(focused(FormFocus::Confirm));
    f.render_widget(confirm_button, button_layout[0]);

    let cancel_button = Paragraph::new(" Cancel ")
        .alignment(Alignment::Center)
        .style(focused(FormFocus::Cancel));
    f.render_widget(cancel_button, button_layout[1]);
}
