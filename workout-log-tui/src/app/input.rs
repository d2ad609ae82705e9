// workout-log-tui/src/app/input.rs
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::error;
use workout_log_lib::{FormField, Phase, RecordStore, SubmitOutcome};

use super::state::{ActiveModal, App, FormFocus, PaneFocus};

// User-facing alert texts for failed store operations. The detailed error
// goes to the log file.
const SAVE_FAILED_MSG: &str = "Failed to save workout. Server may be unavailable.";
const DELETE_FAILED_MSG: &str = "Failed to delete log. Server might be down.";

impl App {
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        // Handle based on active modal first
        if self.active_modal != ActiveModal::None {
            self.handle_modal_input(key);
            return Ok(());
        }

        // Unit toggle works everywhere, also while typing in a field
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('u') {
            self.session.toggle_unit();
            return Ok(());
        }

        match self.pane_focus {
            PaneFocus::Form => self.handle_form_input(key),
            PaneFocus::Entries => self.handle_entries_input(key),
        }
        Ok(())
    }

    fn handle_modal_input(&mut self, key: KeyEvent) {
        match self.active_modal {
            ActiveModal::Help => {
                if matches!(
                    key.code,
                    KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?')
                ) {
                    self.active_modal = ActiveModal::None;
                }
            }
            ActiveModal::Alert(_) => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                    self.active_modal = ActiveModal::None;
                }
            }
            ActiveModal::None => {}
        }
    }

    fn handle_form_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                // Abandon an in-progress entry or edit, otherwise leave the form
                if *self.session.phase() == Phase::Idle {
                    self.pane_focus = PaneFocus::Entries;
                } else {
                    self.session.cancel_edit();
                    self.form_focus = FormFocus::Date;
                }
            }
            KeyCode::Tab | KeyCode::Down => self.form_focus = self.form_focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.form_focus = self.form_focus.previous(),
            KeyCode::Enter => match self.form_focus {
                FormFocus::Confirm => self.submit_form(),
                FormFocus::Cancel => {
                    self.session.cancel_edit();
                    self.form_focus = FormFocus::Date;
                }
                _ => self.form_focus = self.form_focus.next(),
            },
            KeyCode::Backspace => {
                if let Some(field) = self.form_focus.field() {
                    self.session.pop_char(field);
                }
            }
            KeyCode::Char(c) => {
                if let Some(field) = self.form_focus.field() {
                    if field_accepts(field, c) {
                        self.session.push_char(field, c);
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_entries_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.active_modal = ActiveModal::Help,
            KeyCode::Tab => self.pane_focus = PaneFocus::Form,
            KeyCode::Char('k') | KeyCode::Up => self.entries_previous(),
            KeyCode::Char('j') | KeyCode::Down => self.entries_next(),
            KeyCode::Char('e') | KeyCode::Enter => self.start_edit_selected(),
            KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),
            KeyCode::Char('u') => self.session.toggle_unit(),
            KeyCode::Char('r') => self.refresh_entries(),
            _ => {}
        }
    }

    fn submit_form(&mut self) {
        let store: &dyn RecordStore = &self.service.store;
        match self.session.submit(store) {
            Ok(SubmitOutcome::Saved) => {
                self.form_focus = FormFocus::Date;
                self.clamp_entry_selection();
            }
            Ok(SubmitOutcome::Invalid) => {
                // Jump to the first failing field
                if let Some((&field, _)) = self.session.errors().iter().next() {
                    self.form_focus = FormFocus::from_field(field);
                }
            }
            Err(e) => {
                error!("Error submitting log: {e}");
                self.active_modal = ActiveModal::Alert(SAVE_FAILED_MSG.to_string());
            }
        }
    }

    fn start_edit_selected(&mut self) {
        if let Some(entry) = self.selected_entry().cloned() {
            self.session.start_edit(entry);
            self.pane_focus = PaneFocus::Form;
            self.form_focus = FormFocus::Date;
        }
    }

    fn delete_selected(&mut self) {
        let Some(id) = self.selected_entry().map(|e| e.id) else {
            return;
        };
        let store: &dyn RecordStore = &self.service.store;
        match self.session.delete(store, id) {
            Ok(()) => self.clamp_entry_selection(),
            Err(e) => {
                error!("Error deleting log {id}: {e}");
                self.active_modal = ActiveModal::Alert(DELETE_FAILED_MSG.to_string());
            }
        }
    }

    // --- Helper methods for table navigation ---

    fn entries_next(&mut self) {
        let len = self.session.entries().len();
        if len == 0 {
            return;
        }
        let i = match self.entries_state.selected() {
            Some(i) if i >= len - 1 => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.entries_state.select(Some(i));
    }

    fn entries_previous(&mut self) {
        let len = self.session.entries().len();
        if len == 0 {
            return;
        }
        let i = match self.entries_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.entries_state.select(Some(i));
    }
}

/// Per-field character filter, mirroring the input types of the form:
/// date keeps the YYYY-MM-DD alphabet, weight allows one decimal point's
/// worth of characters, reps/sets are digits only.
fn field_accepts(field: FormField, c: char) -> bool {
    match field {
        FormField::Date => c.is_ascii_digit() || c == '-',
        FormField::Weight => c.is_ascii_digit() || c == '.',
        FormField::Reps | FormField::Sets => c.is_ascii_digit(),
        FormField::Exercise | FormField::Notes => true,
    }
}
