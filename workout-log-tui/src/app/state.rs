// workout-log-tui/src/app/state.rs
use ratatui::widgets::TableState;
use std::time::{Duration, Instant};
use workout_log_lib::{AppService, FormField, LogSession, WorkoutEntry};

const ERROR_DISPLAY_TIME: Duration = Duration::from_secs(5);

// Represents which pane has focus
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaneFocus {
    Form,
    Entries,
}

// Focus targets inside the form pane: the six input fields plus the buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormFocus {
    Date,
    Exercise,
    Weight,
    Reps,
    Sets,
    Notes,
    Confirm,
    Cancel,
}

impl FormFocus {
    /// The form field behind this focus target, None for the buttons.
    pub fn field(self) -> Option<FormField> {
        match self {
            FormFocus::Date => Some(FormField::Date),
            FormFocus::Exercise => Some(FormField::Exercise),
            FormFocus::Weight => Some(FormField::Weight),
            FormFocus::Reps => Some(FormField::Reps),
            FormFocus::Sets => Some(FormField::Sets),
            FormFocus::Notes => Some(FormField::Notes),
            FormFocus::Confirm | FormFocus::Cancel => None,
        }
    }

    pub fn from_field(field: FormField) -> Self {
        match field {
            FormField::Date => FormFocus::Date,
            FormField::Exercise => FormFocus::Exercise,
            FormField::Weight => FormFocus::Weight,
            FormField::Reps => FormFocus::Reps,
            FormField::Sets => FormFocus::Sets,
            FormField::Notes => FormFocus::Notes,
        }
    }

    pub fn next(self) -> Self {
        match self {
            FormFocus::Date => FormFocus::Exercise,
            FormFocus::Exercise => FormFocus::Weight,
            FormFocus::Weight => FormFocus::Reps,
            FormFocus::Reps => FormFocus::Sets,
            FormFocus::Sets => FormFocus::Notes,
            FormFocus::Notes => FormFocus::Confirm,
            FormFocus::Confirm => FormFocus::Cancel,
            FormFocus::Cancel => FormFocus::Date, // Wrap around
        }
    }

    pub fn previous(self) -> Self {
        match self {
            FormFocus::Date => FormFocus::Cancel, // Wrap around
            FormFocus::Exercise => FormFocus::Date,
            FormFocus::Weight => FormFocus::Exercise,
            FormFocus::Reps => FormFocus::Weight,
            FormFocus::Sets => FormFocus::Reps,
            FormFocus::Notes => FormFocus::Sets,
            FormFocus::Confirm => FormFocus::Notes,
            FormFocus::Cancel => FormFocus::Confirm,
        }
    }
}

// Represents the state of active modals
#[derive(Clone, Debug, PartialEq)]
pub enum ActiveModal {
    None,
    Help,
    /// Blocking notification for a failed network operation.
    Alert(String),
}

// Holds the application state
pub struct App {
    pub service: AppService,
    pub session: LogSession,
    pub should_quit: bool,
    pub active_modal: ActiveModal,
    pub pane_focus: PaneFocus,
    pub form_focus: FormFocus,
    pub entries_state: TableState,
    pub last_error: Option<String>, // For status bar errors
    error_clear_time: Option<Instant>,
}

impl App {
    pub fn new(service: AppService) -> Self {
        let session = LogSession::new(service.config.units);
        let mut app = App {
            session,
            should_quit: false,
            active_modal: ActiveModal::None,
            pane_focus: PaneFocus::Form,
            form_focus: FormFocus::Date,
            entries_state: TableState::default(),
            last_error: None,
            error_clear_time: None,
            service,
        };
        app.entries_state.select(Some(0));
        app.refresh_entries(); // Initial fetch from the record store
        app
    }

    // Method to set status bar errors
    pub fn set_error(&mut self, msg: String) {
        self.last_error = Some(msg);
        self.error_clear_time = Some(Instant::now() + ERROR_DISPLAY_TIME);
    }

    // Method to clear expired error messages (called each loop pass)
    pub fn clear_expired_error(&mut self) {
        if let Some(clear_time) = self.error_clear_time {
            if Instant::now() >= clear_time {
                self.last_error = None;
                self.error_clear_time = None;
            }
        }
    }

    pub fn selected_entry(&self) -> Option<&WorkoutEntry> {
        self.entries_state
            .selected()
            .and_then(|i| self.session.entries().get(i))
    }
}
