// workout-log-tui/src/app/data.rs
use super::state::App;
use workout_log_lib::RecordStore;

// Make refresh logic methods on App
impl App {
    /// Replaces the cached collection with a fresh fetch. Called on startup
    /// and on demand; submits refetch through the session itself. Not called
    /// per loop pass: every refresh is a network round trip.
    pub fn refresh_entries(&mut self) {
        let store: &dyn RecordStore = &self.service.store;
        match self.session.refresh(store) {
            Ok(()) => self.clamp_entry_selection(),
            Err(e) => {
                tracing::error!("Error fetching logs: {e}");
                self.set_error(format!("Error fetching logs: {e}"));
            }
        }
    }

    /// Keeps the table selection inside the collection after it shrinks.
    pub fn clamp_entry_selection(&mut self) {
        let len = self.session.entries().len();
        if self.entries_state.selected().unwrap_or(0) >= len {
            self.entries_state
                .select(if len == 0 { None } else { Some(len - 1) });
        } else if self.entries_state.selected().is_none() && len > 0 {
            self.entries_state.select(Some(0));
        }
    }
}
