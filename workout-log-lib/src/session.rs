//src/session.rs
use chrono::NaiveDate;
use std::mem;
use tracing::debug;

use crate::config::WeightUnit;
use crate::form::{validate_form, FieldErrors, FormField, FormState, DATE_FORMAT};
use crate::store::{self, EntryPayload, RecordStore, WorkoutEntry};
use crate::{display_weight, round1, to_lbs, weight_to_input};

/// Where the session currently is. One tagged state instead of independent
/// flags, so a submit cannot overlap a delete and an edit target cannot
/// exist outside `EditingExisting`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    EditingNew,
    EditingExisting(WorkoutEntry),
    Submitting,
    Deleting(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Entry written and the collection re-fetched; form reset.
    Saved,
    /// Validation failed; `errors()` holds the field messages.
    Invalid,
}

/// Owns the form, the active display unit, the cached entry collection, and
/// the validation errors, and runs every state transition of the log.
///
/// The entry collection is a cache of server state: fully replaced by a
/// fresh fetch after any create/update, optimistically pruned after delete.
pub struct LogSession {
    form: FormState,
    unit: WeightUnit,
    entries: Vec<WorkoutEntry>,
    errors: FieldErrors,
    phase: Phase,
}

impl LogSession {
    #[must_use]
    pub fn new(unit: WeightUnit) -> Self {
        Self {
            form: FormState::default(),
            unit,
            entries: Vec::new(),
            errors: FieldErrors::new(),
            phase: Phase::Idle,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn unit(&self) -> WeightUnit {
        self.unit
    }

    pub fn entries(&self) -> &[WorkoutEntry] {
        &self.entries
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn editing_entry(&self) -> Option<&WorkoutEntry> {
        match &self.phase {
            Phase::EditingExisting(entry) => Some(entry),
            _ => None,
        }
    }

    /// Replaces the local collection with a fresh fetch.
    /// # Errors
    /// Propagates the store error; the cached collection is left unchanged.
    pub fn refresh(&mut self, store: &dyn RecordStore) -> Result<(), store::Error> {
        self.entries = store.list()?;
        Ok(())
    }

    /// Appends a character to one form field. Typing into an idle form
    /// starts a new entry.
    pub fn push_char(&mut self, field: FormField, c: char) {
        self.mark_editing();
        self.form.field_mut(field).push(c);
    }

    /// Removes the last character of one form field.
    pub fn pop_char(&mut self, field: FormField) {
        self.mark_editing();
        self.form.field_mut(field).pop();
    }

    fn mark_editing(&mut self) {
        if self.phase == Phase::Idle {
            debug!("form edit begins, entering EditingNew");
            self.phase = Phase::EditingNew;
        }
    }

    /// Populates the form from an existing entry and switches to
    /// `EditingExisting`. A previous in-progress edit is replaced without
    /// confirmation. The weight field is shown in the active display unit.
    pub fn start_edit(&mut self, entry: WorkoutEntry) {
        debug!("editing entry {}", entry.id);
        self.errors.clear();
        let shown = weight_to_input(display_weight(entry.weight, self.unit));
        self.form = FormState::from_entry(&entry, shown);
        self.phase = Phase::EditingExisting(entry);
    }

    /// Discards the in-progress entry or edit and returns to `Idle`.
    pub fn cancel_edit(&mut self) {
        self.form = FormState::default();
        self.errors.clear();
        self.phase = Phase::Idle;
    }

    /// Flips the display unit. A numeric weight field is converted together
    /// with the label; otherwise only the label changes.
    pub fn toggle_unit(&mut self) {
        if let Ok(current) = self.form.weight.trim().parse::<f64>() {
            if current.is_finite() {
                let converted = match self.unit {
                    WeightUnit::Lbs => round1(crate::to_kg(current)),
                    WeightUnit::Kg => round1(to_lbs(current)),
                };
                self.form.weight = weight_to_input(converted);
            }
        }
        self.unit = self.unit.toggled();
    }

    /// Validates and writes the form: create when nothing is being edited,
    /// update otherwise. On success the collection is re-fetched and the
    /// form reset (display unit back to lbs).
    ///
    /// # Errors
    /// A store failure propagates with the prior phase and form intact, so
    /// the user can resubmit as-is.
    pub fn submit(&mut self, store: &dyn RecordStore) -> Result<SubmitOutcome, store::Error> {
        let errors = validate_form(&self.form);
        if !errors.is_empty() {
            self.errors = errors;
            return Ok(SubmitOutcome::Invalid);
        }
        self.errors.clear();

        let Some(payload) = self.normalized_payload() else {
            // Validation guarantees parseable fields; treat a miss as invalid
            // rather than panicking.
            return Ok(SubmitOutcome::Invalid);
        };

        let prior = mem::replace(&mut self.phase, Phase::Submitting);
        let written = match &prior {
            Phase::EditingExisting(entry) => store.update(entry.id, &payload),
            _ => store.create(&payload),
        };

        match written.and_then(|_| store.list()) {
            Ok(entries) => {
                self.entries = entries;
                self.form = FormState::default();
                self.unit = WeightUnit::Lbs;
                self.phase = Phase::Idle;
                Ok(SubmitOutcome::Saved)
            }
            Err(e) => {
                self.phase = prior;
                Err(e)
            }
        }
    }

    /// Deletes by id and prunes the entry from the local collection without
    /// a refetch. On failure the collection is left unchanged.
    /// # Errors
    /// Propagates the store error.
    pub fn delete(&mut self, store: &dyn RecordStore, id: i64) -> Result<(), store::Error> {
        let prior = mem::replace(&mut self.phase, Phase::Deleting(id));
        let result = store.delete(id);
        self.phase = prior;
        result?;
        self.entries.retain(|entry| entry.id != id);
        Ok(())
    }

    /// Coerces the validated form into the wire payload, converting a
    /// kilogram entry back to canonical pounds.
    fn normalized_payload(&self) -> Option<EntryPayload> {
        let date = NaiveDate::parse_from_str(self.form.date.trim(), DATE_FORMAT).ok()?;
        let input_weight: f64 = self.form.weight.trim().parse().ok()?;
        let weight = match self.unit {
            WeightUnit::Kg => round1(to_lbs(input_weight)),
            WeightUnit::Lbs => input_weight,
        };
        let notes = self.form.notes.trim();
        Some(EntryPayload {
            date,
            exercise: self.form.exercise.trim().to_string(),
            reps: self.form.reps.trim().parse().ok()?,
            sets: self.form.sets.trim().parse().ok()?,
            weight,
            notes: if notes.is_empty() {
                None
            } else {
                Some(notes.to_string())
            },
        })
    }
}
