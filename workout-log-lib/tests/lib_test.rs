use anyhow::Result;
use chrono::{Duration, Local, NaiveDate};
use std::cell::{Cell, RefCell};
use workout_log_lib::store::StatusCode;
use workout_log_lib::{
    display_weight, round1, to_kg, to_lbs, validate_form, weight_to_input, Config, EntryPayload,
    FormField, FormState, LogSession, Phase, RecordStore, StoreError, SubmitOutcome, WeightUnit,
    WorkoutEntry,
};

// In-memory record store standing in for the HTTP backend. Counts list()
// calls so tests can tell a refetch from an optimistic local prune.
#[derive(Default)]
struct FakeStore {
    entries: RefCell<Vec<WorkoutEntry>>,
    next_id: Cell<i64>,
    list_calls: Cell<usize>,
    created: RefCell<Vec<EntryPayload>>,
    updated: RefCell<Vec<(i64, EntryPayload)>>,
    fail: Cell<bool>,
}

impl FakeStore {
    fn with_entries(entries: Vec<WorkoutEntry>) -> Self {
        let next_id = entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        let store = Self::default();
        *store.entries.borrow_mut() = entries;
        store.next_id.set(next_id);
        store
    }

}

fn entry_from(id: i64, payload: &EntryPayload) -> WorkoutEntry {
    WorkoutEntry {
        id,
        date: payload.date,
        exercise: payload.exercise.clone(),
        weight: payload.weight,
        reps: payload.reps,
        sets: payload.sets,
        notes: payload.notes.clone(),
    }
}

fn server_error(operation: &'static str) -> StoreError {
    StoreError::Status {
        operation,
        status: StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl RecordStore for FakeStore {
    fn list(&self) -> Result<Vec<WorkoutEntry>, StoreError> {
        if self.fail.get() {
            return Err(server_error("list"));
        }
        self.list_calls.set(self.list_calls.get() + 1);
        Ok(self.entries.borrow().clone())
    }

    fn create(&self, payload: &EntryPayload) -> Result<WorkoutEntry, StoreError> {
        if self.fail.get() {
            return Err(server_error("create"));
        }
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let entry = entry_from(id, payload);
        self.entries.borrow_mut().push(entry.clone());
        self.created.borrow_mut().push(payload.clone());
        Ok(entry)
    }

    fn update(&self, id: i64, payload: &EntryPayload) -> Result<WorkoutEntry, StoreError> {
        if self.fail.get() {
            return Err(server_error("update"));
        }
        let entry = entry_from(id, payload);
        let mut entries = self.entries.borrow_mut();
        if let Some(slot) = entries.iter_mut().find(|e| e.id == id) {
            *slot = entry.clone();
        }
        self.updated.borrow_mut().push((id, payload.clone()));
        Ok(entry)
    }

    fn delete(&self, id: i64) -> Result<(), StoreError> {
        if self.fail.get() {
            return Err(server_error("delete"));
        }
        self.entries.borrow_mut().retain(|e| e.id != id);
        Ok(())
    }
}

fn sample_entry(id: i64, date: &str, exercise: &str, weight: f64) -> WorkoutEntry {
    WorkoutEntry {
        id,
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        exercise: exercise.to_string(),
        weight,
        reps: 5,
        sets: 3,
        notes: None,
    }
}

fn type_into(session: &mut LogSession, field: FormField, value: &str) {
    for c in value.chars() {
        session.push_char(field, c);
    }
}

fn clear_field(session: &mut LogSession, field: FormField) {
    while !session.form().field(field).is_empty() {
        session.pop_char(field);
    }
}

fn fill_valid_form(session: &mut LogSession) {
    type_into(session, FormField::Date, "2024-01-01");
    type_into(session, FormField::Exercise, "Squat");
    type_into(session, FormField::Weight, "100");
    type_into(session, FormField::Reps, "5");
    type_into(session, FormField::Sets, "3");
}

// --- Validation ---

#[test]
fn test_validate_form_accepts_valid_input() {
    let form = FormState {
        date: "2024-01-01".to_string(),
        exercise: "Bench Press".to_string(),
        weight: "135.5".to_string(),
        reps: "8".to_string(),
        sets: "4".to_string(),
        notes: String::new(),
    };
    assert!(validate_form(&form).is_empty());
}

#[test]
fn test_validate_form_requires_all_fields() {
    let errors = validate_form(&FormState::default());
    assert_eq!(errors.get(&FormField::Date).unwrap(), "Date is required!");
    assert_eq!(
        errors.get(&FormField::Exercise).unwrap(),
        "Exercise selection is required!"
    );
    assert!(errors.contains_key(&FormField::Weight));
    assert!(errors.contains_key(&FormField::Reps));
    assert!(errors.contains_key(&FormField::Sets));
    assert!(!errors.contains_key(&FormField::Notes)); // Notes are optional
}

#[test]
fn test_validate_form_rejects_future_date() {
    let today = Local::now().date_naive();
    let tomorrow = today + Duration::days(1);

    let mut form = FormState {
        date: tomorrow.format("%Y-%m-%d").to_string(),
        exercise: "Squat".to_string(),
        weight: "100".to_string(),
        reps: "5".to_string(),
        sets: "3".to_string(),
        notes: String::new(),
    };
    let errors = validate_form(&form);
    assert_eq!(
        errors.get(&FormField::Date).unwrap(),
        "Date cannot be in the future."
    );

    form.date = today.format("%Y-%m-%d").to_string();
    assert!(validate_form(&form).is_empty());
}

#[test]
fn test_validate_form_rejects_malformed_date() {
    let mut form = FormState {
        date: "not-a-date".to_string(),
        exercise: "Squat".to_string(),
        weight: "100".to_string(),
        reps: "5".to_string(),
        sets: "3".to_string(),
        notes: String::new(),
    };
    assert_eq!(validate_form(&form).get(&FormField::Date).unwrap(), "Invalid date");

    form.date = "2024-13-40".to_string(); // No such month or day
    assert_eq!(validate_form(&form).get(&FormField::Date).unwrap(), "Invalid date");
}

#[test]
fn test_validate_form_numeric_patterns() {
    let mut form = FormState {
        date: "2024-01-01".to_string(),
        exercise: "Squat".to_string(),
        weight: "12.5".to_string(),
        reps: "5".to_string(),
        sets: "3".to_string(),
        notes: String::new(),
    };
    assert!(validate_form(&form).is_empty());

    form.weight = "1.2.3".to_string();
    assert!(validate_form(&form).contains_key(&FormField::Weight));
    form.weight = "abc".to_string();
    assert!(validate_form(&form).contains_key(&FormField::Weight));
    form.weight = "100.".to_string(); // Trailing point fails the pattern
    assert!(validate_form(&form).contains_key(&FormField::Weight));
    form.weight = "100".to_string();

    form.reps = "5.5".to_string(); // Whole numbers only
    assert!(validate_form(&form).contains_key(&FormField::Reps));
    form.reps = "5".to_string();

    form.sets = "-3".to_string();
    assert!(validate_form(&form).contains_key(&FormField::Sets));
    form.sets = "0".to_string(); // Non-negative whole number passes
    assert!(validate_form(&form).is_empty());
}

// --- Unit conversion ---

#[test]
fn test_weight_conversion_round_trip() {
    for w in [0.0, 45.5, 100.0, 135.7, 220.0, 315.0] {
        let round_tripped = round1(to_kg(to_lbs(w)));
        assert!(
            (round_tripped - w).abs() <= 0.1,
            "round trip of {w} gave {round_tripped}"
        );
    }
}

#[test]
fn test_display_weight_conversion() {
    assert_eq!(display_weight(220.0, WeightUnit::Lbs), 220.0);
    assert_eq!(display_weight(220.0, WeightUnit::Kg), 99.8);
    assert_eq!(weight_to_input(220.0), "220");
    assert_eq!(weight_to_input(99.8), "99.8");
}

#[test]
fn test_toggle_unit_converts_weight_and_label() {
    let mut session = LogSession::new(WeightUnit::Lbs);
    type_into(&mut session, FormField::Weight, "100");

    session.toggle_unit();
    assert_eq!(session.unit(), WeightUnit::Kg);
    assert_eq!(session.form().weight, "45.4"); // 100 / 2.20462, 1 decimal

    session.toggle_unit();
    assert_eq!(session.unit(), WeightUnit::Lbs);
    let back: f64 = session.form().weight.parse().unwrap();
    assert!((back - 100.0).abs() <= 0.1); // Double toggle restores within rounding
}

#[test]
fn test_toggle_unit_with_non_numeric_weight_flips_label_only() {
    let mut session = LogSession::new(WeightUnit::Lbs);
    session.toggle_unit();
    assert_eq!(session.unit(), WeightUnit::Kg);
    assert_eq!(session.form().weight, "");

    type_into(&mut session, FormField::Weight, "1.2.3");
    session.toggle_unit();
    assert_eq!(session.unit(), WeightUnit::Lbs);
    assert_eq!(session.form().weight, "1.2.3");
}

// --- Submit (create) ---

#[test]
fn test_submit_posts_normalized_payload() -> Result<()> {
    let store = FakeStore::default();
    let mut session = LogSession::new(WeightUnit::Lbs);
    fill_valid_form(&mut session);

    let outcome = session.submit(&store)?;
    assert_eq!(outcome, SubmitOutcome::Saved);

    let created = store.created.borrow();
    assert_eq!(created.len(), 1);
    assert_eq!(
        serde_json::to_value(&created[0])?,
        serde_json::json!({
            "date": "2024-01-01",
            "exercise": "Squat",
            "reps": 5,
            "sets": 3,
            "weight": 100.0,
        })
    );
    Ok(())
}

#[test]
fn test_submit_refetches_and_resets_form() -> Result<()> {
    let store = FakeStore::default();
    let mut session = LogSession::new(WeightUnit::Lbs);
    fill_valid_form(&mut session);
    type_into(&mut session, FormField::Notes, "felt strong");
    assert_eq!(*session.phase(), Phase::EditingNew);

    session.submit(&store)?;
    assert_eq!(*session.phase(), Phase::Idle);
    assert_eq!(*session.form(), FormState::default());
    assert!(session.errors().is_empty());
    assert_eq!(store.list_calls.get(), 1); // Refetched after the write
    assert_eq!(session.entries().len(), 1);
    assert_eq!(
        session.entries()[0].notes.as_deref(),
        Some("felt strong") // Notes travel with the payload
    );
    Ok(())
}

#[test]
fn test_submit_in_kg_mode_converts_to_pounds() -> Result<()> {
    let store = FakeStore::default();
    let mut session = LogSession::new(WeightUnit::Kg);
    type_into(&mut session, FormField::Date, "2024-01-01");
    type_into(&mut session, FormField::Exercise, "Deadlift");
    type_into(&mut session, FormField::Weight, "45.4");
    type_into(&mut session, FormField::Reps, "5");
    type_into(&mut session, FormField::Sets, "3");

    session.submit(&store)?;
    let created = store.created.borrow();
    assert_eq!(created[0].weight, round1(45.4 * 2.20462)); // 100.1 lbs
    Ok(())
}

#[test]
fn test_submit_resets_unit_to_lbs() -> Result<()> {
    let store = FakeStore::default();
    let mut session = LogSession::new(WeightUnit::Kg);
    fill_valid_form(&mut session);
    session.submit(&store)?;
    assert_eq!(session.unit(), WeightUnit::Lbs);
    Ok(())
}

#[test]
fn test_submit_with_validation_errors_skips_store() -> Result<()> {
    let store = FakeStore::default();
    let mut session = LogSession::new(WeightUnit::Lbs);
    type_into(&mut session, FormField::Exercise, "Squat");

    let outcome = session.submit(&store)?;
    assert_eq!(outcome, SubmitOutcome::Invalid);
    assert!(!session.errors().is_empty());
    assert!(store.created.borrow().is_empty());
    assert_eq!(store.list_calls.get(), 0);
    Ok(())
}

#[test]
fn test_submit_failure_preserves_form_and_phase() {
    let store = FakeStore::default();
    let mut session = LogSession::new(WeightUnit::Lbs);
    fill_valid_form(&mut session);
    store.fail.set(true);

    let result = session.submit(&store);
    assert!(result.is_err());
    assert_eq!(*session.phase(), Phase::EditingNew); // Last-known-good state
    assert_eq!(session.form().exercise, "Squat");
    assert_eq!(session.form().weight, "100");
}

// --- Editing ---

#[test]
fn test_start_edit_converts_weight_to_display_unit() {
    let entry = sample_entry(1, "2024-01-01", "Bench Press", 220.0);
    let mut session = LogSession::new(WeightUnit::Lbs);
    session.toggle_unit(); // Display in kg

    session.start_edit(entry.clone());
    assert_eq!(session.form().weight, "99.8"); // 220 / 2.20462, 1 decimal
    assert_eq!(session.form().exercise, "Bench Press");
    assert_eq!(session.form().date, "2024-01-01");
    assert_eq!(session.editing_entry().map(|e| e.id), Some(1));
}

#[test]
fn test_start_edit_in_lbs_keeps_weight_verbatim() {
    let entry = sample_entry(2, "2024-02-02", "Row", 220.0);
    let mut session = LogSession::new(WeightUnit::Lbs);
    session.start_edit(entry);
    assert_eq!(session.form().weight, "220");
}

#[test]
fn test_start_edit_clears_previous_errors() -> Result<()> {
    let store = FakeStore::default();
    let mut session = LogSession::new(WeightUnit::Lbs);
    session.submit(&store)?; // Empty form: populates errors
    assert!(!session.errors().is_empty());

    session.start_edit(sample_entry(3, "2024-03-03", "Squat", 185.0));
    assert!(session.errors().is_empty());
    Ok(())
}

#[test]
fn test_submit_while_editing_updates_entry() -> Result<()> {
    let entry = sample_entry(1, "2024-01-01", "Squat", 200.0);
    let store = FakeStore::with_entries(vec![entry.clone()]);
    let mut session = LogSession::new(WeightUnit::Lbs);
    session.refresh(&store)?;

    session.start_edit(entry);
    clear_field(&mut session, FormField::Weight);
    type_into(&mut session, FormField::Weight, "205");

    let outcome = session.submit(&store)?;
    assert_eq!(outcome, SubmitOutcome::Saved);

    let updated = store.updated.borrow();
    assert_eq!(updated.len(), 1);
    assert_eq!(updated[0].0, 1);
    assert_eq!(updated[0].1.weight, 205.0);
    assert!(store.created.borrow().is_empty()); // Update, not create
    assert_eq!(*session.phase(), Phase::Idle);
    Ok(())
}

#[test]
fn test_cancel_edit_discards_form() {
    let mut session = LogSession::new(WeightUnit::Lbs);
    session.start_edit(sample_entry(4, "2024-04-04", "Press", 95.0));
    session.cancel_edit();
    assert_eq!(*session.phase(), Phase::Idle);
    assert_eq!(*session.form(), FormState::default());
}

#[test]
fn test_typing_enters_editing_state() {
    let mut session = LogSession::new(WeightUnit::Lbs);
    assert_eq!(*session.phase(), Phase::Idle);
    session.push_char(FormField::Exercise, 'S');
    assert_eq!(*session.phase(), Phase::EditingNew);
}

// --- Delete ---

#[test]
fn test_delete_removes_locally_without_refetch() -> Result<()> {
    let store = FakeStore::with_entries(vec![
        sample_entry(1, "2024-01-01", "Squat", 200.0),
        sample_entry(7, "2024-01-02", "Bench Press", 150.0),
        sample_entry(9, "2024-01-03", "Deadlift", 300.0),
    ]);
    let mut session = LogSession::new(WeightUnit::Lbs);
    session.refresh(&store)?;
    assert_eq!(store.list_calls.get(), 1);

    session.delete(&store, 7)?;
    let ids: Vec<i64> = session.entries().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 9]);
    assert_eq!(store.list_calls.get(), 1); // No refetch, optimistic prune
    Ok(())
}

#[test]
fn test_delete_failure_leaves_collection_unchanged() -> Result<()> {
    let store = FakeStore::with_entries(vec![sample_entry(7, "2024-01-02", "Bench Press", 150.0)]);
    let mut session = LogSession::new(WeightUnit::Lbs);
    session.refresh(&store)?;

    store.fail.set(true);
    assert!(session.delete(&store, 7).is_err());
    assert_eq!(session.entries().len(), 1);
    Ok(())
}

// --- Collection & config ---

#[test]
fn test_refresh_replaces_collection_wholesale() -> Result<()> {
    let store = FakeStore::with_entries(vec![sample_entry(1, "2024-01-01", "Squat", 200.0)]);
    let mut session = LogSession::new(WeightUnit::Lbs);
    session.refresh(&store)?;
    assert_eq!(session.entries().len(), 1);

    *store.entries.borrow_mut() = vec![
        sample_entry(2, "2024-02-01", "Row", 100.0),
        sample_entry(3, "2024-02-02", "Press", 95.0),
    ];
    session.refresh(&store)?;
    let ids: Vec<i64> = session.entries().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![2, 3]);
    Ok(())
}

#[test]
fn test_config_defaults() {
    let config = Config::default();
    assert_eq!(config.server_url, "http://localhost:3000");
    assert_eq!(config.units, WeightUnit::Lbs);
    assert_eq!(config.theme.header_color, "Green");
}
