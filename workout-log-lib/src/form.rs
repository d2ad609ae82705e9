//src/form.rs
use chrono::{Local, NaiveDate};
use std::collections::BTreeMap;

use crate::store::WorkoutEntry;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Fields of the entry form, used both as the key of the validation error
/// map and as the focus target in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormField {
    Date,
    Exercise,
    Weight,
    Reps,
    Sets,
    Notes,
}

impl FormField {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FormField::Date => "Date",
            FormField::Exercise => "Exercise",
            FormField::Weight => "Weight",
            FormField::Reps => "Reps",
            FormField::Sets => "Sets",
            FormField::Notes => "Notes",
        }
    }
}

/// The entry being authored or edited, every field still a string. Mirrors
/// what the user typed; validation and coercion happen on submit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub date: String,
    pub exercise: String,
    pub weight: String,
    pub reps: String,
    pub sets: String,
    pub notes: String,
}

impl FormState {
    #[must_use]
    pub fn from_entry(entry: &WorkoutEntry, display_weight: String) -> Self {
        Self {
            date: entry.date.format(DATE_FORMAT).to_string(),
            exercise: entry.exercise.clone(),
            weight: display_weight,
            reps: entry.reps.to_string(),
            sets: entry.sets.to_string(),
            notes: entry.notes.clone().unwrap_or_default(),
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Date => &self.date,
            FormField::Exercise => &self.exercise,
            FormField::Weight => &self.weight,
            FormField::Reps => &self.reps,
            FormField::Sets => &self.sets,
            FormField::Notes => &self.notes,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Date => &mut self.date,
            FormField::Exercise => &mut self.exercise,
            FormField::Weight => &mut self.weight,
            FormField::Reps => &mut self.reps,
            FormField::Sets => &mut self.sets,
            FormField::Notes => &mut self.notes,
        }
    }
}

pub type FieldErrors = BTreeMap<FormField, String>;

/// Pure validation pass over the form. Returns a message per failing field;
/// an empty map means the form may be submitted.
#[must_use]
pub fn validate_form(form: &FormState) -> FieldErrors {
    let mut errors = FieldErrors::new();

    // Date must exist, parse, and not be in the future
    let date = form.date.trim();
    if date.is_empty() {
        errors.insert(FormField::Date, "Date is required!".to_string());
    } else {
        match NaiveDate::parse_from_str(date, DATE_FORMAT) {
            Err(_) => {
                errors.insert(FormField::Date, "Invalid date".to_string());
            }
            Ok(selected) => {
                if selected > Local::now().date_naive() {
                    errors.insert(
                        FormField::Date,
                        "Date cannot be in the future.".to_string(),
                    );
                }
            }
        }
    }

    // Required fields
    if form.exercise.trim().is_empty() {
        errors.insert(
            FormField::Exercise,
            "Exercise selection is required!".to_string(),
        );
    }
    if form.weight.trim().is_empty() {
        errors.insert(FormField::Weight, "Weight value is required!".to_string());
    }
    if form.reps.trim().is_empty() {
        errors.insert(FormField::Reps, "Reps value is required!".to_string());
    }
    if form.sets.trim().is_empty() {
        errors.insert(FormField::Sets, "Sets value is required!".to_string());
    }

    // Numeric checks
    let weight = form.weight.trim();
    if !weight.is_empty() && !is_decimal_string(weight) {
        errors.insert(
            FormField::Weight,
            "Weight must be a positive number (decimals allowed)".to_string(),
        );
    }
    let reps = form.reps.trim();
    if !reps.is_empty() && !is_whole_number_string(reps) {
        errors.insert(
            FormField::Reps,
            "Reps must be a positive whole number.".to_string(),
        );
    }
    let sets = form.sets.trim();
    if !sets.is_empty() && !is_whole_number_string(sets) {
        errors.insert(
            FormField::Sets,
            "Sets must be a positive whole number.".to_string(),
        );
    }

    errors
}

/// Non-negative decimal: digits, optionally one point followed by digits.
fn is_decimal_string(s: &str) -> bool {
    match s.split_once('.') {
        None => is_whole_number_string(s),
        Some((int_part, frac_part)) => {
            is_whole_number_string(int_part) && is_whole_number_string(frac_part)
        }
    }
}

fn is_whole_number_string(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
