// src/lib.rs
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

// --- Declare modules ---
pub mod config;
pub mod form;
pub mod session;
pub mod store;

// --- Expose public types ---
pub use config::{
    get_config_path as get_config_path_util,
    load_config as load_config_util,
    parse_color,
    save_config as save_config_util,
    Config,
    Error as ConfigError,
    StandardColor,
    Theme,
    WeightUnit,
};
pub use form::{validate_form, FieldErrors, FormField, FormState};
pub use session::{LogSession, Phase, SubmitOutcome};
pub use store::{
    EntryPayload, Error as StoreError, HttpStore, RecordStore, WorkoutEntry,
};

/// Pounds per kilogram. Weight is stored canonically in pounds; kilograms
/// exist only at the display/input boundary.
pub const KG_TO_LB: f64 = 2.20462;

#[must_use]
pub fn to_kg(lbs: f64) -> f64 {
    lbs / KG_TO_LB
}

#[must_use]
pub fn to_lbs(kg: f64) -> f64 {
    kg * KG_TO_LB
}

/// Rounds to one decimal place, the precision used everywhere a converted
/// weight is shown or written back.
#[must_use]
pub fn round1(n: f64) -> f64 {
    (n * 10.0).round() / 10.0
}

/// A stored (pounds) weight as it should appear under the given display
/// unit: pounds pass through untouched, kilograms are converted and rounded.
#[must_use]
pub fn display_weight(weight_lbs: f64, unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Lbs => weight_lbs,
        WeightUnit::Kg => round1(to_kg(weight_lbs)),
    }
}

/// Formats a weight for the input field the way a user would type it:
/// no trailing ".0" on whole values.
#[must_use]
pub fn weight_to_input(weight: f64) -> String {
    if weight.fract() == 0.0 {
        format!("{}", weight as i64)
    } else {
        format!("{weight}")
    }
}

pub struct AppService {
    pub config: Config,
    pub store: HttpStore,
    pub config_path: PathBuf,
}

impl AppService {
    /// Initializes the application service: config path, config, and the
    /// HTTP record store pointed at the configured server.
    /// # Errors
    /// Returns `anyhow::Error` if config path determination, loading, or
    /// client construction fails.
    pub fn initialize() -> Result<Self> {
        let config_path =
            config::get_config_path().context("Failed to determine configuration file path")?;
        let config = config::load_config(&config_path)
            .context(format!("Failed to load config from {config_path:?}"))?;

        let store = HttpStore::new(config.server_url.clone())
            .context("Failed to build record store client")?;

        Ok(Self {
            config,
            store,
            config_path,
        })
    }

    pub fn get_config_path(&self) -> &Path {
        &self.config_path
    }

    /// Saves the current configuration state.
    /// # Errors
    /// Returns `ConfigError` if saving fails.
    pub fn save_config(&self) -> Result<(), ConfigError> {
        config::save_config(&self.config_path, &self.config)
    }
}
