//src/store.rs
use chrono::NaiveDate;
use reqwest::blocking::Client;
pub use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum Error {
    #[error("Request to record store failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Record store returned status {status} for {operation}")]
    Status {
        operation: &'static str,
        status: StatusCode,
    },
}

/// One persisted workout record. `weight` is canonical pounds; display-unit
/// conversion never touches this value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutEntry {
    pub id: i64,
    pub date: NaiveDate,
    pub exercise: String,
    pub weight: f64,
    pub reps: i64,
    pub sets: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Normalized write payload: numeric reps/sets, pounds weight. Matches the
/// JSON body of POST /logs and PUT /logs/{id}.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryPayload {
    pub date: NaiveDate,
    pub exercise: String,
    pub reps: i64,
    pub sets: i64,
    pub weight: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Narrow interface over the remote record store so the session logic can be
/// exercised without a live backend.
pub trait RecordStore {
    /// Fetches every entry.
    /// # Errors
    /// Returns `store::Error` on transport failure or a non-success status.
    fn list(&self) -> Result<Vec<WorkoutEntry>, Error>;

    /// Creates a new entry from the payload and returns the stored record.
    /// # Errors
    /// Returns `store::Error` on transport failure or a non-success status.
    fn create(&self, payload: &EntryPayload) -> Result<WorkoutEntry, Error>;

    /// Replaces the entry with the given id.
    /// # Errors
    /// Returns `store::Error` on transport failure or a non-success status.
    fn update(&self, id: i64, payload: &EntryPayload) -> Result<WorkoutEntry, Error>;

    /// Removes the entry with the given id.
    /// # Errors
    /// Returns `store::Error` on transport failure or a non-success status.
    fn delete(&self, id: i64) -> Result<(), Error>;
}

/// HTTP client for the /logs collection of a REST record store.
///
/// Blocking on purpose: the UI is a single-threaded event loop, and a
/// blocking round trip means at most one request is ever in flight.
pub struct HttpStore {
    client: Client,
    base_url: String,
}

impl HttpStore {
    /// # Errors
    /// Returns `store::Error` if the underlying client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, Error> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn logs_url(&self) -> String {
        format!("{}/logs", self.base_url)
    }

    fn log_url(&self, id: i64) -> String {
        format!("{}/logs/{}", self.base_url, id)
    }
}

fn check_status(
    operation: &'static str,
    response: reqwest::blocking::Response,
) -> Result<reqwest::blocking::Response, Error> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        error!("{} failed with status {}", operation, status);
        Err(Error::Status { operation, status })
    }
}

impl RecordStore for HttpStore {
    fn list(&self) -> Result<Vec<WorkoutEntry>, Error> {
        let url = self.logs_url();
        debug!("GET {}", url);
        let response = check_status("list", self.client.get(&url).send()?)?;
        let entries: Vec<WorkoutEntry> = response.json()?;
        info!("Fetched {} entries from {}", entries.len(), url);
        Ok(entries)
    }

    fn create(&self, payload: &EntryPayload) -> Result<WorkoutEntry, Error> {
        let url = self.logs_url();
        debug!("POST {} for exercise '{}'", url, payload.exercise);
        let response = check_status("create", self.client.post(&url).json(payload).send()?)?;
        let entry: WorkoutEntry = response.json()?;
        info!("Created entry {} ('{}')", entry.id, entry.exercise);
        Ok(entry)
    }

    fn update(&self, id: i64, payload: &EntryPayload) -> Result<WorkoutEntry, Error> {
        let url = self.log_url(id);
        debug!("PUT {}", url);
        let response = check_status("update", self.client.put(&url).json(payload).send()?)?;
        let entry: WorkoutEntry = response.json()?;
        info!("Updated entry {}", id);
        Ok(entry)
    }

    fn delete(&self, id: i64) -> Result<(), Error> {
        let url = self.log_url(id);
        debug!("DELETE {}", url);
        check_status("delete", self.client.delete(&url).send()?)?;
        info!("Deleted entry {}", id);
        Ok(())
    }
}
