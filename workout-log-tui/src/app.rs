// workout-log-tui/src/app.rs

// Declare the modules within the app directory
pub mod data;
pub mod input;
pub mod state;

// Re-export the main App struct and other necessary types for convenience
pub use state::{ActiveModal, App, FormFocus, PaneFocus};
