//! `cadenza-storage` — Shared persistence layer for the desktop app.
//!
//! Owns the preference store (grouped key/value settings backed by one JSON
//! file), the per-application data directories, and the window placement
//! record the shell saves at shutdown. No UI dependencies.

pub mod error;
pub mod paths;
pub mod preferences;
pub mod value;
pub mod window;

pub use error::StorageError;
pub use preferences::{Preferences, DEFAULT_GROUP};
pub use value::{FromCanonical, ToCanonical};
pub use window::WindowPlacement;
