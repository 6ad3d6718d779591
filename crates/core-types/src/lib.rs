//! # Core Types
//!
//! The shared vocabulary of the marks registry. Every other crate speaks in
//! terms of these structures: the database stores them, the service passes
//! them through, and the web server serializes them to the UI.

pub mod error;
pub mod marks;

// Re-export the core types to provide a clean public API.
pub use error::ValidationError;
pub use marks::{MarksDraft, MarksRecord, NewMarks, MAX_TEXT_LEN};
