//! # Marks Database Crate
//!
//! This crate owns every persisted marks record. It is the only place that
//! knows about SQL or any other storage detail.
//!
//! ## Architectural Principles
//!
//! - **One contract, two stores:** `MarksStore` is implemented by
//!   `DbRepository` (PostgreSQL) and `InMemoryStore` (process-local). The
//!   rest of the application only ever sees `Arc<dyn MarksStore>`.
//! - **Uniqueness lives in the store:** a roll number can be inserted once.
//!   A second insert fails with `DbError::DuplicateRollNumber`.
//! - **Explicit lifecycle:** `open_store` is called once by the entry point,
//!   and `MarksStore::close` once at shutdown. There is no global handle.
//!
//! ## Public API
//!
//! - `connect` / `run_migrations`: PostgreSQL pool and embedded migrations.
//! - `open_store`: picks the backend from `DatabaseSettings`.
//! - `DbError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod memory;
pub mod repository;
pub mod store;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, open_store, run_migrations};
pub use error::DbError;
pub use memory::InMemoryStore;
pub use repository::DbRepository;
pub use store::MarksStore;
