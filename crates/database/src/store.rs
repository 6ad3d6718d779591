use crate::DbError;
use async_trait::async_trait;
use core_types::{MarksRecord, NewMarks};

/// The persistence contract for the marks collection.
///
/// Implementations own the records; callers never hold a cached copy
/// between calls. A roll number may be stored at most once.
#[async_trait]
pub trait MarksStore: Send + Sync {
    /// Persists a new record and returns it with its identifier and timestamps.
    ///
    /// Fails with `DbError::DuplicateRollNumber` if the roll number is taken.
    async fn insert(&self, marks: NewMarks) -> Result<MarksRecord, DbError>;

    /// Returns records in storage order, optionally only those whose roll
    /// number matches exactly.
    async fn find(&self, roll_number: Option<&str>) -> Result<Vec<MarksRecord>, DbError>;

    /// Releases any resources held by the store. Called once at shutdown.
    async fn close(&self) {}
}
