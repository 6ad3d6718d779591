use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to load environment variables for database connection: {0}")]
    ConnectionConfigError(String),

    #[error("Database operation failed: {0}")]
    QueryError(#[from] sqlx::Error),

    #[error("Database migration failed: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),

    #[error("A marks record with roll number {0:?} already exists")]
    DuplicateRollNumber(String),
}

impl DbError {
    /// Translates a failed insert, singling out unique-constraint violations.
    pub(crate) fn from_insert(err: sqlx::Error, roll_number: &str) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                DbError::DuplicateRollNumber(roll_number.to_string())
            }
            _ => DbError::QueryError(err),
        }
    }
}
