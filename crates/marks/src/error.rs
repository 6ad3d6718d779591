use thiserror::Error;

/// The single failure kind the service reports: the store refused or failed.
///
/// The message of the underlying error is preserved so the API layer can
/// relay it to the client.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("{0}")]
    Persistence(#[from] database::DbError),
}
