use thiserror::Error;

/// Errors that can occur while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to connect to the in-memory database or create the requested tables.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
