//! Error types for test setup.

use thiserror::Error;

/// Errors that can occur while building a test context.
#[derive(Debug, Error)]
pub enum TestError {
    /// Database connection or schema setup failed.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}
