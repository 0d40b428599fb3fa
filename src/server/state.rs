//! Application state shared across all request handlers.
//!
//! Defines the `AppState` struct holding the shared resources every request
//! handler needs. The state is initialized once during startup and then
//! cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use super::service::auth::token::TokenService;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a connection pool
/// (clones share the pool) and `TokenService` holds its signing keys behind
/// an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Signs and verifies the bearer tokens used for authentication.
    pub tokens: TokenService,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Token service configured with the application secret
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, tokens: TokenService) -> Self {
        Self { db, tokens }
    }
}
