//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources and dependencies.
///
/// Cloned for each request via Axum's state extraction. `DatabaseConnection` is a
/// connection pool, so clones share the same pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// Repositories borrow it per request, e.g. `BoardRepository::new(&state.db)`.
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates a new application state around an already migrated connection pool.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
