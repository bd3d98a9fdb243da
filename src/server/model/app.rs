//! Shared application state handed to every handler.

use sea_orm::DatabaseConnection;

/// Shared handler state; the database connection is the injected store every service and
/// repository operates on.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
