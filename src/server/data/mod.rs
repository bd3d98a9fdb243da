//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries for a single table each. They are generic over
//! [`sea_orm::ConnectionTrait`] so the same repository runs against a pooled connection or
//! inside a transaction opened by a service.

pub mod catalog;
pub mod user;

use sea_orm::{DbErr, SqlErr};

/// Whether a database error was caused by a unique constraint (duplicate email or name)
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// Whether a database error was caused by a foreign key constraint (missing parent state)
pub fn is_foreign_key_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
}
