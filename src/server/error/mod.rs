//! Error types for the Wayfarer server application.
//!
//! This module provides the error handling system with specialized error types for the
//! identity, catalog and configuration domains. All errors implement `IntoResponse` for Axum
//! HTTP responses and use `thiserror` for ergonomic error definitions. User-facing failures
//! (bad credentials, duplicates, missing authorization) become redirects back to a sensible
//! page; direct lookups of missing records become 404 responses; anything else is a 500.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod form;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, FlashLevel},
    server::error::{
        auth::AuthError, catalog::CatalogError, config::ConfigError, form::FormError,
    },
};

/// Main error type for the Wayfarer server application.
///
/// Aggregates the domain-specific error types and external library errors into a single
/// type. `#[from]` conversions allow `?` across repositories, services and controllers.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication & authorization errors (credentials, registration, session gates)
/// - Catalog errors (duplicate state name, missing state or city)
/// - Form errors (missing or malformed fields in a submission)
/// - External library errors (database, sessions, password hashing)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication or authorization error.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Catalog error (state/city lookups and uniqueness).
    #[error(transparent)]
    CatalogError(#[from] CatalogError),
    /// Form submission that could not be decoded.
    #[error(transparent)]
    FormError(#[from] FormError),
    /// Internal error indicating a bug in Wayfarer's code.
    #[error("Internal error with Wayfarer's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// Credential hashing error.
    #[error("Failed to hash credential: {0}")]
    PasswordHashError(#[from] argon2::password_hash::Error),
    /// I/O error (listener bind, serve loop).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl Error {
    /// Notification to show the user for errors that are an expected outcome of a form
    /// submission, `None` for everything else.
    pub fn flash(&self) -> Option<(FlashLevel, &'static str)> {
        match self {
            Self::AuthError(err) => err.flash(),
            Self::CatalogError(err) => err.flash(),
            Self::FormError(err) => err.flash(),
            _ => None,
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 303 See Other - Authentication, authorization and form validation failures
/// - 404 Not Found - Missing state or city on a direct lookup
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::CatalogError(err) => err.into_response(),
            Self::FormError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(
    /// Error to log.
    pub E,
);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
