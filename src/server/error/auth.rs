//! Authentication and authorization failures.

use axum::response::{IntoResponse, Redirect, Response};
use thiserror::Error;

use crate::model::api::FlashLevel;

/// Authentication and authorization errors.
///
/// Every variant redirects: registration failures back to `/register`, identity failures to
/// `/login` and non-admin access to `/dashboard`.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Registration with an email that already has an account.
    #[error("Email address is already registered")]
    DuplicateEmail,
    /// Registration with the administrator's email.
    #[error("Email address is reserved for the administrator account")]
    ReservedEmail,
    /// Unknown email or wrong credential.
    #[error("Email or credential did not match a registered user")]
    InvalidCredentials,
    /// No user is bound to the session.
    #[error("No user is logged in for this session")]
    Unauthenticated,
    /// A regular user requested an administrator page.
    #[error("User ID {0} attempted an administrator operation")]
    Forbidden(i32),
    /// The session references a user that no longer exists.
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
}

impl AuthError {
    pub(super) fn flash(&self) -> Option<(FlashLevel, &'static str)> {
        match self {
            Self::DuplicateEmail => Some((FlashLevel::Warning, "Email address already registered.")),
            Self::ReservedEmail => Some((
                FlashLevel::Danger,
                "This email is reserved for administrative use.",
            )),
            Self::InvalidCredentials => Some((
                FlashLevel::Danger,
                "Login unsuccessful. Please check email and password.",
            )),
            Self::Unauthenticated => Some((FlashLevel::Info, "Please log in to access this page.")),
            Self::Forbidden(_) | Self::UserNotInDatabase(_) => None,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::DuplicateEmail | Self::ReservedEmail => {
                tracing::debug!("{}", self);

                Redirect::to("/register").into_response()
            }
            Self::InvalidCredentials | Self::Unauthenticated | Self::UserNotInDatabase(_) => {
                tracing::debug!("{}", self);

                Redirect::to("/login").into_response()
            }
            Self::Forbidden(user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);

                Redirect::to("/dashboard").into_response()
            }
        }
    }
}
