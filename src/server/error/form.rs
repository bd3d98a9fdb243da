//! Undecodable form submissions.

use axum::response::{IntoResponse, Redirect, Response};
use thiserror::Error;

use crate::model::api::FlashLevel;

/// A submitted form could not be decoded into its fields.
#[derive(Error, Debug)]
pub enum FormError {
    /// Missing or malformed fields; the user is sent back to `redirect`.
    #[error("Form submission rejected, returning to {redirect}: {reason}")]
    Incomplete {
        /// Page holding the form.
        redirect: String,
        /// Rejection reported by the extractor.
        reason: String,
    },
}

impl FormError {
    pub(super) fn flash(&self) -> Option<(FlashLevel, &'static str)> {
        match self {
            Self::Incomplete { .. } => {
                Some((FlashLevel::Warning, "Please fill out all required fields."))
            }
        }
    }
}

impl IntoResponse for FormError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::Incomplete { redirect, .. } => Redirect::to(&redirect).into_response(),
        }
    }
}
