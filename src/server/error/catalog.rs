//! Catalog lookup and uniqueness failures.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{ErrorDto, FlashLevel};

/// Catalog failures, either a redirect with a notification or a 404.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// State name collides with an existing state.
    #[error("A state named {0:?} already exists")]
    DuplicateStateName(String),
    /// No state with this ID.
    #[error("State ID {0} not found")]
    StateNotFound(i32),
    /// No city with this ID.
    #[error("City ID {0} not found")]
    CityNotFound(i32),
}

impl CatalogError {
    pub(super) fn flash(&self) -> Option<(FlashLevel, &'static str)> {
        match self {
            Self::DuplicateStateName(_) => Some((
                FlashLevel::Danger,
                "A state with this name already exists.",
            )),
            Self::StateNotFound(_) | Self::CityNotFound(_) => None,
        }
    }

    fn not_found(message: &str) -> Response {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        match self {
            Self::DuplicateStateName(_) => {
                tracing::debug!("{}", self);

                Redirect::to("/admin/states").into_response()
            }
            Self::StateNotFound(state_id) => {
                tracing::debug!(state_id = %state_id, "{}", self);

                Self::not_found("State not found")
            }
            Self::CityNotFound(city_id) => {
                tracing::debug!(city_id = %city_id, "{}", self);

                Self::not_found("City not found")
            }
        }
    }
}
