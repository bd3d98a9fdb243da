//! Administrator pages.
//!
//! Every handler calls [`require_admin`] before touching the catalog, so anonymous sessions are
//! redirected to `/login` and regular users to `/dashboard` without any mutation taking place.

pub mod city;
pub mod state;

use axum::{extract::State, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, page::UserPage},
    server::{
        controller::util::identity::require_admin,
        error::Error,
        model::{app::AppState, session::flash::SessionFlash},
    },
};

/// OpenAPI tag for administrator pages
pub static ADMIN_TAG: &str = "admin";

/// Admin panel landing page
///
/// # Responses
/// - 200 (OK): The administrator's profile
/// - 303 (See Other): Anonymous sessions go to `/login`, regular users to `/dashboard`
/// - 500 (Internal Server Error): Database or session error
#[utoipa::path(
    get,
    path = "/admin",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Administrator profile", body = UserPage),
        (status = 303, description = "Not logged in or not an administrator"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_panel(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let admin = require_admin(&state, &session).await?;

    Ok(Json(UserPage {
        flash: SessionFlash::take(&session).await?,
        user: admin.into(),
    }))
}
