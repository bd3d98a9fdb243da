//! Pages for logged in regular users.

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, page::UserPage},
    server::{
        controller::util::identity::require_authenticated,
        error::Error,
        model::{app::AppState, session::flash::SessionFlash},
    },
};

/// OpenAPI tag for regular user pages
pub static USER_TAG: &str = "user";

/// Dashboard of a logged in regular user
///
/// The administrator is sent to the admin panel instead.
///
/// # Responses
/// - 200 (OK): The user's profile
/// - 303 (See Other): Anonymous sessions go to `/login`, the administrator to `/admin`
/// - 500 (Internal Server Error): Database or session error
#[utoipa::path(
    get,
    path = "/dashboard",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Current user's profile", body = UserPage),
        (status = 303, description = "Not logged in, or administrator redirected to /admin"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, Error> {
    let user = require_authenticated(&state, &session).await?;

    if user.is_admin {
        return Ok(Redirect::to("/admin").into_response());
    }

    Ok(Json(UserPage {
        flash: SessionFlash::take(&session).await?,
        user: user.into(),
    })
    .into_response())
}
