//! State management.

use axum::{
    extract::{rejection::FormRejection, Path, State},
    response::{IntoResponse, Redirect},
    Form, Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, FlashLevel},
        catalog::StateForm,
        page::{StateListPage, StatePage},
    },
    server::{
        controller::{
            admin::ADMIN_TAG,
            util::{flash::flash_on_err, form::accept_form, identity::require_admin},
        },
        error::Error,
        model::{app::AppState, session::flash::SessionFlash},
        service::catalog::state::StateService,
    },
};

/// List states for management
///
/// # Responses
/// - 200 (OK): Every state in insertion order, with pending notifications
/// - 303 (See Other): Anonymous sessions go to `/login`, regular users to `/dashboard`
/// - 500 (Internal Server Error): Database or session error
#[utoipa::path(
    get,
    path = "/admin/states",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "All states", body = StateListPage),
        (status = 303, description = "Not logged in or not an administrator"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_states(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let states = StateService::new(&state.db).list_states().await?;

    Ok(Json(StateListPage {
        flash: SessionFlash::take(&session).await?,
        states: states.into_iter().map(Into::into).collect(),
    }))
}

/// Create a state
///
/// # Responses
/// - 303 (See Other): Redirect to `/admin/states`, with a warning when the name is taken or a
///   field is missing; anonymous sessions and regular users are redirected before the form is
///   read
/// - 500 (Internal Server Error): Database or session error
#[utoipa::path(
    post,
    path = "/admin/states",
    tag = ADMIN_TAG,
    request_body(content = StateForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirect to the state list, also on a duplicate name"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_state(
    State(state): State<AppState>,
    session: Session,
    form: Result<Form<StateForm>, FormRejection>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;
    let form = accept_form(&session, form, "/admin/states").await?;

    let result = StateService::new(&state.db).create_state(&form).await;
    flash_on_err(&session, result).await?;

    SessionFlash::push(&session, FlashLevel::Success, "State added successfully!").await?;

    Ok(Redirect::to("/admin/states"))
}

/// Current values of a state for its edit form
///
/// # Responses
/// - 200 (OK): The state
/// - 303 (See Other): Not logged in or not an administrator
/// - 404 (Not Found): No state with this ID
/// - 500 (Internal Server Error): Database or session error
#[utoipa::path(
    get,
    path = "/admin/state/edit/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "State ID")),
    responses(
        (status = 200, description = "Current state values", body = StatePage),
        (status = 303, description = "Not logged in or not an administrator"),
        (status = 404, description = "State not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit_state_page(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let state_model = StateService::new(&state.db).get_state(id).await?;

    Ok(Json(StatePage {
        flash: SessionFlash::take(&session).await?,
        state: state_model.into(),
    }))
}

/// Update a state
///
/// # Responses
/// - 303 (See Other): Updated, redirect to `/admin/states`; an incomplete form returns to the
///   edit page and a taken name to the state list, both with a warning
/// - 404 (Not Found): No state with this ID
/// - 500 (Internal Server Error): Database or session error
#[utoipa::path(
    post,
    path = "/admin/state/edit/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "State ID")),
    request_body(content = StateForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirect to the state list"),
        (status = 404, description = "State not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_state(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    form: Result<Form<StateForm>, FormRejection>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;
    let form = accept_form(&session, form, &format!("/admin/state/edit/{}", id)).await?;

    let result = StateService::new(&state.db).update_state(id, &form).await;
    flash_on_err(&session, result).await?;

    SessionFlash::push(&session, FlashLevel::Success, "State updated successfully!").await?;

    Ok(Redirect::to("/admin/states"))
}

/// Delete a state along with all of its cities
///
/// # Responses
/// - 303 (See Other): Deleted, redirect to `/admin/states`
/// - 404 (Not Found): No state with this ID
/// - 500 (Internal Server Error): Database or session error
#[utoipa::path(
    get,
    path = "/admin/state/delete/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "State ID")),
    responses(
        (status = 303, description = "Redirect to the state list"),
        (status = 404, description = "State not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_state(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    StateService::new(&state.db).delete_state(id).await?;

    SessionFlash::push(&session, FlashLevel::Success, "State deleted successfully.").await?;

    Ok(Redirect::to("/admin/states"))
}
