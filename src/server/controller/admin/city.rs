//! City management, nested under the parent state.

use axum::{
    extract::{rejection::FormRejection, Path, State},
    response::{IntoResponse, Redirect},
    Form, Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, FlashLevel},
        catalog::CityForm,
        page::{CityPage, StateDetailPage},
    },
    server::{
        controller::{
            admin::ADMIN_TAG,
            util::{form::accept_form, identity::require_admin},
        },
        error::Error,
        model::{app::AppState, session::flash::SessionFlash},
        service::catalog::{city::CityService, state::StateService},
    },
};

fn city_list_url(state_id: i32) -> String {
    format!("/admin/state/{}/cities", state_id)
}

/// List the cities of a state for management
///
/// # Responses
/// - 200 (OK): The state and its cities
/// - 303 (See Other): Not logged in or not an administrator
/// - 404 (Not Found): No state with this ID
/// - 500 (Internal Server Error): Database or session error
#[utoipa::path(
    get,
    path = "/admin/state/{state_id}/cities",
    tag = ADMIN_TAG,
    params(("state_id" = i32, Path, description = "Parent state ID")),
    responses(
        (status = 200, description = "State with its cities", body = StateDetailPage),
        (status = 303, description = "Not logged in or not an administrator"),
        (status = 404, description = "State not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_cities(
    State(state): State<AppState>,
    session: Session,
    Path(state_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let (state_model, cities) = StateService::new(&state.db)
        .get_state_with_cities(state_id)
        .await?;

    Ok(Json(StateDetailPage {
        flash: SessionFlash::take(&session).await?,
        state: state_model.into(),
        cities: cities.into_iter().map(Into::into).collect(),
    }))
}

/// Create a city under a state
///
/// # Responses
/// - 303 (See Other): Created, or the form was incomplete; either way back to the state's city
///   list
/// - 404 (Not Found): No state with this ID
/// - 500 (Internal Server Error): Database or session error
#[utoipa::path(
    post,
    path = "/admin/state/{state_id}/cities",
    tag = ADMIN_TAG,
    params(("state_id" = i32, Path, description = "Parent state ID")),
    request_body(content = CityForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirect to the state's city list"),
        (status = 404, description = "State not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_city(
    State(state): State<AppState>,
    session: Session,
    Path(state_id): Path<i32>,
    form: Result<Form<CityForm>, FormRejection>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;
    let form = accept_form(&session, form, &city_list_url(state_id)).await?;

    CityService::new(&state.db)
        .create_city(state_id, &form)
        .await?;

    SessionFlash::push(&session, FlashLevel::Success, "City added successfully!").await?;

    Ok(Redirect::to(&city_list_url(state_id)))
}

/// Current values of a city for its edit form
///
/// # Responses
/// - 200 (OK): The city
/// - 303 (See Other): Not logged in or not an administrator
/// - 404 (Not Found): No city with this ID
/// - 500 (Internal Server Error): Database or session error
#[utoipa::path(
    get,
    path = "/admin/city/edit/{city_id}",
    tag = ADMIN_TAG,
    params(("city_id" = i32, Path, description = "City ID")),
    responses(
        (status = 200, description = "Current city values", body = CityPage),
        (status = 303, description = "Not logged in or not an administrator"),
        (status = 404, description = "City not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit_city_page(
    State(state): State<AppState>,
    session: Session,
    Path(city_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let city = CityService::new(&state.db).get_city(city_id).await?;

    Ok(Json(CityPage {
        flash: SessionFlash::take(&session).await?,
        city: city.into(),
    }))
}

/// Update a city
///
/// # Responses
/// - 303 (See Other): Updated, redirect to the parent state's city list; an incomplete form
///   returns to the edit page
/// - 404 (Not Found): No city with this ID
/// - 500 (Internal Server Error): Database or session error
#[utoipa::path(
    post,
    path = "/admin/city/edit/{city_id}",
    tag = ADMIN_TAG,
    params(("city_id" = i32, Path, description = "City ID")),
    request_body(content = CityForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirect to the parent state's city list"),
        (status = 404, description = "City not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_city(
    State(state): State<AppState>,
    session: Session,
    Path(city_id): Path<i32>,
    form: Result<Form<CityForm>, FormRejection>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;
    let form = accept_form(&session, form, &format!("/admin/city/edit/{}", city_id)).await?;

    let city = CityService::new(&state.db)
        .update_city(city_id, &form)
        .await?;

    SessionFlash::push(&session, FlashLevel::Success, "City updated successfully!").await?;

    Ok(Redirect::to(&city_list_url(city.state_id)))
}

/// Delete a city
///
/// # Responses
/// - 303 (See Other): Deleted, redirect to the former parent state's city list
/// - 404 (Not Found): No city with this ID
/// - 500 (Internal Server Error): Database or session error
#[utoipa::path(
    get,
    path = "/admin/city/delete/{city_id}",
    tag = ADMIN_TAG,
    params(("city_id" = i32, Path, description = "City ID")),
    responses(
        (status = 303, description = "Redirect to the former parent state's city list"),
        (status = 404, description = "City not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_city(
    State(state): State<AppState>,
    session: Session,
    Path(city_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let city = CityService::new(&state.db).delete_city(city_id).await?;

    SessionFlash::push(&session, FlashLevel::Success, "City deleted successfully.").await?;

    Ok(Redirect::to(&city_list_url(city.state_id)))
}
