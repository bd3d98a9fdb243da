//! Public catalog pages, readable without logging in.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        page::{CityDetailPage, StateDetailPage, StateListPage},
    },
    server::{
        error::Error,
        model::{app::AppState, session::flash::SessionFlash},
        service::catalog::{city::CityService, state::StateService},
    },
};

/// OpenAPI tag for the public catalog
pub static CATALOG_TAG: &str = "catalog";

/// List all states
///
/// # Responses
/// - 200 (OK): Every state in insertion order
/// - 500 (Internal Server Error): Database or session error
#[utoipa::path(
    get,
    path = "/",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "All states", body = StateListPage),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn home(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let states = StateService::new(&state.db).list_states().await?;

    Ok(Json(StateListPage {
        flash: SessionFlash::take(&session).await?,
        states: states.into_iter().map(Into::into).collect(),
    }))
}

/// Show a state and its cities
///
/// # Responses
/// - 200 (OK): The state and its cities
/// - 404 (Not Found): No state with this ID
/// - 500 (Internal Server Error): Database or session error
#[utoipa::path(
    get,
    path = "/state/{state_id}",
    tag = CATALOG_TAG,
    params(("state_id" = i32, Path, description = "State ID")),
    responses(
        (status = 200, description = "State with its cities", body = StateDetailPage),
        (status = 404, description = "State not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn state_detail(
    State(state): State<AppState>,
    session: Session,
    Path(state_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let (state_model, cities) = StateService::new(&state.db)
        .get_state_with_cities(state_id)
        .await?;

    Ok(Json(StateDetailPage {
        flash: SessionFlash::take(&session).await?,
        state: state_model.into(),
        cities: cities.into_iter().map(Into::into).collect(),
    }))
}

/// Show a city and its parent state
///
/// # Responses
/// - 200 (OK): The city and its state
/// - 404 (Not Found): No city with this ID
/// - 500 (Internal Server Error): Database or session error
#[utoipa::path(
    get,
    path = "/city/{city_id}",
    tag = CATALOG_TAG,
    params(("city_id" = i32, Path, description = "City ID")),
    responses(
        (status = 200, description = "City with its parent state", body = CityDetailPage),
        (status = 404, description = "City not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn city_detail(
    State(state): State<AppState>,
    session: Session,
    Path(city_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let (city, state_model) = CityService::new(&state.db)
        .get_city_with_state(city_id)
        .await?;

    Ok(Json(CityDetailPage {
        flash: SessionFlash::take(&session).await?,
        city: city.into(),
        state: state_model.into(),
    }))
}
