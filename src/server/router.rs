//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All endpoints are registered here with their OpenAPI specifications, and
//! Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all endpoints and Swagger UI documentation.
///
/// Each endpoint is annotated with OpenAPI specifications via utoipa, which are collected into
/// a unified OpenAPI document. GET and POST handlers of the same path are registered together.
///
/// # Registered Endpoints
/// - `GET /` - List states
/// - `GET /state/{state_id}` - State with its cities
/// - `GET /city/{city_id}` - City with its parent state
/// - `GET|POST /login` - Login form & authentication
/// - `GET|POST /register` - Registration form & account creation
/// - `GET /logout` - Logout current user
/// - `GET /dashboard` - Regular user landing page
/// - `GET /admin` - Administrator landing page
/// - `GET|POST /admin/states` - List & create states
/// - `GET|POST /admin/state/edit/{id}` - Edit a state
/// - `GET /admin/state/delete/{id}` - Delete a state and its cities
/// - `GET|POST /admin/state/{state_id}/cities` - List & create cities of a state
/// - `GET|POST /admin/city/edit/{city_id}` - Edit a city
/// - `GET /admin/city/delete/{city_id}` - Delete a city
///
/// # OpenAPI Documentation
/// The OpenAPI specification is available at `/api/docs/openapi.json`, Swagger UI is served at
/// `/api/docs`.
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready to have the application state
/// and session layer applied.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db }).layer(session);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Wayfarer", description = "Wayfarer travel catalog"), tags(
        (name = controller::catalog::CATALOG_TAG, description = "Public catalog pages"),
        (name = controller::auth::AUTH_TAG, description = "Login, registration & logout"),
        (name = controller::user::USER_TAG, description = "Regular user pages"),
        (name = controller::admin::ADMIN_TAG, description = "Administrator catalog management"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::catalog::home))
        .routes(routes!(controller::catalog::state_detail))
        .routes(routes!(controller::catalog::city_detail))
        .routes(routes!(
            controller::auth::login_page,
            controller::auth::login
        ))
        .routes(routes!(
            controller::auth::register_page,
            controller::auth::register
        ))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::user::dashboard))
        .routes(routes!(controller::admin::admin_panel))
        .routes(routes!(
            controller::admin::state::list_states,
            controller::admin::state::create_state
        ))
        .routes(routes!(
            controller::admin::state::edit_state_page,
            controller::admin::state::update_state
        ))
        .routes(routes!(controller::admin::state::delete_state))
        .routes(routes!(
            controller::admin::city::list_cities,
            controller::admin::city::create_city
        ))
        .routes(routes!(
            controller::admin::city::edit_city_page,
            controller::admin::city::update_city
        ))
        .routes(routes!(controller::admin::city::delete_city))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
