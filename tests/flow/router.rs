//! Requests through the full router with a session layer attached.

use axum::{
    body::Body,
    http::{
        header::{CONTENT_TYPE, LOCATION},
        Request, StatusCode,
    },
    Router,
};
use sea_orm::EntityTrait;
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};
use wayfarer::server::{
    model::app::AppState, router::routes, service::identity::IdentityService,
};

use super::*;

fn app(test: &TestSetup) -> Router {
    routes()
        .with_state(test.state::<AppState>())
        .layer(SessionManagerLayer::new(MemoryStore::default()))
}

fn post_form(uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
/// Expect the public home page to be served
async fn serves_home_page() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    test.catalog().insert_state("Texas").await?;

    let resp = app(&test)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["states"][0]["name"], "Texas");

    Ok(())
}

#[tokio::test]
/// Expect the OpenAPI document to describe the admin routes
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let resp = app(&test)
        .oneshot(
            Request::builder()
                .uri("/api/docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let doc = json_body(resp).await;
    assert!(doc["paths"]["/admin/state/{state_id}/cities"]["get"].is_object());
    assert!(doc["paths"]["/admin/state/{state_id}/cities"]["post"].is_object());

    Ok(())
}

#[tokio::test]
/// Expect an anonymous form submission to an admin route to be redirected without a state
/// being created
async fn anonymous_admin_post_redirects_to_login() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let resp = app(&test)
        .oneshot(post_form(
            "/admin/states",
            "name=Texas&description=desc&image_filename=tx.png",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()[LOCATION], "/login");
    assert!(test.catalog().insert_state("Texas").await.is_ok());

    Ok(())
}

#[tokio::test]
/// Expect anonymous admin submissions to be sent to the login form even when fields are missing
async fn anonymous_incomplete_admin_post_redirects_to_login() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    for body in ["name=Texas", ""] {
        let resp = app(&test)
            .oneshot(post_form("/admin/states", body))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers()[LOCATION], "/login");
    }
    assert!(entity::prelude::State::find().all(&test.state.db).await?.is_empty());

    Ok(())
}

#[tokio::test]
/// Expect a registration missing the name to return to the registration form
async fn incomplete_registration_returns_to_register() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;

    let resp = app(&test)
        .oneshot(post_form(
            "/register",
            "email=traveler%40example.com&password=hunter2",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()[LOCATION], "/register");
    assert!(entity::prelude::User::find().all(&test.state.db).await?.is_empty());

    Ok(())
}

#[tokio::test]
/// Expect the registration form to accept its credential under the `password` field name
async fn registers_with_password_field() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;

    let resp = app(&test)
        .oneshot(post_form(
            "/register",
            "name=Traveler&email=traveler%40example.com&password=hunter2",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()[LOCATION], "/login");
    let user = IdentityService::new(&test.state.db)
        .authenticate("traveler@example.com", "hunter2")
        .await
        .unwrap();
    assert_eq!(user.name, "Traveler");

    Ok(())
}

#[tokio::test]
/// Expect the login form to accept its credential under the `password` field name
async fn logs_in_with_password_field() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    IdentityService::new(&test.state.db)
        .register("Traveler", "traveler@example.com", "hunter2")
        .await
        .unwrap();

    let resp = app(&test)
        .oneshot(post_form(
            "/login",
            "email=traveler%40example.com&password=hunter2",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()[LOCATION], "/dashboard");

    Ok(())
}
