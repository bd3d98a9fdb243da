//! Regular users and anonymous visitors never reach the catalog mutations.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Form,
};
use sea_orm::EntityTrait;
use wayfarer::server::controller::admin::{admin_panel, city, state};
use wayfarer_test_utils::TestSetup;

use super::*;

/// Runs every mutating admin handler and collects the redirect targets
async fn attempt_all_mutations(test: &TestSetup, state_id: i32, city_id: i32) -> Vec<String> {
    let responses = vec![
        respond(
            state::create_state(
                State(test.state()),
                test.session.clone(),
                Ok(Form(state_form("Ohio", "desc", "oh.png"))),
            )
            .await,
        ),
        respond(
            state::update_state(
                State(test.state()),
                test.session.clone(),
                Path(state_id),
                Ok(Form(state_form("Renamed", "desc", "tx.png"))),
            )
            .await,
        ),
        respond(state::delete_state(State(test.state()), test.session.clone(), Path(state_id)).await),
        respond(
            city::create_city(
                State(test.state()),
                test.session.clone(),
                Path(state_id),
                Ok(Form(city_form("Dallas"))),
            )
            .await,
        ),
        respond(
            city::update_city(
                State(test.state()),
                test.session.clone(),
                Path(city_id),
                Ok(Form(city_form("Renamed"))),
            )
            .await,
        ),
        respond(city::delete_city(State(test.state()), test.session.clone(), Path(city_id)).await),
    ];

    responses
        .iter()
        .map(|resp| {
            assert_eq!(resp.status(), StatusCode::SEE_OTHER);

            location(resp)
        })
        .collect()
}

async fn assert_catalog_unchanged(test: &TestSetup) -> Result<(), TestError> {
    let states = entity::prelude::State::find().all(&test.state.db).await?;
    let cities = entity::prelude::City::find().all(&test.state.db).await?;

    assert_eq!(states.len(), 1);
    assert_eq!(states[0].name, "Texas");
    assert_eq!(cities.len(), 1);
    assert_eq!(cities[0].name, "Austin");

    Ok(())
}

#[tokio::test]
/// Expect a regular user to be redirected to the dashboard without any mutation
async fn regular_user_never_mutates() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let texas = test.catalog().insert_state("Texas").await?;
    let austin = test.catalog().insert_city(texas.id, "Austin").await?;
    let user = test.user().insert_user("Alice", "alice@example.com", false).await?;
    login_as(&test.session, &user).await;

    let targets = attempt_all_mutations(&test, texas.id, austin.id).await;

    assert!(targets.iter().all(|target| target == "/dashboard"));
    assert_catalog_unchanged(&test).await?;

    Ok(())
}

#[tokio::test]
/// Expect an anonymous visitor to be redirected to the login form without any mutation
async fn anonymous_never_mutates() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let texas = test.catalog().insert_state("Texas").await?;
    let austin = test.catalog().insert_city(texas.id, "Austin").await?;

    let targets = attempt_all_mutations(&test, texas.id, austin.id).await;

    assert!(targets.iter().all(|target| target == "/login"));
    assert_catalog_unchanged(&test).await?;

    Ok(())
}

#[tokio::test]
/// Expect the admin pages to be hidden from a regular user
async fn regular_user_cannot_view_admin_pages() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let texas = test.catalog().insert_state("Texas").await?;
    let user = test.user().insert_user("Alice", "alice@example.com", false).await?;
    login_as(&test.session, &user).await;

    let responses = vec![
        respond(admin_panel(State(test.state()), test.session.clone()).await),
        respond(state::list_states(State(test.state()), test.session.clone()).await),
        respond(state::edit_state_page(State(test.state()), test.session.clone(), Path(texas.id)).await),
        respond(city::list_cities(State(test.state()), test.session.clone(), Path(texas.id)).await),
    ];

    for resp in responses {
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/dashboard");
    }

    Ok(())
}

#[tokio::test]
/// Expect the administrator to reach the admin panel
async fn admin_views_panel() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let admin = test.user().insert_admin().await?;
    login_as(&test.session, &admin).await;

    let resp = respond(admin_panel(State(test.state()), test.session.clone()).await);

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["user"]["isAdmin"], true);

    Ok(())
}
