use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use wayfarer::server::controller::catalog::{city_detail, home, state_detail};

use super::*;

#[tokio::test]
/// Expect every state on the home page
async fn home_lists_states() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    test.catalog().insert_state("Texas").await?;
    test.catalog().insert_state("Ohio").await?;

    let resp = respond(home(State(test.state()), test.session.clone()).await);

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["states"].as_array().unwrap().len(), 2);
    assert!(body["flash"].as_array().unwrap().is_empty());

    Ok(())
}

#[tokio::test]
/// Expect the state detail page to list only that state's cities
async fn state_detail_lists_own_cities() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let texas = test.catalog().insert_state("Texas").await?;
    let ohio = test.catalog().insert_state("Ohio").await?;
    test.catalog().insert_city(texas.id, "Austin").await?;
    test.catalog().insert_city(ohio.id, "Columbus").await?;

    let resp = respond(
        state_detail(State(test.state()), test.session.clone(), Path(texas.id)).await,
    );

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["state"]["name"], "Texas");
    let cities = body["cities"].as_array().unwrap();
    assert_eq!(cities.len(), 1);
    assert_eq!(cities[0]["name"], "Austin");

    Ok(())
}

#[tokio::test]
/// Expect 404 for an unknown state
async fn state_detail_not_found() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let resp = respond(state_detail(State(test.state()), test.session.clone(), Path(1)).await);

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect the city detail page to carry the parent state
async fn city_detail_includes_state() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let texas = test.catalog().insert_state("Texas").await?;
    let austin = test.catalog().insert_city(texas.id, "Austin").await?;

    let resp = respond(city_detail(State(test.state()), test.session.clone(), Path(austin.id)).await);

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["city"]["name"], "Austin");
    assert_eq!(body["city"]["stateId"], texas.id);
    assert_eq!(body["state"]["name"], "Texas");

    Ok(())
}

#[tokio::test]
/// Expect 404 for an unknown city
async fn city_detail_not_found() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let resp = respond(city_detail(State(test.state()), test.session.clone(), Path(1)).await);

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
