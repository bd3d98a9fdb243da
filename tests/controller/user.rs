use axum::{extract::State, http::StatusCode};
use wayfarer::server::controller::user::dashboard;

use super::*;

#[tokio::test]
/// Expect the dashboard to show the logged in user's public profile
async fn shows_regular_user_profile() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let user = test.user().insert_user("Alice", "alice@example.com", false).await?;
    login_as(&test.session, &user).await;

    let resp = respond(dashboard(State(test.state()), test.session.clone()).await);

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["user"]["email"], "alice@example.com");
    assert_eq!(body["user"]["isAdmin"], false);
    assert!(body["user"].get("passwordHash").is_none());

    Ok(())
}

#[tokio::test]
/// Expect the administrator to be sent to the admin panel
async fn redirects_admin_to_panel() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let admin = test.user().insert_admin().await?;
    login_as(&test.session, &admin).await;

    let resp = respond(dashboard(State(test.state()), test.session.clone()).await);

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/admin");

    Ok(())
}

#[tokio::test]
/// Expect anonymous visitors to be sent to the login form
async fn redirects_anonymous_to_login() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;

    let resp = respond(dashboard(State(test.state()), test.session.clone()).await);

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/login");

    Ok(())
}
