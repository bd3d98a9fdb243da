use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    Form,
};
use wayfarer::{
    model::{api::FlashLevel, user::LoginForm},
    server::{
        controller::auth::{login, login_page},
        model::session::{flash::SessionFlash, user::SessionUserId},
        service::identity::IdentityService,
    },
};

use super::*;

fn login_form(email: &str, credential: &str) -> Result<Form<LoginForm>, FormRejection> {
    Ok(Form(LoginForm {
        email: email.to_string(),
        credential: credential.to_string(),
    }))
}

#[tokio::test]
/// Expect a regular user to be logged in and sent to the dashboard
async fn logs_in_regular_user() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let user = IdentityService::new(&test.state.db)
        .register("Alice", "alice@example.com", "hunter2")
        .await
        .unwrap();

    let resp = respond(
        login(
            State(test.state()),
            test.session.clone(),
            login_form("alice@example.com", "hunter2"),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/dashboard");
    assert_eq!(SessionUserId::get(&test.session).await.unwrap(), Some(user.id));
    let flash = SessionFlash::take(&test.session).await.unwrap();
    assert_eq!(flash[0].level, FlashLevel::Success);
    assert_eq!(flash[0].message, "Logged in successfully!");

    Ok(())
}

#[tokio::test]
/// Expect the administrator to be sent to the admin panel
async fn logs_in_admin() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    IdentityService::new(&test.state.db)
        .bootstrap_admin("Admin@123")
        .await
        .unwrap();

    let resp = respond(
        login(
            State(test.state()),
            test.session.clone(),
            login_form("admin@gmail.com", "Admin@123"),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/admin");

    Ok(())
}

#[tokio::test]
/// Expect a wrong credential to send the user back to the login form with a notification
async fn rejects_wrong_credential() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    IdentityService::new(&test.state.db)
        .register("Alice", "alice@example.com", "hunter2")
        .await
        .unwrap();

    let resp = respond(
        login(
            State(test.state()),
            test.session.clone(),
            login_form("alice@example.com", "wrong"),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/login");
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());
    let flash = SessionFlash::take(&test.session).await.unwrap();
    assert_eq!(
        flash[0].message,
        "Login unsuccessful. Please check email and password."
    );

    Ok(())
}

#[tokio::test]
/// Expect the login form to be served to anonymous visitors with pending notifications
async fn login_page_for_anonymous_visitor() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    SessionFlash::push(&test.session, FlashLevel::Info, "Please log in to access this page.")
        .await
        .unwrap();

    let resp = respond(login_page(State(test.state()), test.session.clone()).await);

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["flash"][0]["level"], "info");

    Ok(())
}

#[tokio::test]
/// Expect a logged in user to skip the login form
async fn login_page_redirects_logged_in_user() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let user = test.user().insert_user("Alice", "alice@example.com", false).await?;
    login_as(&test.session, &user).await;

    let resp = respond(login_page(State(test.state()), test.session.clone()).await);

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/dashboard");

    Ok(())
}
