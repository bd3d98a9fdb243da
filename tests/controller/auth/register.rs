use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    Form,
};
use sea_orm::EntityTrait;
use wayfarer::{
    model::user::RegisterForm,
    server::{
        controller::auth::{register, register_page},
        model::session::flash::SessionFlash,
    },
};

use super::*;

fn register_form(email: &str) -> Result<Form<RegisterForm>, FormRejection> {
    Ok(Form(RegisterForm {
        name: "Alice".to_string(),
        email: email.to_string(),
        credential: "hunter2".to_string(),
    }))
}

#[tokio::test]
/// Expect a new account and a redirect to the login form
async fn registers_new_user() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;

    let resp = respond(
        register(
            State(test.state()),
            test.session.clone(),
            register_form("alice@example.com"),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/login");
    let users = entity::prelude::User::find().all(&test.state.db).await?;
    assert_eq!(users.len(), 1);
    assert!(!users[0].is_admin);
    let flash = SessionFlash::take(&test.session).await.unwrap();
    assert_eq!(flash[0].message, "Account created successfully! Please log in.");

    Ok(())
}

#[tokio::test]
/// Expect the reserved administrator email to be rejected in any case
async fn rejects_reserved_email() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;

    let resp = respond(
        register(
            State(test.state()),
            test.session.clone(),
            register_form("Admin@Gmail.com"),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/register");
    assert!(entity::prelude::User::find()
        .all(&test.state.db)
        .await?
        .is_empty());
    let flash = SessionFlash::take(&test.session).await.unwrap();
    assert_eq!(
        flash[0].message,
        "This email is reserved for administrative use."
    );

    Ok(())
}

#[tokio::test]
/// Expect a registered email to be rejected
async fn rejects_duplicate_email() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    test.user().insert_user("Alice", "alice@example.com", false).await?;

    let resp = respond(
        register(
            State(test.state()),
            test.session.clone(),
            register_form("alice@example.com"),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/register");
    let flash = SessionFlash::take(&test.session).await.unwrap();
    assert_eq!(flash[0].message, "Email address already registered.");

    Ok(())
}

#[tokio::test]
/// Expect the logged in administrator to skip the registration form
async fn register_page_redirects_logged_in_admin() -> Result<(), TestError> {
    let test = test_setup_with_user_tables!()?;
    let admin = test.user().insert_admin().await?;
    login_as(&test.session, &admin).await;

    let resp = respond(register_page(State(test.state()), test.session.clone()).await);

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/admin");

    Ok(())
}
