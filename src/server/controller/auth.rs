//! Login, registration and logout.

use axum::{
    extract::{rejection::FormRejection, State},
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, FlashLevel},
        page::FormPage,
        user::{LoginForm, RegisterForm},
    },
    server::{
        controller::util::{
            flash::flash_on_err,
            form::accept_form,
            identity::{current_identity, landing_for, login_user, require_authenticated},
        },
        error::Error,
        model::{app::AppState, session::flash::SessionFlash},
        service::identity::IdentityService,
    },
};

/// OpenAPI tag for the authentication endpoints
pub static AUTH_TAG: &str = "auth";

/// Login form
///
/// A user who is already logged in is sent to their landing page instead.
///
/// # Responses
/// - 200 (OK): Pending notifications for the form
/// - 303 (See Other): Already logged in
/// - 500 (Internal Server Error): Database or session error
#[utoipa::path(
    get,
    path = "/login",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Login form", body = FormPage),
        (status = 303, description = "Already logged in, redirect to landing page"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, Error> {
    if let Some(user) = current_identity(&state, &session).await? {
        return Ok(Redirect::to(landing_for(&user)).into_response());
    }

    Ok(Json(FormPage {
        flash: SessionFlash::take(&session).await?,
    })
    .into_response())
}

/// Authenticate with email & credential
///
/// # Responses
/// - 303 (See Other): Logged in, redirect to `/admin` for the administrator or `/dashboard`
///   otherwise; on bad credentials or an incomplete form redirect back to `/login` with a
///   notification
/// - 500 (Internal Server Error): Database or session error
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirect to landing page, or back to the login form on failure"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Result<impl IntoResponse, Error> {
    if let Some(user) = current_identity(&state, &session).await? {
        return Ok(Redirect::to(landing_for(&user)));
    }
    let form = accept_form(&session, form, "/login").await?;

    let result = IdentityService::new(&state.db)
        .authenticate(&form.email, &form.credential)
        .await;
    let user = flash_on_err(&session, result).await?;

    login_user(&session, &user).await?;
    SessionFlash::push(&session, FlashLevel::Success, "Logged in successfully!").await?;

    Ok(Redirect::to(landing_for(&user)))
}

/// Registration form
///
/// # Responses
/// - 200 (OK): Pending notifications for the form
/// - 303 (See Other): Already logged in, redirect to the landing page
/// - 500 (Internal Server Error): Database or session error
#[utoipa::path(
    get,
    path = "/register",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Registration form", body = FormPage),
        (status = 303, description = "Already logged in, redirect to landing page"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, Error> {
    if let Some(user) = current_identity(&state, &session).await? {
        return Ok(Redirect::to(landing_for(&user)).into_response());
    }

    Ok(Json(FormPage {
        flash: SessionFlash::take(&session).await?,
    })
    .into_response())
}

/// Register a new user account
///
/// # Responses
/// - 303 (See Other): Account created, redirect to `/login`; on a duplicate or reserved email
///   or an incomplete form redirect back to `/register` with a notification
/// - 500 (Internal Server Error): Database, session or hashing error
#[utoipa::path(
    post,
    path = "/register",
    tag = AUTH_TAG,
    request_body(content = RegisterForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirect to the login form, or back to the registration form on failure"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    form: Result<Form<RegisterForm>, FormRejection>,
) -> Result<impl IntoResponse, Error> {
    if let Some(user) = current_identity(&state, &session).await? {
        return Ok(Redirect::to(landing_for(&user)));
    }
    let form = accept_form(&session, form, "/register").await?;

    let result = IdentityService::new(&state.db)
        .register(&form.name, &form.email, &form.credential)
        .await;
    flash_on_err(&session, result).await?;

    SessionFlash::push(
        &session,
        FlashLevel::Success,
        "Account created successfully! Please log in.",
    )
    .await?;

    Ok(Redirect::to("/login"))
}

/// Logs the user out by clearing their session
///
/// # Responses
/// - 303 (See Other): Logged out, redirect to `/`; anonymous sessions are sent to `/login`
/// - 500 (Internal Server Error): There was an issue with the session
#[utoipa::path(
    get,
    path = "/logout",
    tag = AUTH_TAG,
    responses(
        (status = 303, description = "Redirect to the home page"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = require_authenticated(&state, &session).await?;

    session.clear().await;
    SessionFlash::push(&session, FlashLevel::Info, "You have been logged out.").await?;

    tracing::info!(user_id = %user.id, "User logged out");

    Ok(Redirect::to("/"))
}
