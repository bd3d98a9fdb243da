//! Session identity resolution and the authentication and administrator gates.

use tower_sessions::Session;

use crate::server::{
    controller::util::flash::flash_on_err,
    error::{auth::AuthError, Error},
    model::{app::AppState, db::UserModel, session::user::SessionUserId},
    service::identity::IdentityService,
};

/// Binds a user to the session, cycling the session ID first
pub async fn login_user(session: &Session, user: &UserModel) -> Result<(), Error> {
    session.cycle_id().await?;

    SessionUserId::bind(session, user.id).await?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(())
}

/// Retrieves the user bound to the session from the database
///
/// # Arguments
/// - `state`: Application state with database connection
/// - `session`: The user's session
///
/// # Returns
/// - `Ok(Some(UserModel))`: User is logged in
/// - `Ok(None)`: No user in session, or the session referenced a user that no longer exists
///   (the session is cleared)
/// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
pub async fn current_identity(
    state: &AppState,
    session: &Session,
) -> Result<Option<UserModel>, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Ok(None);
    };

    let Some(user) = IdentityService::new(&state.db).get_user(user_id).await? else {
        session.clear().await;

        tracing::debug!(
            "{}; cleared session, user will need to log in again",
            AuthError::UserNotInDatabase(user_id)
        );

        return Ok(None);
    };

    Ok(Some(user))
}

/// Requires a logged in user
///
/// # Returns
/// - `Ok(UserModel)`: The logged in user
/// - `Err(AuthError::Unauthenticated)`: No user in session, a notification is queued
pub async fn require_authenticated(state: &AppState, session: &Session) -> Result<UserModel, Error> {
    let result = match current_identity(state, session).await? {
        Some(user) => Ok(user),
        None => Err(AuthError::Unauthenticated.into()),
    };

    flash_on_err(session, result).await
}

/// Requires a logged in administrator
///
/// # Returns
/// - `Ok(UserModel)`: The logged in administrator
/// - `Err(AuthError::Unauthenticated)`: No user in session
/// - `Err(AuthError::Forbidden)`: The logged in user is not an administrator
pub async fn require_admin(state: &AppState, session: &Session) -> Result<UserModel, Error> {
    let user = require_authenticated(state, session).await?;

    if !user.is_admin {
        return Err(AuthError::Forbidden(user.id).into());
    }

    Ok(user)
}

/// Landing page for a logged in user
pub fn landing_for(user: &UserModel) -> &'static str {
    if user.is_admin {
        "/admin"
    } else {
        "/dashboard"
    }
}
