//! Flash notifications for errors that redirect.

use tower_sessions::Session;

use crate::server::{error::Error, model::session::flash::SessionFlash};

/// Queues the error's notification, if it has one, before handing the result back
///
/// Redirecting errors lose their message once the response is sent, so the notification is
/// stored in the session for the page the user is redirected to.
///
/// # Returns
/// - `Ok(T)` - The original success value, nothing is queued
/// - `Err(Error)` - The original error, or a session error if queueing failed
pub async fn flash_on_err<T>(session: &Session, result: Result<T, Error>) -> Result<T, Error> {
    match result {
        Ok(value) => Ok(value),
        Err(err) => {
            if let Some((level, message)) = err.flash() {
                SessionFlash::push(session, level, message).await?;
            }

            Err(err)
        }
    }
}
