//! Form extraction that defers rejections until the identity gates have run.

use axum::{extract::rejection::FormRejection, Form};
use tower_sessions::Session;

use crate::server::{
    controller::util::flash::flash_on_err,
    error::{form::FormError, Error},
};

/// Unwraps a submitted form, or sends the user back to `redirect` with a warning
///
/// Handlers extract `Result<Form<T>, FormRejection>` so that their identity gates run before a
/// malformed body is looked at.
pub async fn accept_form<T>(
    session: &Session,
    form: Result<Form<T>, FormRejection>,
    redirect: &str,
) -> Result<T, Error> {
    let result = form.map(|Form(value)| value).map_err(|rejection| {
        Error::from(FormError::Incomplete {
            redirect: redirect.to_string(),
            reason: rejection.body_text(),
        })
    });

    flash_on_err(session, result).await
}
