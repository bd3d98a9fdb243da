//! Flash notification session storage.
//!
//! Handlers queue a notification before redirecting; the next page handler drains the
//! queue and hands it to the rendering layer, so each notification is shown exactly once.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::{
    model::api::{FlashDto, FlashLevel},
    server::error::Error,
};

/// Session key for the pending notification queue.
pub const SESSION_FLASH_KEY: &str = "wayfarer:flash";

/// Session wrapper for queued flash notifications.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionFlash(pub Vec<FlashDto>);

impl SessionFlash {
    /// Appends a notification to the session queue.
    ///
    /// # Arguments
    /// - `session` - User's session to store the notification in
    /// - `level` - Severity used by the template to style the message
    /// - `message` - Text shown to the user
    pub async fn push(
        session: &Session,
        level: FlashLevel,
        message: impl Into<String>,
    ) -> Result<(), Error> {
        let mut queue = session
            .get::<SessionFlash>(SESSION_FLASH_KEY)
            .await?
            .unwrap_or_default();

        queue.0.push(FlashDto {
            level,
            message: message.into(),
        });

        session.insert(SESSION_FLASH_KEY, queue).await?;

        Ok(())
    }

    /// Removes and returns every queued notification, oldest first.
    pub async fn take(session: &Session) -> Result<Vec<FlashDto>, Error> {
        Ok(session
            .remove::<SessionFlash>(SESSION_FLASH_KEY)
            .await?
            .map(|SessionFlash(queue)| queue)
            .unwrap_or_default())
    }
}
