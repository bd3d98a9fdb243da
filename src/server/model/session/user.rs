//! Logged in user tracking.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

/// Session key holding the ID of the logged in user.
pub const SESSION_USER_ID_KEY: &str = "wayfarer:user:id";

/// ID of the user a session is logged in as.
#[derive(Clone, Copy, Deserialize, Serialize, Debug, PartialEq, Eq)]
pub struct SessionUserId(pub i32);

impl SessionUserId {
    /// Binds the session to a user, replacing any previous login
    pub async fn bind(session: &Session, user_id: i32) -> Result<(), Error> {
        session
            .insert(SESSION_USER_ID_KEY, SessionUserId(user_id))
            .await?;

        Ok(())
    }

    /// User ID the session is bound to, `None` for anonymous sessions
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        let user_id = session.get::<SessionUserId>(SESSION_USER_ID_KEY).await?;

        Ok(user_id.map(|SessionUserId(id)| id))
    }
}
