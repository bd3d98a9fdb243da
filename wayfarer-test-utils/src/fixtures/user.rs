use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::UserModel, TestSetup};

/// Email of the administrator account created by [`UserFixtures::insert_admin`].
pub const ADMIN_EMAIL: &str = "admin@gmail.com";

/// Stored credential hash for fixture users, it matches no credential.
pub const PLACEHOLDER_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$fixture$fixture";

impl TestSetup {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> UserFixtures<'a> {
    pub async fn insert_user(
        &self,
        name: &str,
        email: &str,
        is_admin: bool,
    ) -> Result<UserModel, TestError> {
        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            email: ActiveValue::Set(email.to_string()),
            password_hash: ActiveValue::Set(PLACEHOLDER_HASH.to_string()),
            is_admin: ActiveValue::Set(is_admin),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }

    pub async fn insert_admin(&self) -> Result<UserModel, TestError> {
        self.insert_user("Admin", ADMIN_EMAIL, true).await
    }
}
