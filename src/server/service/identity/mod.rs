//! Identity service layer.
//!
//! Registration, credential checks and the first-run administrator account. Emails are
//! normalized (trimmed, lowercased) before every lookup and insert so that uniqueness and the
//! reserved administrator address are enforced regardless of case.

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{is_unique_violation, user::UserRepository},
    error::{auth::AuthError, Error},
    model::db::UserModel,
    util::password::{hash_credential, verify_credential},
};

/// Email of the administrator account, it can never be used for registration.
pub const RESERVED_ADMIN_EMAIL: &str = "admin@gmail.com";

/// Display name of the administrator account.
pub const ADMIN_NAME: &str = "Admin";

/// Credential given to the administrator account when none is configured.
pub const DEFAULT_ADMIN_PASSWORD: &str = "Admin@123";

/// Canonical form of an email used for storage and lookups.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Service for user registration and authentication.
pub struct IdentityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IdentityService<'a> {
    /// Creates a new instance of [`IdentityService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new non-admin user.
    ///
    /// # Arguments
    /// - `name` - Display name
    /// - `email` - Login email, normalized before use
    /// - `credential` - Raw credential, only its Argon2 hash is stored
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The created user
    /// - `Err(AuthError::ReservedEmail)` - Email is the administrator address
    /// - `Err(AuthError::DuplicateEmail)` - Email already belongs to a user
    /// - `Err(Error)` - Database or hashing failure
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        credential: &str,
    ) -> Result<UserModel, Error> {
        let email = normalize_email(email);

        if email == RESERVED_ADMIN_EMAIL {
            return Err(AuthError::ReservedEmail.into());
        }

        let user_repo = UserRepository::new(self.db);

        if user_repo.get_by_email(&email).await?.is_some() {
            return Err(AuthError::DuplicateEmail.into());
        }

        let password_hash = hash_credential(credential)?;

        // The unique index still catches a concurrent registration of the same email
        let user = match user_repo
            .create(name.trim(), &email, &password_hash, false)
            .await
        {
            Ok(user) => user,
            Err(e) if is_unique_violation(&e) => return Err(AuthError::DuplicateEmail.into()),
            Err(e) => return Err(e.into()),
        };

        tracing::info!(user_id = %user.id, "Registered new user");

        Ok(user)
    }

    /// Resolves a login attempt.
    ///
    /// # Returns
    /// - `Ok(UserModel)` - A user with this email exists and the credential matches
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong credential
    /// - `Err(Error)` - Database failure
    pub async fn authenticate(&self, email: &str, credential: &str) -> Result<UserModel, Error> {
        let email = normalize_email(email);

        let Some(user) = UserRepository::new(self.db).get_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_credential(&user.password_hash, credential) {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    /// Ensures the administrator account exists.
    ///
    /// Idempotent: only creates the account when no user holds the reserved email.
    ///
    /// # Arguments
    /// - `credential` - Credential for the account if it has to be created
    ///
    /// # Returns
    /// - `Ok(true)` - The administrator account was created
    /// - `Ok(false)` - The administrator account already existed
    pub async fn bootstrap_admin(&self, credential: &str) -> Result<bool, Error> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.get_by_email(RESERVED_ADMIN_EMAIL).await?.is_some() {
            tracing::info!("Admin user already exists");

            return Ok(false);
        }

        tracing::info!("Creating admin user");

        let password_hash = hash_credential(credential)?;

        match user_repo
            .create(ADMIN_NAME, RESERVED_ADMIN_EMAIL, &password_hash, true)
            .await
        {
            Ok(admin) => {
                tracing::info!(user_id = %admin.id, "Admin user created successfully");

                Ok(true)
            }
            // Another instance created it between our check and insert
            Err(e) if is_unique_violation(&e) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Gets a user by ID
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserModel>, Error> {
        Ok(UserRepository::new(self.db).get_by_id(user_id).await?)
    }
}
