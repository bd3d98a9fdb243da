use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public view of a user account.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            is_admin: user.is_admin,
        }
    }
}

/// Login form submitted to `POST /login`
#[derive(Deserialize, ToSchema)]
pub struct LoginForm {
    pub email: String,
    #[serde(alias = "password")]
    pub credential: String,
}

/// Registration form submitted to `POST /register`
#[derive(Deserialize, ToSchema)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    #[serde(alias = "password")]
    pub credential: String,
}
