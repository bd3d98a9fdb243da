//! Unsaved model factories.

use chrono::{DateTime, NaiveDateTime};

use crate::model::{CityModel, StateModel, UserModel};

fn fixed_timestamp() -> NaiveDateTime {
    DateTime::from_timestamp(0, 0).unwrap_or_default().naive_utc()
}

pub fn mock_user_model(id: i32, name: &str, email: &str, is_admin: bool) -> UserModel {
    UserModel {
        id,
        name: name.to_string(),
        email: email.to_string(),
        password_hash: crate::fixtures::user::PLACEHOLDER_HASH.to_string(),
        is_admin,
        created_at: fixed_timestamp(),
    }
}

pub fn mock_state_model(id: i32, name: &str) -> StateModel {
    StateModel {
        id,
        name: name.to_string(),
        description: format!("About {}", name),
        image_reference: format!("{}.png", name.to_lowercase()),
        created_at: fixed_timestamp(),
    }
}

pub fn mock_city_model(id: i32, state_id: i32, name: &str) -> CityModel {
    CityModel {
        id,
        name: name.to_string(),
        description: format!("About {}", name),
        image_reference: format!("{}.png", name.to_lowercase()),
        details: None,
        state_id,
        created_at: fixed_timestamp(),
    }
}
