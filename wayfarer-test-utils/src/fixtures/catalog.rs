use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{CityModel, StateModel},
    TestSetup,
};

impl TestSetup {
    pub fn catalog(&self) -> CatalogFixtures<'_> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> CatalogFixtures<'a> {
    /// Inserts a state with description `"About {name}"` and image `"{name}.png"` (lowercase)
    pub async fn insert_state(&self, name: &str) -> Result<StateModel, TestError> {
        Ok(entity::prelude::State::insert(entity::state::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(format!("About {}", name)),
            image_reference: ActiveValue::Set(format!("{}.png", name.to_lowercase())),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }

    pub async fn insert_city(&self, state_id: i32, name: &str) -> Result<CityModel, TestError> {
        Ok(entity::prelude::City::insert(entity::city::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(format!("About {}", name)),
            image_reference: ActiveValue::Set(format!("{}.png", name.to_lowercase())),
            details: ActiveValue::Set(None),
            state_id: ActiveValue::Set(state_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }
}
