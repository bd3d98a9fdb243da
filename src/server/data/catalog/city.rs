//! City persistence.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::catalog::CityForm;

/// Queries and mutations on the `city` table.
pub struct CityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CityRepository<'a, C> {
    /// Creates a new instance of [`CityRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new city under the provided state
    ///
    /// Fails with a foreign key violation if the state does not exist.
    pub async fn create(
        &self,
        state_id: i32,
        form: &CityForm,
    ) -> Result<entity::city::Model, DbErr> {
        let city = entity::city::ActiveModel {
            name: ActiveValue::Set(form.name.clone()),
            description: ActiveValue::Set(form.description.clone()),
            image_reference: ActiveValue::Set(form.image_reference.clone()),
            details: ActiveValue::Set(form.details()),
            state_id: ActiveValue::Set(state_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        city.insert(self.db).await
    }

    /// Looks up a city by ID
    pub async fn get_by_id(&self, city_id: i32) -> Result<Option<entity::city::Model>, DbErr> {
        entity::prelude::City::find_by_id(city_id).one(self.db).await
    }

    /// Gets a city together with its parent state
    pub async fn get_with_state(
        &self,
        city_id: i32,
    ) -> Result<Option<(entity::city::Model, Option<entity::state::Model>)>, DbErr> {
        entity::prelude::City::find_by_id(city_id)
            .find_also_related(entity::prelude::State)
            .one(self.db)
            .await
    }

    /// Returns the cities of a state in insertion order
    pub async fn get_by_state_id(&self, state_id: i32) -> Result<Vec<entity::city::Model>, DbErr> {
        entity::prelude::City::find()
            .filter(entity::city::Column::StateId.eq(state_id))
            .order_by_asc(entity::city::Column::Id)
            .all(self.db)
            .await
    }

    /// Overwrites every editable field of a city, the parent state is left unchanged
    ///
    /// Returns `Ok(None)` if the city does not exist.
    pub async fn update(
        &self,
        city_id: i32,
        form: &CityForm,
    ) -> Result<Option<entity::city::Model>, DbErr> {
        let city = match entity::prelude::City::find_by_id(city_id)
            .one(self.db)
            .await?
        {
            Some(city) => city,
            None => return Ok(None),
        };

        let mut city_am = city.into_active_model();
        city_am.name = ActiveValue::Set(form.name.clone());
        city_am.description = ActiveValue::Set(form.description.clone());
        city_am.image_reference = ActiveValue::Set(form.image_reference.clone());
        city_am.details = ActiveValue::Set(form.details());

        let city = city_am.update(self.db).await?;

        Ok(Some(city))
    }

    /// Deletes a city
    ///
    /// Returns OK regardless of city existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, city_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::City::delete_by_id(city_id)
            .exec(self.db)
            .await
    }

    /// Deletes every city belonging to a state
    pub async fn delete_by_state_id(&self, state_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::City::delete_many()
            .filter(entity::city::Column::StateId.eq(state_id))
            .exec(self.db)
            .await
    }
}
