//! State persistence.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, ModelTrait, QueryFilter, QueryOrder,
};

use crate::model::catalog::StateForm;

/// Queries and mutations on the `state` table.
pub struct StateRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StateRepository<'a, C> {
    /// Creates a new instance of [`StateRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new state
    pub async fn create(&self, form: &StateForm) -> Result<entity::state::Model, DbErr> {
        let state = entity::state::ActiveModel {
            name: ActiveValue::Set(form.name.clone()),
            description: ActiveValue::Set(form.description.clone()),
            image_reference: ActiveValue::Set(form.image_reference.clone()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        state.insert(self.db).await
    }

    /// Returns all states in insertion order
    pub async fn get_all(&self) -> Result<Vec<entity::state::Model>, DbErr> {
        entity::prelude::State::find()
            .order_by_asc(entity::state::Column::Id)
            .all(self.db)
            .await
    }

    /// Looks up a state by ID
    pub async fn get_by_id(&self, state_id: i32) -> Result<Option<entity::state::Model>, DbErr> {
        entity::prelude::State::find_by_id(state_id)
            .one(self.db)
            .await
    }

    /// Looks up a state by its exact name
    pub async fn get_by_name(&self, name: &str) -> Result<Option<entity::state::Model>, DbErr> {
        entity::prelude::State::find()
            .filter(entity::state::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Gets a state together with all of its cities
    pub async fn get_with_cities(
        &self,
        state_id: i32,
    ) -> Result<Option<(entity::state::Model, Vec<entity::city::Model>)>, DbErr> {
        let Some(state) = self.get_by_id(state_id).await? else {
            return Ok(None);
        };

        let cities = state
            .find_related(entity::prelude::City)
            .order_by_asc(entity::city::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some((state, cities)))
    }

    /// Overwrites every editable field of a state
    ///
    /// Returns `Ok(None)` if the state does not exist.
    pub async fn update(
        &self,
        state_id: i32,
        form: &StateForm,
    ) -> Result<Option<entity::state::Model>, DbErr> {
        let state = match entity::prelude::State::find_by_id(state_id)
            .one(self.db)
            .await?
        {
            Some(state) => state,
            None => return Ok(None),
        };

        let mut state_am = state.into_active_model();
        state_am.name = ActiveValue::Set(form.name.clone());
        state_am.description = ActiveValue::Set(form.description.clone());
        state_am.image_reference = ActiveValue::Set(form.image_reference.clone());

        let state = state_am.update(self.db).await?;

        Ok(Some(state))
    }

    /// Deletes a state row
    ///
    /// Cities are not touched here, see `StateService::delete_state` for the cascading
    /// delete. Returns OK regardless of the state existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, state_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::State::delete_by_id(state_id)
            .exec(self.db)
            .await
    }
}
