//! State operations, including the cascading delete.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::catalog::StateForm,
    server::{
        data::{
            catalog::{city::CityRepository, state::StateRepository},
            is_unique_violation,
        },
        error::{catalog::CatalogError, Error},
        model::db::{CityModel, StateModel},
    },
};

/// Service for state operations.
pub struct StateService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StateService<'a> {
    /// Creates a new instance of [`StateService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all states in storage order
    pub async fn list_states(&self) -> Result<Vec<StateModel>, Error> {
        Ok(StateRepository::new(self.db).get_all().await?)
    }

    /// Gets a state by ID
    ///
    /// # Returns
    /// - `Ok(StateModel)` - State found
    /// - `Err(CatalogError::StateNotFound)` - No state with this ID
    pub async fn get_state(&self, state_id: i32) -> Result<StateModel, Error> {
        StateRepository::new(self.db)
            .get_by_id(state_id)
            .await?
            .ok_or_else(|| CatalogError::StateNotFound(state_id).into())
    }

    /// Gets a state together with its cities
    pub async fn get_state_with_cities(
        &self,
        state_id: i32,
    ) -> Result<(StateModel, Vec<CityModel>), Error> {
        StateRepository::new(self.db)
            .get_with_cities(state_id)
            .await?
            .ok_or_else(|| CatalogError::StateNotFound(state_id).into())
    }

    /// Creates a state
    ///
    /// # Returns
    /// - `Ok(StateModel)` - The created state
    /// - `Err(CatalogError::DuplicateStateName)` - A state with the identical name exists
    pub async fn create_state(&self, form: &StateForm) -> Result<StateModel, Error> {
        let state_repo = StateRepository::new(self.db);

        if state_repo.get_by_name(&form.name).await?.is_some() {
            return Err(CatalogError::DuplicateStateName(form.name.clone()).into());
        }

        let state = state_repo
            .create(form)
            .await
            .map_err(|e| duplicate_name_or(e, &form.name))?;

        tracing::info!(state_id = %state.id, "Created state {:?}", state.name);

        Ok(state)
    }

    /// Overwrites a state's name, description and image reference
    ///
    /// No duplicate name check is performed beforehand; a rename onto an existing name is
    /// only rejected by the storage unique constraint, reported as `DuplicateStateName`.
    pub async fn update_state(&self, state_id: i32, form: &StateForm) -> Result<StateModel, Error> {
        let state = StateRepository::new(self.db)
            .update(state_id, form)
            .await
            .map_err(|e| duplicate_name_or(e, &form.name))?
            .ok_or(CatalogError::StateNotFound(state_id))?;

        tracing::info!(state_id = %state.id, "Updated state");

        Ok(state)
    }

    /// Deletes a state and every city belonging to it in a single transaction
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of cities deleted along with the state
    /// - `Err(CatalogError::StateNotFound)` - No state with this ID, nothing was deleted
    pub async fn delete_state(&self, state_id: i32) -> Result<u64, Error> {
        let txn = self.db.begin().await?;

        let state_repo = StateRepository::new(&txn);
        if state_repo.get_by_id(state_id).await?.is_none() {
            txn.rollback().await?;

            return Err(CatalogError::StateNotFound(state_id).into());
        }

        let cities = CityRepository::new(&txn)
            .delete_by_state_id(state_id)
            .await?;
        state_repo.delete(state_id).await?;

        txn.commit().await?;

        tracing::info!(
            state_id = %state_id,
            cities_deleted = %cities.rows_affected,
            "Deleted state"
        );

        Ok(cities.rows_affected)
    }
}

fn duplicate_name_or(err: sea_orm::DbErr, name: &str) -> Error {
    if is_unique_violation(&err) {
        CatalogError::DuplicateStateName(name.to_string()).into()
    } else {
        err.into()
    }
}
