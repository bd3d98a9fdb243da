//! City operations.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::catalog::CityForm,
    server::{
        data::{
            catalog::{city::CityRepository, state::StateRepository},
            is_foreign_key_violation,
        },
        error::{catalog::CatalogError, Error},
        model::db::{CityModel, StateModel},
    },
};

/// Service for city operations, every city is scoped to a parent state.
pub struct CityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CityService<'a> {
    /// Creates a new instance of [`CityService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the cities of a state
    ///
    /// # Returns
    /// - `Ok(Vec<CityModel>)` - Cities in storage order, possibly empty
    /// - `Err(CatalogError::StateNotFound)` - The parent state does not exist
    pub async fn list_cities_of_state(&self, state_id: i32) -> Result<Vec<CityModel>, Error> {
        if StateRepository::new(self.db)
            .get_by_id(state_id)
            .await?
            .is_none()
        {
            return Err(CatalogError::StateNotFound(state_id).into());
        }

        Ok(CityRepository::new(self.db)
            .get_by_state_id(state_id)
            .await?)
    }

    /// Gets a city by ID
    pub async fn get_city(&self, city_id: i32) -> Result<CityModel, Error> {
        CityRepository::new(self.db)
            .get_by_id(city_id)
            .await?
            .ok_or_else(|| CatalogError::CityNotFound(city_id).into())
    }

    /// Gets a city together with its parent state
    pub async fn get_city_with_state(&self, city_id: i32) -> Result<(CityModel, StateModel), Error> {
        let Some((city, state)) = CityRepository::new(self.db)
            .get_with_state(city_id)
            .await?
        else {
            return Err(CatalogError::CityNotFound(city_id).into());
        };

        let state = state.ok_or_else(|| {
            // Only reachable if the foreign key from city to state is not enforced
            Error::InternalError(format!(
                "Failed to find parent state ID {} for city ID {}",
                city.state_id, city.id
            ))
        })?;

        Ok((city, state))
    }

    /// Creates a city under a state
    ///
    /// # Returns
    /// - `Ok(CityModel)` - The created city
    /// - `Err(CatalogError::StateNotFound)` - The parent state does not exist
    pub async fn create_city(&self, state_id: i32, form: &CityForm) -> Result<CityModel, Error> {
        if StateRepository::new(self.db)
            .get_by_id(state_id)
            .await?
            .is_none()
        {
            return Err(CatalogError::StateNotFound(state_id).into());
        }

        let city = match CityRepository::new(self.db).create(state_id, form).await {
            Ok(city) => city,
            // Parent deleted between the check and the insert
            Err(e) if is_foreign_key_violation(&e) => {
                return Err(CatalogError::StateNotFound(state_id).into())
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!(city_id = %city.id, state_id = %state_id, "Created city {:?}", city.name);

        Ok(city)
    }

    /// Overwrites a city's name, description, image reference and details
    pub async fn update_city(&self, city_id: i32, form: &CityForm) -> Result<CityModel, Error> {
        let city = CityRepository::new(self.db)
            .update(city_id, form)
            .await?
            .ok_or(CatalogError::CityNotFound(city_id))?;

        tracing::info!(city_id = %city.id, "Updated city");

        Ok(city)
    }

    /// Deletes a single city, its state and sibling cities are unaffected
    ///
    /// # Returns
    /// - `Ok(CityModel)` - The city as it was before deletion, used to find its parent state
    /// - `Err(CatalogError::CityNotFound)` - No city with this ID
    pub async fn delete_city(&self, city_id: i32) -> Result<CityModel, Error> {
        let txn = self.db.begin().await?;

        let city_repo = CityRepository::new(&txn);
        let Some(city) = city_repo.get_by_id(city_id).await? else {
            txn.rollback().await?;

            return Err(CatalogError::CityNotFound(city_id).into());
        };

        city_repo.delete(city_id).await?;

        txn.commit().await?;

        tracing::info!(city_id = %city.id, state_id = %city.state_id, "Deleted city");

        Ok(city)
    }
}
