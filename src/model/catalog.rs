use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StateDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub image_reference: String,
    pub created_at: NaiveDateTime,
}

impl From<entity::state::Model> for StateDto {
    fn from(state: entity::state::Model) -> Self {
        Self {
            id: state.id,
            name: state.name,
            description: state.description,
            image_reference: state.image_reference,
            created_at: state.created_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CityDto {
    pub id: i32,
    pub state_id: i32,
    pub name: String,
    pub description: String,
    pub image_reference: String,
    pub details: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<entity::city::Model> for CityDto {
    fn from(city: entity::city::Model) -> Self {
        Self {
            id: city.id,
            state_id: city.state_id,
            name: city.name,
            description: city.description,
            image_reference: city.image_reference,
            details: city.details,
            created_at: city.created_at,
        }
    }
}

/// Create/edit form for a State
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct StateForm {
    pub name: String,
    pub description: String,
    #[serde(rename = "imageReference", alias = "image_filename")]
    pub image_reference: String,
}

/// Create/edit form for a City
///
/// An empty `details` field is stored as no details at all.
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct CityForm {
    pub name: String,
    pub description: String,
    #[serde(rename = "imageReference", alias = "image_filename")]
    pub image_reference: String,
    #[serde(default)]
    pub details: Option<String>,
}

impl CityForm {
    /// Details with blank submissions collapsed to `None`
    pub fn details(&self) -> Option<String> {
        self.details
            .as_deref()
            .map(str::trim)
            .filter(|details| !details.is_empty())
            .map(str::to_string)
    }
}
