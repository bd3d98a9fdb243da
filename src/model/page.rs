//! Page payloads handed to the rendering layer.
//!
//! Each page carries the flash notifications drained from the session for that request.

use serde::Serialize;
use utoipa::ToSchema;

use crate::model::{
    api::FlashDto,
    catalog::{CityDto, StateDto},
    user::UserDto,
};

/// A page with no content beyond notifications (login & registration forms)
#[derive(Serialize, ToSchema)]
pub struct FormPage {
    pub flash: Vec<FlashDto>,
}

/// Home page and admin state list
#[derive(Serialize, ToSchema)]
pub struct StateListPage {
    pub flash: Vec<FlashDto>,
    pub states: Vec<StateDto>,
}

/// A state together with its cities
#[derive(Serialize, ToSchema)]
pub struct StateDetailPage {
    pub flash: Vec<FlashDto>,
    pub state: StateDto,
    pub cities: Vec<CityDto>,
}

/// State edit form prefill
#[derive(Serialize, ToSchema)]
pub struct StatePage {
    pub flash: Vec<FlashDto>,
    pub state: StateDto,
}

/// A city together with its parent state
#[derive(Serialize, ToSchema)]
pub struct CityDetailPage {
    pub flash: Vec<FlashDto>,
    pub city: CityDto,
    pub state: StateDto,
}

/// City edit form prefill
#[derive(Serialize, ToSchema)]
pub struct CityPage {
    pub flash: Vec<FlashDto>,
    pub city: CityDto,
}

/// Dashboard and admin landing pages
#[derive(Serialize, ToSchema)]
pub struct UserPage {
    pub flash: Vec<FlashDto>,
    pub user: UserDto,
}
