//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main wayfarer crate to ensure consistency across tests.

/// Type alias for user database model.
pub type UserModel = entity::user::Model;

/// Type alias for state database model.
pub type StateModel = entity::state::Model;

/// Type alias for city database model.
pub type CityModel = entity::city::Model;
