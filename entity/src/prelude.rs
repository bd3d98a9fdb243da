pub use super::city::Entity as City;
pub use super::state::Entity as State;
pub use super::user::Entity as User;
