//! Database model type aliases.
//!
//! Convenient aliases for the SeaORM entity models so that services and controllers don't
//! need to spell out the `entity` crate paths.

/// Type alias for the user database model.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key
/// - `name` - Display name
/// - `email` - Normalized (trimmed, lowercase) login key, unique
/// - `password_hash` - Argon2 PHC string
/// - `is_admin` - Whether the user may access `/admin` pages
/// - `created_at` - Timestamp when the account was created
pub type UserModel = entity::user::Model;

/// Type alias for the state database model.
///
/// # Fields (from `entity::state::Model`)
/// - `id` - Primary key
/// - `name` - Unique state name
/// - `description` - Short description shown on listings
/// - `image_reference` - Image file name or URL
/// - `created_at` - Timestamp when the state was created
pub type StateModel = entity::state::Model;

/// Type alias for the city database model.
///
/// Every city belongs to exactly one state via `state_id`; deleting the state deletes its
/// cities.
pub type CityModel = entity::city::Model;
