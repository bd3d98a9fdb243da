//! Data transfer objects shared by the HTTP layer.
//!
//! Every page handler answers with one of the page DTOs in [`page`]; the rendering layer
//! consumes them as-is. Credential material never appears in any of these types.

pub mod api;
pub mod catalog;
pub mod page;
pub mod user;
