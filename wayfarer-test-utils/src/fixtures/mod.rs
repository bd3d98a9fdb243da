//! Test fixture modules for database record creation.
//!
//! - `user` - User accounts, including the administrator
//! - `catalog` - States and their cities
//! - `factory` - Unsaved models for pure conversion tests

pub mod catalog;
pub mod factory;
pub mod user;
