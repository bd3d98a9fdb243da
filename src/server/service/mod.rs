//! Service layer for business logic.
//!
//! Services enforce the catalog and identity rules (uniqueness, reserved email, parent
//! existence, cascading delete) on top of the repositories and translate storage outcomes
//! into domain errors.

pub mod catalog;
pub mod identity;
