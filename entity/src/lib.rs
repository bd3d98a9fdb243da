//! SeaORM entities for the wayfarer catalog schema.

pub mod prelude;

pub mod city;
pub mod state;
pub mod user;
