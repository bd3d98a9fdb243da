//! Catalog service layer.
//!
//! State and city operations. Lookups by ID fail with `StateNotFound`/`CityNotFound`, state
//! names are unique on creation, and deleting a state removes its cities in the same
//! transaction.

pub mod city;
pub mod state;
