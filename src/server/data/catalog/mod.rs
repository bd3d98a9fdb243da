//! Repositories for the state/city catalog.

pub mod city;
pub mod state;
