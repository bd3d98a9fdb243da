//! Server application core modules.
//!
//! This module contains all server-side functionality for the Wayfarer application:
//! HTTP routing, session-based authentication, the identity and catalog services, and the
//! SeaORM repositories backing them. Public visitors browse states and cities while the
//! single administrator account manages the catalog through the `/admin` pages.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
