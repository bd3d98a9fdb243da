//! Test harness for the Wayfarer crates.
//!
//! Tests follow three phases: create a [`TestSetup`] (in-memory SQLite database & memory
//! session store) through one of the setup macros, insert fixture records with
//! `test.user()` / `test.catalog()`, then call the code under test against `test.state`
//! and `test.session`.

pub mod error;
pub mod fixtures;
pub mod model;
pub mod setup;

pub use error::TestError;
pub use setup::{TestAppState, TestSetup};

pub mod prelude {
    pub use crate::{
        fixtures::factory, test_setup_with_catalog_tables, test_setup_with_tables,
        test_setup_with_user_tables, TestError, TestSetup,
    };
}
