//! Tests for administrator endpoints.

mod authorization;

use super::*;
