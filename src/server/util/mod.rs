//! Utility functions and helpers for server operations.
//!
//! This module provides reusable helpers shared by services and controllers, currently the
//! credential hashing used by the identity service.

pub mod password;
