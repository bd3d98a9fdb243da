//! Utility functions for controller request handling.
//!
//! This module provides reusable helpers used across controllers: resolving the identity bound
//! to a session, the authentication and administrator gates consumed by protected endpoints,
//! queueing a flash notification for errors that redirect the user, and turning a rejected form
//! submission into such a redirect.

pub mod flash;
pub mod form;
pub mod identity;
