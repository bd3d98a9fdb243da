//! HTTP controller endpoints for the Wayfarer web application.
//!
//! This module contains Axum handlers for public catalog browsing, authentication, the user
//! dashboard and the administrator pages. Controllers resolve the session identity, apply the
//! authorization gates, call into services and answer with either a JSON page payload for the
//! rendering layer or a redirect. They integrate with tower-sessions for session management
//! and use utoipa for OpenAPI documentation.

pub mod admin;
pub mod auth;
pub mod catalog;
pub mod user;
pub mod util;
