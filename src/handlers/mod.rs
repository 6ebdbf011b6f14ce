//! # HTTP Request Handlers
//!
//! ## Submodules
//! - `health`: Welcome message and health check (public)
//! - `auth`: Register and login (public)
//! - `users`: User profile lookup (bearer token required)
//!
//! Handlers stay thin: extract the request, call into [`crate::auth`] or
//! [`crate::db`], and shape the JSON response. Errors are returned as
//! [`crate::error::AppError`] and rendered by its `IntoResponse` impl.

pub mod auth;
pub mod health;
pub mod users;
