//! # Middleware Module
//!
//! Middleware runs before the route handlers and can short-circuit a
//! request with an error response.
//!
//! ## Our Middleware
//! - `auth`: Checks the bearer token on protected routes
//! - `timeout`: Puts timed-out responses into the `{msg}` error body

pub mod auth;
pub mod timeout;
