//! # Database Module
//!
//! - `models`: Row types (`User`) and their public projection (`PublicUser`)
//! - `users`: Queries against the `users` table
//!
//! The pool itself is created in [`crate::state::AppState::new`].

pub mod models;
pub mod users;
