//! # User Auth API
//!
//! A small account service: register with a name, email and password, log
//! in to receive a bearer token, and fetch user profiles with that token.
//!
//! ## Key Concepts
//! - **bcrypt**: Passwords are stored only as salted, deliberately slow hashes
//! - **JWT**: Login returns an HS256-signed token embedding the user id
//! - **SQLite**: Users live in a single `users` table managed by SQLx
//!
//! The binary in `main.rs` wires this library to a TCP listener; tests build
//! the same router with [`build_router`] and drive it in-process.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod state;

use crate::config::Config;
use crate::handlers::auth::{login, register};
use crate::handlers::health::{health_check, welcome};
use crate::handlers::users::get_user;
use crate::state::AppState;
use axum::{
    http::StatusCode,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Build the application router
///
/// ## Routes
/// - `GET /`: Welcome message
/// - `GET /health`: Health check
/// - `POST /auth/register`: Create an account
/// - `POST /auth/login`: Exchange credentials for a token
/// - `GET /user/{id}`: Fetch a profile (bearer token required)
pub fn build_router(state: AppState, config: &Config) -> Router {
    // Routes behind the token check. `route_layer` only runs the middleware
    // for requests that matched one of these routes.
    let protected_routes = Router::new()
        .route("/user/{id}", get(get_user))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_token,
        ));

    // In production, restrict this to the frontend's origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health_check))
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .merge(protected_routes)
        // Layers are applied in reverse order: tracing sees every request,
        // including those that time out, and the 408 from the timeout layer
        // is rewritten into the error body on its way out
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ))
        .layer(axum_middleware::map_response(
            middleware::timeout::timeout_envelope,
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
