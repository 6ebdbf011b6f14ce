//! # Public Handlers
//!
//! Endpoints that need no token: the API welcome message and the health
//! check used by load balancers and monitoring.

use axum::Json;
use serde_json::{json, Value};

/// Welcome message
///
/// ## Route
/// GET /
pub async fn welcome() -> Json<Value> {
    Json(json!({ "msg": "Welcome to this API." }))
}

/// Health check endpoint
///
/// ## Route
/// GET /health
///
/// ## Response
/// ```json
/// {
///   "status": "healthy",
///   "service": "user-auth-api"
/// }
/// ```
///
/// Never fails, so it returns `Json<Value>` rather than `AppResult`.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "user-auth-api"
    }))
}
