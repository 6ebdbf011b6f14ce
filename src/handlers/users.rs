//! # User Handlers

use crate::auth::token::Claims;
use crate::db::models::PublicUser;
use crate::db::users;
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde_json::{json, Value};

/// Get a user's profile by id
///
/// ## Route
/// GET /user/{id}
///
/// ## Authentication
/// Requires a bearer token (protected by `require_token` middleware). Any
/// valid token may read any profile.
///
/// ## Response
/// ```json
/// {
///   "user": {
///     "id": "550e8400-e29b-41d4-a716-446655440000",
///     "name": "Alice",
///     "email": "alice@example.com"
///   }
/// }
/// ```
pub async fn get_user(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    tracing::debug!("User {} looking up user {}", claims.id, id);

    let user = users::find_by_id(&state.db, &id)
        .await?
        .ok_or_else(|| AppError::NotFound("user not found".to_string()))?;

    // Only the public projection leaves the server, never the hash
    Ok(Json(json!({ "user": PublicUser::from(user) })))
}
