use crate::auth::types::{LoginRequest, RegisterRequest};
use crate::auth::{authentication, registration};
use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

pub async fn register(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> AppResult<(StatusCode, Json<Value>)> {
    registration::register(&state, &req).await?;

    Ok((StatusCode::CREATED, Json(json!({ "msg": "User created." }))))
}

pub async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> AppResult<Json<Value>> {
    let token = authentication::login(&state, &req).await?;

    Ok(Json(json!({
        "msg": "authentication performed successfully",
        "token": token
    })))
}
