use crate::auth::types::LoginRequest;
use crate::db::users;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Log a user in and return a freshly issued bearer token
pub async fn login(state: &AppState, req: &LoginRequest) -> AppResult<String> {
    if req.email.is_empty() {
        return Err(AppError::Validation("email is required".to_string()));
    }
    if req.password.is_empty() {
        return Err(AppError::Validation("password is required".to_string()));
    }

    let user = users::find_by_email(&state.db, &req.email)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    if !state.hasher.verify(&req.password, &user.password_hash).await? {
        tracing::warn!("Failed login for user {}", user.id);
        return Err(AppError::Validation("invalid password".to_string()));
    }

    let token = state.tokens.issue(&user.id)?;
    tracing::info!("User {} logged in", user.id);

    Ok(token)
}
