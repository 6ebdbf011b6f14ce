use crate::auth::types::RegisterRequest;
use crate::db::models::User;
use crate::db::users;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Check that every required field is present and the passwords match
///
/// Fields are checked in order and the first problem wins.
pub fn validate(req: &RegisterRequest) -> AppResult<()> {
    if req.name.is_empty() {
        return Err(AppError::Validation("name is required".to_string()));
    }
    if req.email.is_empty() {
        return Err(AppError::Validation("email is required".to_string()));
    }
    if req.password.is_empty() {
        return Err(AppError::Validation("password is required".to_string()));
    }
    if req.password != req.confirmpassword {
        return Err(AppError::Validation("Passwords do not match".to_string()));
    }

    Ok(())
}

pub async fn register(state: &AppState, req: &RegisterRequest) -> AppResult<User> {
    validate(req)?;

    // Check if the email is taken. The UNIQUE constraint still catches
    // a concurrent registration that slips past this lookup.
    if users::find_by_email(&state.db, &req.email).await?.is_some() {
        return Err(AppError::Conflict(users::EMAIL_TAKEN.to_string()));
    }

    let password_hash = state.hasher.hash(&req.password).await?;

    let user = users::create_user(&state.db, &req.name, &req.email, &password_hash).await?;
    tracing::info!("Registered user {}", user.id);

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str, password: &str, confirm: &str) -> RegisterRequest {
        RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirmpassword: confirm.to_string(),
        }
    }

    fn message(result: AppResult<()>) -> String {
        match result {
            Err(AppError::Validation(msg)) => msg,
            other => panic!("expected a validation error, got {:?}", other),
        }
    }

    #[test]
    fn accepts_a_complete_request() {
        assert!(validate(&request("A", "a@x.com", "p1", "p1")).is_ok());
    }

    #[test]
    fn reports_the_first_missing_field() {
        assert_eq!(message(validate(&request("", "", "", ""))), "name is required");
        assert_eq!(message(validate(&request("A", "", "", ""))), "email is required");
        assert_eq!(
            message(validate(&request("A", "a@x.com", "", ""))),
            "password is required"
        );
    }

    #[test]
    fn rejects_mismatched_confirmation() {
        assert_eq!(
            message(validate(&request("A", "a@x.com", "p1", "p2"))),
            "Passwords do not match"
        );
    }
}
