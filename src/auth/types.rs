//! # Auth API Types
//!
//! Request bodies for the register and login endpoints. Every field
//! defaults to an empty string, so a missing field and an empty one fail
//! validation the same way ("name is required", ...).

use serde::{Deserialize, Serialize};

/// Body of `POST /auth/register`
///
/// ## Example JSON
/// ```json
/// {
///   "name": "Alice",
///   "email": "alice@example.com",
///   "password": "p1",
///   "confirmpassword": "p1"
/// }
/// ```
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Must equal `password`
    pub confirmpassword: String,
}

/// Body of `POST /auth/login`
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_deserialize_as_empty() {
        let req: RegisterRequest = serde_json::from_str(r#"{"name":"A"}"#).unwrap();

        assert_eq!(req.name, "A");
        assert!(req.email.is_empty());
        assert!(req.password.is_empty());
        assert!(req.confirmpassword.is_empty());
    }
}
