//! # Database Models
//!
//! This module defines the data structures that map to database tables,
//! plus the projection of those rows that is safe to send to clients.
//!
//! ## Key Concepts
//! - **Row types** (`User`) mirror the table and derive `sqlx::FromRow`
//! - **Public types** (`PublicUser`) are what leaves the server; the
//!   password hash has no field there, so it cannot be serialized by mistake

use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

/// A registered account, as stored in the `users` table
///
/// `User` deliberately does not derive `Serialize`: handlers must go through
/// [`PublicUser`] to build a response.
///
/// ## Why Strings for ids and dates?
/// SQLite stores both as text. The id is a UUID v4 rendered as a string and
/// the timestamp is RFC3339.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique identifier (UUID v4), assigned at registration
    /// Example: "550e8400-e29b-41d4-a716-446655440000"
    pub id: String,

    /// Display name, never empty
    pub name: String,

    /// Login key, unique across all users
    pub email: String,

    /// bcrypt hash of the password, salt included
    pub password_hash: String,

    /// When the account was created (RFC3339 timestamp)
    pub created_at: String,
}

impl User {
    /// Create a new user with a generated id and the current timestamp
    ///
    /// `password_hash` must already be hashed; see
    /// [`crate::auth::password::PasswordHasher::hash`].
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            password_hash,
            created_at: Utc::now().to_rfc3339(),
        }
    }
}

/// User profile as returned by the API
///
/// ## Example JSON
/// ```json
/// {
///   "id": "550e8400-e29b-41d4-a716-446655440000",
///   "name": "Alice",
///   "email": "alice@example.com"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_users_get_distinct_ids() {
        let a = User::new("A".into(), "a@x.com".into(), "hash".into());
        let b = User::new("A".into(), "a@x.com".into(), "hash".into());

        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
    }

    #[test]
    fn public_projection_drops_the_hash() {
        let user = User::new("A".into(), "a@x.com".into(), "$2b$04$secret".into());
        let value = serde_json::to_value(PublicUser::from(user.clone())).unwrap();

        assert_eq!(value["id"], user.id);
        assert_eq!(value["name"], "A");
        assert_eq!(value["email"], "a@x.com");
        assert!(value.get("password_hash").is_none());
        assert!(value.get("password").is_none());
    }
}
