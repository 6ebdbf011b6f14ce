use crate::db::models::User;
use crate::error::{AppError, AppResult};
use sqlx::SqlitePool;

/// Message for a duplicate email, whether caught by lookup or by the
/// `UNIQUE` constraint
pub const EMAIL_TAKEN: &str = "Use another email.";

pub async fn create_user(
    pool: &SqlitePool,
    name: &str,
    email: &str,
    password_hash: &str,
) -> AppResult<User> {
    let user = User::new(name.to_string(), email.to_string(), password_hash.to_string());

    sqlx::query(
        "INSERT INTO users (id, name, email, password_hash, created_at)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&user.id)
    .bind(&user.name)
    .bind(&user.email)
    .bind(&user.password_hash)
    .bind(&user.created_at)
    .execute(pool)
    .await
    .map_err(|e| match e {
        // Lost a race with a concurrent registration for the same email
        sqlx::Error::Database(ref db) if db.is_unique_violation() => {
            AppError::Conflict(EMAIL_TAKEN.to_string())
        }
        _ => AppError::Database(e),
    })?;

    Ok(user)
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> AppResult<Option<User>> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
        .bind(email)
        .fetch_optional(pool)
        .await?;

    Ok(user)
}

pub async fn find_by_id(pool: &SqlitePool, user_id: &str) -> AppResult<Option<User>> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

    Ok(user)
}
