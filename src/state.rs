//! # Application State
//!
//! This module defines the shared state that's accessible to all request
//! handlers through axum's `State` extractor.
//!
//! ## Lifecycle
//! 1. [`AppState::new`] opens the connection pool and runs migrations
//! 2. The router clones the state for each request (cheap: a pool handle,
//!    a `Copy` hasher and an `Arc`)
//! 3. [`AppState::close`] closes the pool once the server has stopped
//!
//! Nothing in here is mutated after startup.

use crate::auth::password::PasswordHasher;
use crate::auth::token::TokenKeys;
use crate::config::Config;
use anyhow::Result;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    ///
    /// `SqlitePool` is already reference counted, so cloning it shares the
    /// same set of connections.
    pub db: SqlitePool,

    /// Password hasher configured with the bcrypt cost factor
    pub hasher: PasswordHasher,

    /// Keys for issuing and verifying bearer tokens
    ///
    /// Wrapped in Arc so every request shares one copy of the key material.
    pub tokens: Arc<TokenKeys>,
}

impl AppState {
    /// Initialize application state
    ///
    /// # Errors
    /// Returns an error if:
    /// - `DATABASE_URL` cannot be resolved
    /// - Database connection fails
    /// - Migrations fail
    pub async fn new(config: &Config) -> Result<Self> {
        let db = SqlitePoolOptions::new()
            .max_connections(config.db_max_connections)
            .connect(&config.connection_url()?)
            .await?;

        // Embedded from ./migrations at compile time; already-applied
        // migrations are skipped
        sqlx::migrate!("./migrations").run(&db).await?;

        let hasher = PasswordHasher::new(config.bcrypt_cost);
        let tokens = Arc::new(TokenKeys::new(config.secret.as_bytes(), config.token_ttl));

        Ok(AppState { db, hasher, tokens })
    }

    /// Close the connection pool, waiting for checked-out connections to return
    pub async fn close(&self) {
        self.db.close().await;
        tracing::info!("Database pool closed");
    }
}
