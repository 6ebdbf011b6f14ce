//! # Configuration Management
//!
//! This module loads the server configuration from environment variables
//! (and a `.env` file, if present) exactly once, at startup. Nothing else in
//! the crate reads the environment; the resulting [`Config`] is validated
//! here and then handed to the components that need it.
//!
//! ## Environment Variables
//! - `SECRET`: Token signing key (required)
//! - `DB_USER` / `DB_PASS`: Store credentials, substituted into `DATABASE_URL`
//! - `DATABASE_URL`: Store connection string (default: `sqlite:users.db?mode=rwc`)
//! - `DB_MAX_CONNECTIONS`: Pool size (default: 5)
//! - `HOST` / `PORT`: Bind address (default: 127.0.0.1:3000)
//! - `BCRYPT_COST`: Password hashing cost factor (default: 12)
//! - `TOKEN_TTL_SECS`: Token lifetime in seconds (default: tokens never expire)
//! - `REQUEST_TIMEOUT_SECS`: Per-request timeout (default: 30)

use anyhow::{bail, Context, Result};
use std::env;
use std::fmt;
use std::time::Duration;

/// Placeholder in `DATABASE_URL` replaced by the value of `DB_USER`.
const DB_USER_PLACEHOLDER: &str = "{DB_USER}";
/// Placeholder in `DATABASE_URL` replaced by the value of `DB_PASS`.
const DB_PASS_PLACEHOLDER: &str = "{DB_PASS}";

/// Lowest and highest cost factors bcrypt accepts.
const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

/// Application configuration
///
/// All fields are public so tests can build a configuration directly.
/// `Debug` is implemented by hand: the signing secret and the store password
/// must never end up in the logs.
#[derive(Clone)]
pub struct Config {
    /// Server host/IP address to bind to
    pub host: String,

    /// Server port number
    pub port: u16,

    /// Store connection string. May contain `{DB_USER}` and `{DB_PASS}`
    /// placeholders; see [`Config::connection_url`].
    pub database_url: String,

    /// Store user name (`DB_USER`)
    pub db_user: Option<String>,

    /// Store password (`DB_PASS`)
    pub db_pass: Option<String>,

    /// Maximum number of pooled store connections
    pub db_max_connections: u32,

    /// Key used to sign and verify bearer tokens (`SECRET`)
    pub secret: String,

    /// bcrypt cost factor. Each step doubles the hashing time.
    pub bcrypt_cost: u32,

    /// Lifetime of issued tokens. `None` issues tokens without an expiry.
    pub token_ttl: Option<Duration>,

    /// Upper bound on the time spent handling a single request
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Reads `.env` first (a missing file is not an error), then delegates to
    /// [`Config::from_lookup`] with the process environment.
    ///
    /// ## Example .env file
    /// ```text
    /// SECRET=change-me
    /// DB_USER=app
    /// DB_PASS=hunter2
    /// DATABASE_URL=sqlite:users.db?mode=rwc
    /// PORT=3000
    /// ```
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build and validate a configuration from an arbitrary key lookup
    ///
    /// Empty values are treated as unset. Fails when `SECRET` is missing,
    /// a number does not parse, the bcrypt cost is out of range, or
    /// `DATABASE_URL` references a credential that was not provided.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Treat `KEY=` the same as an absent key
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let secret = match get("SECRET") {
            Some(secret) => secret,
            None => bail!("SECRET must be set to a non-empty signing key"),
        };

        let port = match get("PORT") {
            Some(raw) => raw.parse().with_context(|| format!("invalid PORT: {raw}"))?,
            None => 3000,
        };

        let db_max_connections = match get("DB_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("invalid DB_MAX_CONNECTIONS: {raw}"))?,
            None => 5,
        };

        let bcrypt_cost = match get("BCRYPT_COST") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("invalid BCRYPT_COST: {raw}"))?,
            None => bcrypt::DEFAULT_COST,
        };
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&bcrypt_cost) {
            bail!(
                "BCRYPT_COST must be between {MIN_BCRYPT_COST} and {MAX_BCRYPT_COST}, got {bcrypt_cost}"
            );
        }

        let token_ttl = match get("TOKEN_TTL_SECS") {
            Some(raw) => Some(Duration::from_secs(
                raw.parse()
                    .with_context(|| format!("invalid TOKEN_TTL_SECS: {raw}"))?,
            )),
            None => None,
        };

        let request_timeout = match get("REQUEST_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(
                raw.parse()
                    .with_context(|| format!("invalid REQUEST_TIMEOUT_SECS: {raw}"))?,
            ),
            None => Duration::from_secs(30),
        };

        let config = Config {
            host: get("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            database_url: get("DATABASE_URL")
                .unwrap_or_else(|| "sqlite:users.db?mode=rwc".to_string()),
            db_user: get("DB_USER"),
            db_pass: get("DB_PASS"),
            db_max_connections,
            secret,
            bcrypt_cost,
            token_ttl,
            request_timeout,
        };

        // Fail now rather than on the first connection attempt
        config.connection_url()?;

        Ok(config)
    }

    /// Resolve the store connection string
    ///
    /// Substitutes `{DB_USER}` and `{DB_PASS}` with the configured
    /// credentials, so the template can live in `.env` while the
    /// credentials come from the deployment environment.
    pub fn connection_url(&self) -> Result<String> {
        let mut url = self.database_url.clone();

        for (placeholder, value, var) in [
            (DB_USER_PLACEHOLDER, &self.db_user, "DB_USER"),
            (DB_PASS_PLACEHOLDER, &self.db_pass, "DB_PASS"),
        ] {
            if url.contains(placeholder) {
                match value {
                    Some(value) => url = url.replace(placeholder, value),
                    None => bail!("DATABASE_URL references {placeholder} but {var} is not set"),
                }
            }
        }

        Ok(url)
    }

    /// Get the socket address to bind the server to, e.g. "127.0.0.1:3000"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |value: &Option<String>| value.as_ref().map(|_| "<redacted>");

        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database_url", &self.database_url)
            .field("db_user", &self.db_user)
            .field("db_pass", &redact(&self.db_pass))
            .field("db_max_connections", &self.db_max_connections)
            .field("secret", &"<redacted>")
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("token_ttl", &self.token_ttl)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
