//! # Bearer Tokens
//!
//! HS256 JSON Web Tokens signed with the server secret. A token carries the
//! user id and its issue time. When a lifetime is configured it also carries
//! `exp`, and verification rejects it once that moment has passed.

use crate::error::{AppError, AppResult};
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Claims embedded in every token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Id of the user the token was issued to
    pub id: String,

    /// Issued at (seconds since the Unix epoch)
    pub iat: i64,

    /// Expiry (seconds since the Unix epoch), absent for non-expiring tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

/// Signing and verification keys derived from the server secret
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Option<Duration>,
}

impl TokenKeys {
    /// Derive keys from `secret`. `ttl` of `None` issues tokens that never expire.
    pub fn new(secret: &[u8], ttl: Option<Duration>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // `exp` is optional, but checked whenever a token carries one
        validation.required_spec_claims.clear();
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    /// Issue a token for `user_id`
    pub fn issue(&self, user_id: &str) -> AppResult<String> {
        let iat = Utc::now().timestamp();
        let exp = self
            .ttl
            .map(|ttl| iat.saturating_add(i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX)));

        self.sign(&Claims {
            id: user_id.to_string(),
            iat,
            exp,
        })
    }

    /// Verify the signature (and expiry, if any) of `token`
    ///
    /// Every failure, from a bad signature to a string that is not a JWT at
    /// all, is reported as [`AppError::InvalidToken`].
    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("Token rejected: {}", e);
                AppError::InvalidToken
            })
    }

    fn sign(&self, claims: &Claims) -> AppResult<String> {
        Ok(encode(&Header::new(Algorithm::HS256), claims, &self.encoding)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> TokenKeys {
        TokenKeys::new(b"test-secret", None)
    }

    #[test]
    fn issued_token_verifies_with_the_same_id() {
        let keys = keys();
        let token = keys.issue("user-42").unwrap();

        let claims = keys.verify(&token).unwrap();
        assert_eq!(claims.id, "user-42");
        assert_eq!(claims.exp, None);
    }

    #[test]
    fn altered_signature_is_rejected() {
        let keys = keys();
        let token = keys.issue("user-42").unwrap();

        // Flip the first character of the signature segment
        let (head, signature) = token.rsplit_once('.').unwrap();
        let mut chars: Vec<char> = signature.chars().collect();
        chars[0] = if chars[0] == 'A' { 'B' } else { 'A' };
        let tampered = format!("{}.{}", head, chars.into_iter().collect::<String>());

        assert!(matches!(keys.verify(&tampered), Err(AppError::InvalidToken)));
    }

    #[test]
    fn token_from_another_secret_is_rejected() {
        let token = TokenKeys::new(b"other-secret", None).issue("user-42").unwrap();

        assert!(matches!(keys().verify(&token), Err(AppError::InvalidToken)));
    }

    #[test]
    fn garbage_is_rejected() {
        let keys = keys();

        assert!(matches!(keys.verify(""), Err(AppError::InvalidToken)));
        assert!(matches!(keys.verify("not.a.jwt"), Err(AppError::InvalidToken)));
    }

    #[test]
    fn ttl_sets_expiry() {
        let keys = TokenKeys::new(b"test-secret", Some(Duration::from_secs(3600)));
        let claims = keys.verify(&keys.issue("user-42").unwrap()).unwrap();

        assert_eq!(claims.exp, Some(claims.iat + 3600));
    }

    #[test]
    fn expired_token_is_rejected() {
        let keys = keys();
        let now = Utc::now().timestamp();
        let token = keys
            .sign(&Claims {
                id: "user-42".to_string(),
                iat: now - 7200,
                exp: Some(now - 3600),
            })
            .unwrap();

        assert!(matches!(keys.verify(&token), Err(AppError::InvalidToken)));
    }
}
