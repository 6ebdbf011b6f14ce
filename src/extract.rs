//! # Request Extractors
//!
//! `JsonBody` replaces axum's `Json` extractor for request bodies so that
//! every rejection comes back as an [`AppError`] with a `{ "msg": ... }`
//! body instead of axum's plain-text message.
//!
//! A body that is not declared as JSON, or is empty, reads as `{}`: all
//! fields take their defaults and the handler's own validation reports
//! what is missing ("name is required", ...).

use crate::error::AppError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
    Json,
};
use serde::de::DeserializeOwned;

/// JSON request body with a `{msg}` rejection
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let declared_json = has_json_content_type(req.headers());

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::Rejected {
                status: e.status(),
                msg: e.body_text(),
            })?;

        if !declared_json || bytes.is_empty() {
            return Ok(JsonBody(T::default()));
        }

        let Json(value) = Json::<T>::from_bytes(&bytes)?;
        Ok(JsonBody(value))
    }
}

/// `application/json`, or any `application/*+json` type, parameters ignored
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn with_content_type(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn recognises_json_content_types() {
        assert!(has_json_content_type(&with_content_type("application/json")));
        assert!(has_json_content_type(&with_content_type(
            "application/json; charset=utf-8"
        )));
        assert!(has_json_content_type(&with_content_type("Application/JSON")));
        assert!(has_json_content_type(&with_content_type(
            "application/merge-patch+json"
        )));
    }

    #[test]
    fn other_content_types_are_not_json() {
        assert!(!has_json_content_type(&HeaderMap::new()));
        assert!(!has_json_content_type(&with_content_type("text/plain")));
        assert!(!has_json_content_type(&with_content_type(
            "application/x-www-form-urlencoded"
        )));
    }
}
