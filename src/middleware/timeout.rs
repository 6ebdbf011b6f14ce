use crate::error::AppError;
use axum::{http::StatusCode, response::IntoResponse, response::Response};

/// Give timed-out requests the same `{msg}` body as every other error
///
/// `TimeoutLayer` answers with a bare 408. No handler produces 408 itself,
/// so any 408 seen here came from the timeout.
pub async fn timeout_envelope(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT {
        return AppError::Timeout.into_response();
    }

    response
}
