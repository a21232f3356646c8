//! Error-to-response mapping for the HTTP surface.
//!
//! Every failure renders the same envelope, `{"success": false, "message": …}`,
//! with the status carrying the error class: 404 missing/unowned, 409 illegal
//! transition, 400 bad input, 403 missing capability, 401 bad token, 503
//! store unavailable.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

use crate::order_actor::OrderError;
use crate::rating_actor::RatingError;

/// A failure ready to be rendered: status plus customer-facing message.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// Missing, malformed, or unknown bearer token.
    pub fn unauthorized() -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            message: "missing or invalid bearer token".to_string(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::FORBIDDEN,
            message: message.into(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, message = %self.message, "request failed");
        }
        let body = ErrorBody {
            success: false,
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        let status = match &e {
            OrderError::NotFound(_) => StatusCode::NOT_FOUND,
            OrderError::InvalidState(_) => StatusCode::CONFLICT,
            OrderError::Validation(_) => StatusCode::BAD_REQUEST,
            OrderError::Transient(_) => StatusCode::SERVICE_UNAVAILABLE,
        };
        Self {
            status,
            message: e.to_string(),
        }
    }
}

impl From<RatingError> for ApiError {
    fn from(e: RatingError) -> Self {
        let status = match &e {
            RatingError::NotFound(_) => StatusCode::NOT_FOUND,
            RatingError::Validation(_) => StatusCode::BAD_REQUEST,
            RatingError::Forbidden(_) => StatusCode::FORBIDDEN,
            RatingError::Transient(_) => StatusCode::SERVICE_UNAVAILABLE,
        };
        Self {
            status,
            message: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_errors_map_to_their_statuses() {
        let cases = [
            (OrderError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (OrderError::InvalidState("x".into()), StatusCode::CONFLICT),
            (OrderError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (
                OrderError::Transient("x".into()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status, status);
        }
    }

    #[test]
    fn rating_errors_map_to_their_statuses() {
        let cases = [
            (RatingError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (RatingError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (RatingError::Forbidden("x".into()), StatusCode::FORBIDDEN),
            (
                RatingError::Transient("x".into()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status, status);
        }
    }
}
