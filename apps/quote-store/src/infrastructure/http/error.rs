//! Request-boundary errors.

use axum::extract::rejection::BytesRejection;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::domain::quote::QuoteError;

/// Error returned by HTTP handlers and extractors.
///
/// Every variant renders as a plain-text body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No quote matched the requested id.
    #[error("Quote not found.")]
    QuoteNotFound,

    /// No route matched the request.
    #[error("Cannot {method} {path}")]
    RouteNotFound {
        /// Request method.
        method: Method,
        /// Request path.
        path: String,
    },

    /// The request body could not be used.
    #[error("{message}")]
    Rejected {
        /// Response status.
        status: StatusCode,
        /// Response body.
        message: String,
    },
}

impl ApiError {
    /// A 400 with the given message.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Rejected {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::QuoteNotFound | Self::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            Self::Rejected { status, .. } => *status,
        }
    }
}

impl From<QuoteError> for ApiError {
    fn from(err: QuoteError) -> Self {
        match err {
            QuoteError::NotFound { .. } => Self::QuoteNotFound,
        }
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
