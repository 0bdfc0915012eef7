//! Quote request body extraction.
//!
//! JSON is read only for `application/json` requests. Any other content type
//! yields a payload with both fields absent. An empty JSON body counts as `{}`,
//! and the top level must be an object or an array.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::{HeaderMap, header};
use serde_json::Value;

use crate::application::dto::QuoteInputDto;

use super::error::ApiError;

/// Extractor for the `{text, author}` body of create and update requests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuotePayload(pub QuoteInputDto);

impl<S> FromRequest<S> for QuotePayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Ok(Self::default());
        }

        let bytes = Bytes::from_request(req, state).await?;
        parse_quote_body(&bytes).map(Self)
    }
}

/// Parse a JSON body into quote input, reading only `text` and `author`.
pub fn parse_quote_body(bytes: &[u8]) -> Result<QuoteInputDto, ApiError> {
    if bytes.is_empty() {
        return Ok(QuoteInputDto::default());
    }

    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| ApiError::bad_request(format!("Invalid JSON body: {e}")))?;

    match value {
        Value::Object(fields) => serde_json::from_value(Value::Object(fields))
            .map_err(|e| ApiError::bad_request(format!("Invalid JSON body: {e}"))),
        Value::Array(_) => Ok(QuoteInputDto::default()),
        _ => Err(ApiError::bad_request(
            "Invalid JSON body: expected an object or an array",
        )),
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
}
