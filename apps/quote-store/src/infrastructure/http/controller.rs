//! HTTP Controller (Driver Adapter)
//!
//! Axum-based REST API that delegates to the quote use case.
//!
//! Paths are matched case-insensitively and a single trailing slash is
//! ignored. Every route answers `OPTIONS` with its allowed methods.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, OriginalUri, Path, Request, State},
    http::{Method, StatusCode, Uri, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};

use crate::application::dto::QuoteDto;
use crate::application::use_cases::ManageQuotesUseCase;
use crate::config::DEFAULT_MAX_BODY_BYTES;
use crate::domain::quote::QuoteRepository;
use crate::observability::{get_metrics_handle, record_http_request};

use super::error::ApiError;
use super::request::QuotePayload;
use super::response::HealthResponse;

/// Application state shared across handlers.
pub struct AppState<R>
where
    R: QuoteRepository,
{
    /// Use case for quote CRUD.
    pub quotes: Arc<ManageQuotesUseCase<R>>,
    /// Application version.
    pub version: String,
    /// When the state was created.
    pub started_at: Instant,
    /// Largest accepted request body in bytes.
    pub body_limit: usize,
}

impl<R> AppState<R>
where
    R: QuoteRepository,
{
    /// Create state with the default body limit.
    pub fn new(quotes: Arc<ManageQuotesUseCase<R>>, version: impl Into<String>) -> Self {
        Self {
            quotes,
            version: version.into(),
            started_at: Instant::now(),
            body_limit: DEFAULT_MAX_BODY_BYTES,
        }
    }

    /// Override the request body limit.
    #[must_use]
    pub fn with_body_limit(mut self, body_limit: usize) -> Self {
        self.body_limit = body_limit;
        self
    }
}

impl<R> Clone for AppState<R>
where
    R: QuoteRepository,
{
    fn clone(&self) -> Self {
        Self {
            quotes: Arc::clone(&self.quotes),
            version: self.version.clone(),
            started_at: self.started_at,
            body_limit: self.body_limit,
        }
    }
}

/// Create the HTTP router with all endpoints.
pub fn create_router<R>(state: AppState<R>) -> Router
where
    R: QuoteRepository + 'static,
{
    let body_limit = state.body_limit;

    let routes = Router::new()
        .route(
            "/api/quotes",
            get(list_quotes::<R>)
                .post(create_quote::<R>)
                .options(collection_options)
                .fallback(unmatched_route),
        )
        .route(
            "/api/quotes/{id}",
            get(get_quote::<R>)
                .put(update_quote::<R>)
                .delete(delete_quote::<R>)
                .options(item_options)
                .fallback(unmatched_route),
        )
        .route(
            "/health",
            get(health_check::<R>)
                .options(read_only_options)
                .fallback(unmatched_route),
        )
        .route(
            "/metrics",
            get(metrics_handler)
                .options(read_only_options)
                .fallback(unmatched_route),
        )
        .fallback(unmatched_route)
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state);

    // Normalization runs before routing.
    Router::new()
        .fallback_service(routes)
        .layer(middleware::from_fn(normalize_path))
        .layer(middleware::from_fn(trace_requests))
}

/// List all quotes.
async fn list_quotes<R>(State(state): State<AppState<R>>) -> Result<Json<Vec<QuoteDto>>, ApiError>
where
    R: QuoteRepository,
{
    Ok(Json(state.quotes.list().await?))
}

/// Create a quote.
async fn create_quote<R>(
    State(state): State<AppState<R>>,
    QuotePayload(input): QuotePayload,
) -> Result<(StatusCode, Json<QuoteDto>), ApiError>
where
    R: QuoteRepository,
{
    let created = state.quotes.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Fetch a quote by id.
async fn get_quote<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<Json<QuoteDto>, ApiError>
where
    R: QuoteRepository,
{
    Ok(Json(state.quotes.get(&id).await?))
}

/// Replace a quote's text and author.
async fn update_quote<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    QuotePayload(input): QuotePayload,
) -> Result<Json<QuoteDto>, ApiError>
where
    R: QuoteRepository,
{
    Ok(Json(state.quotes.update(&id, input).await?))
}

/// Delete a quote.
async fn delete_quote<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError>
where
    R: QuoteRepository,
{
    state.quotes.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Health check endpoint.
async fn health_check<R>(State(state): State<AppState<R>>) -> Result<Json<HealthResponse>, ApiError>
where
    R: QuoteRepository,
{
    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        uptime_secs: state.started_at.elapsed().as_secs(),
        quote_count: state.quotes.count().await?,
    }))
}

/// Prometheus metrics endpoint.
async fn metrics_handler() -> impl IntoResponse {
    get_metrics_handle().map_or_else(
        || {
            (
                StatusCode::SERVICE_UNAVAILABLE,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                "Metrics not initialized".to_string(),
            )
        },
        |handle| {
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
                handle.render(),
            )
        },
    )
}

async fn collection_options() -> Response {
    allowed_methods("GET,HEAD,POST")
}

async fn item_options() -> Response {
    allowed_methods("GET,HEAD,PUT,DELETE")
}

async fn read_only_options() -> Response {
    allowed_methods("GET,HEAD")
}

fn allowed_methods(methods: &'static str) -> Response {
    (StatusCode::OK, [(header::ALLOW, methods)], methods).into_response()
}

/// Reports the path as the client sent it, before normalization.
async fn unmatched_route(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::RouteNotFound {
        method,
        path: uri.path().to_string(),
    }
}

async fn normalize_path(mut request: Request, next: Next) -> Response {
    if request.extensions().get::<OriginalUri>().is_none() {
        let original = OriginalUri(request.uri().clone());
        request.extensions_mut().insert(original);
    }
    if let Some(normalized) = normalized_uri(request.uri()) {
        *request.uri_mut() = normalized;
    }
    next.run(request).await
}

/// Lower-case the path and drop one trailing slash, keeping the query.
/// Returns `None` when the path is already normalized.
fn normalized_uri(uri: &Uri) -> Option<Uri> {
    let path = uri.path();
    let trimmed = match path.strip_suffix('/') {
        Some(rest) if !rest.is_empty() => rest,
        _ => path,
    };
    let normalized = trimmed.to_ascii_lowercase();
    if normalized == path {
        return None;
    }

    let path_and_query = match uri.query() {
        Some(query) => format!("{normalized}?{query}"),
        None => normalized,
    };
    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(path_and_query.parse().ok()?);
    Uri::from_parts(parts).ok()
}

async fn trace_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    let elapsed = started.elapsed();
    let status = response.status();
    record_http_request(method.as_str(), status.as_u16(), elapsed);
    tracing::info!(
        method = %method,
        path = %path,
        status = status.as_u16(),
        latency = ?elapsed,
        "Request handled"
    );

    response
}
