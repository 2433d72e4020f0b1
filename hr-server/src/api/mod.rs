//! HTTP API
//!
//! - [`health`] - service health
//! - [`employees`] - employees and the employee listing
//! - [`positions`] - positions
//! - [`divisions`] - divisions
//! - [`jobs`] - employment and dismissal
//!
//! All parameters are read from the query string (see [`Params`]).

pub mod divisions;
pub mod employees;
pub mod health;
pub mod jobs;
mod params;
pub mod positions;

use std::time::Duration;

use axum::{Router, http::HeaderName, middleware as axum_middleware};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::{REQUEST_ID_HEADER, UuidRequestId, logging_middleware};
use crate::state::AppState;

pub use params::Params;

/// Body returned by the delete routes
pub const DELETED: &str = "successfully deleted";

/// Single `id` parameter
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct IdParams {
    pub id: i64,
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(employees::router())
        .merge(positions::router())
        .merge(divisions::router())
        .merge(jobs::router())
}

/// Build the fully configured application
///
/// Used by the HTTP server and by in-process tests alike.
pub fn build_app(state: AppState, request_timeout: Duration) -> Router {
    build_router()
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(CorsLayer::permissive())
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // outermost, so the id is set before logging sees the request
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            UuidRequestId,
        ))
        .with_state(state)
}
