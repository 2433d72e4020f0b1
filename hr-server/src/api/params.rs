//! Parameter extractor
//!
//! Parameters travel in the query string. A JSON body carrying the same
//! fields is accepted when the query string is empty.

use axum::{
    Json,
    extract::{FromRequest, Query, Request},
    http::header,
};
use serde::de::DeserializeOwned;
use shared::error::AppError;

/// Request parameters decoded from the query string (or a JSON body)
#[derive(Debug, Clone)]
pub struct Params<T>(pub T);

impl<S, T> FromRequest<S> for Params<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let query_empty = req.uri().query().is_none_or(str::is_empty);
        if query_empty && is_json(&req) {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::invalid_request(e.body_text()))?;
            return Ok(Params(value));
        }

        let Query(value) = Query::<T>::try_from_uri(req.uri())
            .map_err(|e| AppError::invalid_request(e.body_text()))?;
        Ok(Params(value))
    }
}

fn is_json(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/json"))
}
