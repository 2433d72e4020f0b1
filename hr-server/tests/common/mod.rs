//! In-process test harness: the full router on a fresh database

#![allow(dead_code)]

use std::time::Duration;

use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use hr_server::{AppState, Config, DbService, build_app};
use serde_json::Value;
use tower::ServiceExt;

#[derive(Clone)]
pub struct TestApp {
    router: Router,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("response body is not UTF-8")
    }
}

impl TestApp {
    pub async fn new() -> Self {
        let db = DbService::in_memory().await.expect("in-memory database");
        Self::with_db(db)
    }

    /// Router over the store at `database_url` (created when missing)
    pub async fn with_database(database_url: &str) -> Self {
        let db = DbService::new(&Config::for_database(database_url))
            .await
            .expect("database");
        Self::with_db(db)
    }

    fn with_db(db: DbService) -> Self {
        Self {
            router: build_app(AppState::new(db), Duration::from_secs(30)),
        }
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("read body")
            .to_bytes()
            .to_vec();
        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn call(&self, method: Method, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("valid request");
        self.send(request).await
    }

    pub async fn call_json(&self, method: Method, uri: &str, body: Value) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("valid request");
        self.send(request).await
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.call(Method::GET, uri).await
    }

    pub async fn post(&self, uri: &str) -> TestResponse {
        self.call(Method::POST, uri).await
    }

    pub async fn put(&self, uri: &str) -> TestResponse {
        self.call(Method::PUT, uri).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.call(Method::DELETE, uri).await
    }

    /// Position 1 "Engineer" and division 1 "Platform"
    pub async fn seed_catalog(&self) {
        assert_eq!(self.post("/position/add?title=Engineer").await.status, StatusCode::OK);
        assert_eq!(self.post("/division/add?title=Platform").await.status, StatusCode::OK);
    }

    /// Create an employee and employ them in position 1; returns the employee id
    pub async fn hire(&self, name: &str, last_name: &str, division_id: i64, employed: &str) -> i64 {
        let created = self
            .post(&format!(
                "/employee/add?name={name}&last_name={last_name}&patronymic=-&birth_date=1990-01-01"
            ))
            .await;
        assert_eq!(created.status, StatusCode::OK, "{}", created.text());
        let id = created.json()["id"].as_i64().expect("employee id");

        let job = self
            .post(&format!(
                "/employment?employee_id={id}&position_id=1&division_id={division_id}&date_of_employment={employed}"
            ))
            .await;
        assert_eq!(job.status, StatusCode::OK, "{}", job.text());
        id
    }
}

/// Last names of a listing response, in order
pub fn last_names(listing: &Value) -> Vec<String> {
    listing
        .as_array()
        .expect("listing is an array")
        .iter()
        .map(|e| e["last_name"].as_str().unwrap_or_default().to_string())
        .collect()
}
