//! In-process HTTP client for exercising an axum `Router` in tests.
//!
//! Requests are dispatched with `tower::ServiceExt::oneshot`, so no TCP port is bound
//! and every request runs against the same router (and therefore the same database).

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tower::util::ServiceExt;

/// In-process HTTP test client wrapping an axum `Router`.
///
/// # Example
///
/// ```rust,ignore
/// let app = TestApp::new(router().with_state(state));
///
/// let response = app.post("/api/boards").json(&json!({ "name": "Board 1" })).send().await;
/// assert_eq!(response.status, StatusCode::CREATED);
/// ```
pub struct TestApp {
    router: Router,
}

impl TestApp {
    /// Creates a `TestApp` from a fully assembled router with its state applied.
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    pub fn get(&self, path: &str) -> TestRequest<'_> {
        TestRequest::new(self, Method::GET, path)
    }

    pub fn post(&self, path: &str) -> TestRequest<'_> {
        TestRequest::new(self, Method::POST, path)
    }

    pub fn put(&self, path: &str) -> TestRequest<'_> {
        TestRequest::new(self, Method::PUT, path)
    }

    pub fn delete(&self, path: &str) -> TestRequest<'_> {
        TestRequest::new(self, Method::DELETE, path)
    }
}

/// Builder for constructing and sending a single test request.
pub struct TestRequest<'a> {
    app: &'a TestApp,
    method: Method,
    path: String,
    body: Option<Vec<u8>>,
    content_type: Option<&'static str>,
}

impl<'a> TestRequest<'a> {
    fn new(app: &'a TestApp, method: Method, path: &str) -> Self {
        Self {
            app,
            method,
            path: path.to_string(),
            body: None,
            content_type: None,
        }
    }

    /// Sets the request body as JSON and the `Content-Type` header accordingly.
    pub fn json(mut self, body: &impl Serialize) -> Self {
        self.body = Some(serde_json::to_vec(body).expect("failed to serialize request body"));
        self.content_type = Some("application/json");
        self
    }

    /// Sets a raw JSON body without checking it is well formed.
    pub fn raw_json(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self.content_type = Some("application/json");
        self
    }

    /// Sends the request through the router and collects the full response.
    pub async fn send(self) -> TestResponse {
        let mut builder = Request::builder().method(self.method).uri(&self.path);
        if let Some(content_type) = self.content_type {
            builder = builder.header(CONTENT_TYPE, content_type);
        }

        let body = match self.body {
            Some(bytes) => Body::from(bytes),
            None => Body::empty(),
        };
        let request = builder.body(body).expect("failed to build request");

        let response = self
            .app
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("failed to send request");

        let status = response.status();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("failed to read response body")
            .to_bytes()
            .to_vec();

        TestResponse { status, body }
    }
}

/// Response captured from a `TestRequest`.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Deserializes the body into `T`, panicking with the raw body on failure.
    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!(
                "failed to deserialize response body: {e}\n{}",
                String::from_utf8_lossy(&self.body)
            )
        })
    }

    /// Parses the body as an untyped JSON value.
    pub fn value(&self) -> Value {
        self.json()
    }
}
