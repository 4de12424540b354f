//! Common test utilities for HTTP integration tests

#![allow(dead_code, clippy::unwrap_used, clippy::indexing_slicing)]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use rockfall_core::Config;
use rockfall_core::config::IntakePolicy;
use serde_json::Value;
use std::sync::Once;
use tower::ServiceExt;

static INIT_LOGGER: Once = Once::new();

const BOUNDARY: &str = "rockfall-test-boundary";

/// Initialize test logging (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

/// Test configuration builder
pub struct TestConfigBuilder {
    config: Config,
}

impl TestConfigBuilder {
    /// Defaults with the standard three second analysis
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Set the simulated analysis delay
    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.config.analysis.delay_ms = delay_ms;
        self
    }

    /// Set the per-run timeout
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.config.analysis.timeout_ms = Some(timeout_ms);
        self
    }

    /// Set the accept filter policy
    pub fn with_policy(mut self, policy: IntakePolicy) -> Self {
        self.config.intake.policy = policy;
        self
    }

    /// Set the maximum accepted file size
    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.config.intake.max_file_size = max_file_size;
        self
    }

    /// Fix the heat map seed
    pub fn with_heatmap_seed(mut self, seed: u64) -> Self {
        self.config.heatmap.seed = Some(seed);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        self.config
    }

    /// Build a router from the configuration
    pub fn router(self) -> Router {
        init_test_logging();
        rockfall_api::build_router(self.config).unwrap()
    }
}

impl Default for TestConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Send a request and decode the JSON body
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

/// GET a path
pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, empty_request(Method::GET, uri)).await
}

/// POST a path without a body
pub async fn post(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, empty_request(Method::POST, uri)).await
}

/// DELETE a path
pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, empty_request(Method::DELETE, uri)).await
}

/// Upload one file into a slot
pub async fn upload(app: &Router, kind: &str, filename: &str, data: &[u8]) -> (StatusCode, Value) {
    send(
        app,
        multipart_request(&format!("/api/intake/{kind}"), Some((filename, data))),
    )
    .await
}

/// Fill both slots with files matching their accept filters
pub async fn fill_both_slots(app: &Router) {
    let (status, _) = upload(app, "imagery", "north_wall.png", &[0u8; 2048]).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = upload(app, "sensor_readings", "sensors.csv", b"depth,mm\n1,0.4\n").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ready"], true);
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Build a multipart upload with a text field and, optionally, one file part
pub fn multipart_request(uri: &str, file: Option<(&str, &[u8])>) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"note\"\r\n\r\nnorth pit\r\n"
        )
        .as_bytes(),
    );
    if let Some((filename, data)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}
