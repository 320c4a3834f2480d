//! Shared test fixtures: router construction mirroring `main.rs`, stub
//! collaborators, seed helpers and request helpers.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use shutterdesk_api::auth::jwt::{generate_access_token, JwtConfig};
use shutterdesk_api::auth::password::hash_password;
use shutterdesk_api::config::ServerConfig;
use shutterdesk_api::routes;
use shutterdesk_api::state::AppState;
use shutterdesk_core::types::DbId;
use shutterdesk_db::models::user::CreateUser;
use shutterdesk_db::repositories::UserRepo;
use shutterdesk_media::{
    DocumentRenderer, DocumentRendererError, ImageProcessor, ImageProcessorError, InvoiceDocument,
    LocalMediaStore, MediaStore, OcrLine,
};
use shutterdesk_payments::{BillRequest, CheckoutSession, PaymentGateway, PaymentGatewayError};

/// Marker bytes the stub renderer emits, so tests can recognize "the PDF".
pub const STUB_PDF_BYTES: &[u8] = b"%PDF-1.4 stub";

/// Bill code the stub gateway hands out.
pub const STUB_BILL_CODE: &str = "testbill01";

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

// ---------------------------------------------------------------------------
// Stub collaborators
// ---------------------------------------------------------------------------

/// Deterministic stand-in for the image-processing sidecar: "watermarks"
/// by prefixing the bytes and always reads the same OCR lines.
pub struct StubProcessor;

#[async_trait]
impl ImageProcessor for StubProcessor {
    async fn watermark(
        &self,
        bytes: &[u8],
        _filename: &str,
    ) -> Result<Vec<u8>, ImageProcessorError> {
        let mut out = b"WM:".to_vec();
        out.extend_from_slice(bytes);
        Ok(out)
    }

    async fn read_text(
        &self,
        _bytes: &[u8],
        _filename: &str,
    ) -> Result<Vec<OcrLine>, ImageProcessorError> {
        Ok(vec![
            OcrLine {
                text: "1234".to_string(),
                confidence: 0.93,
            },
            OcrLine {
                text: "marathon finisher".to_string(),
                confidence: 0.88,
            },
            OcrLine {
                text: "A12".to_string(),
                confidence: 0.95,
            },
            OcrLine {
                text: "9999".to_string(),
                confidence: 0.2,
            },
        ])
    }
}

/// Renderer stub returning a fixed byte marker instead of a real PDF.
pub struct StubRenderer;

#[async_trait]
impl DocumentRenderer for StubRenderer {
    async fn render_invoice(
        &self,
        _document: &InvoiceDocument,
    ) -> Result<Vec<u8>, DocumentRendererError> {
        Ok(STUB_PDF_BYTES.to_vec())
    }
}

/// Gateway stub that accepts every bill and echoes the amount into the URL.
pub struct StubGateway;

#[async_trait]
impl PaymentGateway for StubGateway {
    async fn create_bill(
        &self,
        request: &BillRequest,
    ) -> Result<CheckoutSession, PaymentGatewayError> {
        Ok(CheckoutSession {
            bill_code: STUB_BILL_CODE.to_string(),
            payment_url: format!("https://pay.test/{}/{}", STUB_BILL_CODE, request.amount_cents),
        })
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Application state wired with stub collaborators, for tests that mount
/// their own routes.
pub fn test_state(pool: PgPool, media_root: PathBuf) -> AppState {
    AppState {
        pool,
        config: Arc::new(test_config()),
        media_store: Arc::new(LocalMediaStore::new(media_root)),
        image_processor: Arc::new(StubProcessor),
        document_renderer: Arc::new(StubRenderer),
        payment_gateway: Arc::new(StubGateway),
    }
}

/// Build the full application router with all middleware layers and stub
/// collaborators, rooting the media store at `media_root`.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app_with_media_root(pool: PgPool, media_root: PathBuf) -> Router {
    let state = test_state(pool, media_root);

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// A unique directory under the system temp dir, for tests that never
/// look at stored files.
pub fn throwaway_media_root() -> PathBuf {
    std::env::temp_dir().join(format!("shutterdesk-test-{}", uuid::Uuid::new_v4()))
}

/// [`build_test_app_with_media_root`] with a throwaway media root.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_media_root(pool, throwaway_media_root())
}

// ---------------------------------------------------------------------------
// Seed helpers
// ---------------------------------------------------------------------------

/// Create a user directly in the database and return its id plus a valid
/// access token, bypassing the HTTP login flow (covered by auth_api tests).
pub async fn seed_user(pool: &PgPool, username: &str, role: &str) -> (DbId, String) {
    let hashed = hash_password("test_password_123!").expect("hashing should succeed");
    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: format!("{username}@test.com"),
            password_hash: hashed,
            role: role.to_string(),
        },
    )
    .await
    .expect("user creation should succeed");

    let token = generate_access_token(user.id, role, &test_config().jwt)
        .expect("token generation should succeed");
    (user.id, token)
}

/// Shorthand for the common case: a photographer-tenant plus token.
pub async fn seed_photographer(pool: &PgPool, username: &str) -> (DbId, String) {
    seed_user(pool, username, "photographer").await
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes()
        .to_vec()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn patch_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::PATCH)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a hand-built `multipart/form-data` body.
pub async fn post_multipart_auth(
    app: Router,
    uri: &str,
    boundary: &str,
    body: Vec<u8>,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Build a `multipart/form-data` body with a `file` part and optional
/// extra text fields.
pub fn multipart_body(
    boundary: &str,
    filename: &str,
    file_bytes: &[u8],
    text_fields: &[(&str, &str)],
) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in text_fields {
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(file_bytes);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    body
}
