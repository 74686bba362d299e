#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt;

use moodlens_api::config::ServerConfig;
use moodlens_api::router::build_app_router;
use moodlens_api::session::SESSION_COOKIE_NAME;
use moodlens_api::state::AppState;
use moodlens_classifier::config::ClassifierConfig;
use moodlens_classifier::registry::ClassifierRegistry;
use moodlens_classifier::{ClassifierError, Prediction, SentimentClassifier};

/// Score returned by the Turkish stub; renders as `0.11`.
pub const TURKISH_SCORE: f64 = 0.111;
/// Score returned by the English stub; renders as `0.88`.
pub const ENGLISH_SCORE: f64 = 0.876;

/// Deterministic classifier: `NEGATIVE` for text containing "hate" or
/// "nefret", `POSITIVE` otherwise, always with a fixed score.
pub struct StubClassifier {
    pub score: f64,
    pub calls: Arc<AtomicUsize>,
}

#[async_trait]
impl SentimentClassifier for StubClassifier {
    async fn classify(&self, text: &str) -> Result<Prediction, ClassifierError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let label = if text.contains("hate") || text.contains("nefret") {
            "NEGATIVE"
        } else {
            "POSITIVE"
        };
        Ok(Prediction {
            label: label.to_string(),
            score: self.score,
        })
    }
}

/// Classifier that always fails, as an unreachable model would.
pub struct FailingClassifier;

#[async_trait]
impl SentimentClassifier for FailingClassifier {
    async fn classify(&self, _text: &str) -> Result<Prediction, ClassifierError> {
        Err(ClassifierError::EmptyResponse)
    }
}

/// A router wired like production plus handles for inspecting side effects.
pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    pub upload_dir: TempDir,
    pub turkish_calls: Arc<AtomicUsize>,
    pub english_calls: Arc<AtomicUsize>,
}

impl TestApp {
    pub fn turkish_calls(&self) -> usize {
        self.turkish_calls.load(Ordering::SeqCst)
    }

    pub fn english_calls(&self) -> usize {
        self.english_calls.load(Ordering::SeqCst)
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(upload_dir: &TempDir) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        upload_dir: upload_dir.path().to_path_buf(),
        max_upload_bytes: 1024 * 1024,
        request_timeout_secs: 30,
        secure_cookies: false,
        session_idle_minutes: 60,
        classifier: ClassifierConfig::default(),
    }
}

/// Build the full application with stub classifiers for both languages.
pub fn build_test_app(pool: SqlitePool) -> TestApp {
    let turkish_calls = Arc::new(AtomicUsize::new(0));
    let english_calls = Arc::new(AtomicUsize::new(0));
    let registry = ClassifierRegistry::new(
        Arc::new(StubClassifier {
            score: TURKISH_SCORE,
            calls: Arc::clone(&turkish_calls),
        }),
        Arc::new(StubClassifier {
            score: ENGLISH_SCORE,
            calls: Arc::clone(&english_calls),
        }),
    );
    build_test_app_with(pool, registry, turkish_calls, english_calls)
}

/// Build the full application around an explicit classifier registry, using
/// the same router builder as the binary.
pub fn build_test_app_with(
    pool: SqlitePool,
    registry: ClassifierRegistry,
    turkish_calls: Arc<AtomicUsize>,
    english_calls: Arc<AtomicUsize>,
) -> TestApp {
    let upload_dir = tempfile::tempdir().expect("temp upload dir");
    let config = test_config(&upload_dir);

    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config.clone()),
        classifiers: Arc::new(registry),
    };

    let router = build_app_router(state, &config);

    TestApp {
        router,
        pool,
        upload_dir,
        turkish_calls,
        english_calls,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

fn with_cookie(builder: axum::http::request::Builder, cookie: Option<&str>) -> axum::http::request::Builder {
    match cookie {
        Some(c) => builder.header(COOKIE, c),
        None => builder,
    }
}

/// Send a GET request, optionally carrying a session cookie.
pub async fn get(app: &TestApp, uri: &str, cookie: Option<&str>) -> Response<Body> {
    let request = with_cookie(Request::builder().method(Method::GET).uri(uri), cookie)
        .body(Body::empty())
        .unwrap();
    app.router.clone().oneshot(request).await.unwrap()
}

/// URL-encode a flat list of form fields.
pub fn encode_form(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
        .collect::<Vec<_>>()
        .join("&")
}

fn encode_component(value: &str) -> String {
    let mut out = String::new();
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            b' ' => out.push('+'),
            other => out.push_str(&format!("%{other:02X}")),
        }
    }
    out
}

/// Send a URL-encoded form POST, optionally carrying a session cookie.
pub async fn post_form(
    app: &TestApp,
    uri: &str,
    fields: &[(&str, &str)],
    cookie: Option<&str>,
) -> Response<Body> {
    let request = with_cookie(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded"),
        cookie,
    )
    .body(Body::from(encode_form(fields)))
    .unwrap();
    app.router.clone().oneshot(request).await.unwrap()
}

const BOUNDARY: &str = "moodlens-test-boundary";

/// Send a multipart upload with a single `file` field.
pub async fn post_upload(
    app: &TestApp,
    filename: &str,
    content: &[u8],
    cookie: Option<&str>,
) -> Response<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: text/plain\r\n\r\n");
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    post_multipart(app, body, cookie).await
}

/// Send a multipart body with no parts at all.
pub async fn post_empty_multipart(app: &TestApp, cookie: Option<&str>) -> Response<Body> {
    post_multipart(app, format!("--{BOUNDARY}--\r\n").into_bytes(), cookie).await
}

async fn post_multipart(app: &TestApp, body: Vec<u8>, cookie: Option<&str>) -> Response<Body> {
    let request = with_cookie(
        Request::builder()
            .method(Method::POST)
            .uri("/upload")
            .header(CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}")),
        cookie,
    )
    .body(Body::from(body))
    .unwrap();
    app.router.clone().oneshot(request).await.unwrap()
}

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

/// Collect a response body into a UTF-8 string.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body should be UTF-8")
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

/// The `Location` header of a redirect.
pub fn location(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// Assert `response` is a 303 redirect to `target`.
pub fn assert_redirect(response: &Response<Body>, target: &str) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER, "expected a redirect");
    assert_eq!(location(response).as_deref(), Some(target));
}

/// The `name=value` pair of the session cookie set by `response`, if any.
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter(|v| v.starts_with(&format!("{SESSION_COOKIE_NAME}=")))
        .filter_map(|v| v.split(';').next())
        .map(str::to_string)
        .next()
}

/// Count how many analysis rows a result page contains.
pub fn result_rows(body: &str) -> usize {
    body.matches("<tr class=\"result\">").count()
}

/// Extract the rendered `(sentiment, score)` pairs from a result page.
pub fn result_cells(body: &str) -> Vec<(String, String)> {
    let cell = |rest: &str, class: &str| -> Option<String> {
        let open = format!("<td class=\"{class}\">");
        let start = rest.find(&open)? + open.len();
        let end = rest[start..].find("</td>")?;
        Some(rest[start..start + end].to_string())
    };

    body.split("<tr class=\"result\">")
        .skip(1)
        .filter_map(|row| Some((cell(row, "sentiment")?, cell(row, "score")?)))
        .collect()
}

// ---------------------------------------------------------------------------
// Flow helpers
// ---------------------------------------------------------------------------

/// Register `username` through the HTTP form.
pub async fn register(app: &TestApp, username: &str, password: &str) -> Response<Body> {
    post_form(
        app,
        "/register",
        &[
            ("username", username),
            ("password", password),
            ("confirm_password", password),
        ],
        None,
    )
    .await
}

/// Register and log in, returning the session cookie.
pub async fn register_and_login(app: &TestApp, username: &str, password: &str) -> String {
    let response = register(app, username, password).await;
    assert_redirect(&response, "/login");

    let response = post_form(
        app,
        "/login",
        &[("username", username), ("password", password)],
        None,
    )
    .await;
    assert_redirect(&response, "/");
    session_cookie(&response).expect("login should set a session cookie")
}
