//! HTTP Middleware
//!
//! - request_id_middleware: 为每个请求分配 ID，写入 extensions 和 `X-Request-Id` 响应头
//! - request_logger_middleware: 请求完成后记录 method / path / status / latency

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// 请求 ID，handler 可通过 `Extension<RequestId>` 读取
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(String);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// 请求 ID 中间件
///
/// 必须是最外层：后续中间件和 handler 的日志都在带 `request_id` 的 span 内输出。
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = RequestId::new();
    request.extensions_mut().insert(request_id.clone());

    let span = tracing::info_span!("request", request_id = %request_id);
    span.in_scope(|| tracing::debug!("Request received"));

    let mut response = next.run(request).instrument(span).await;

    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response
            .headers_mut()
            .insert(REQUEST_ID_HEADER.clone(), value);
    }

    response
}

/// 访问日志中间件
///
/// 无论成功还是错误响应都输出一条记录；5xx 为 error，4xx 为 warn。
pub async fn request_logger_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    let status = response.status().as_u16();

    if response.status().is_server_error() {
        tracing::error!(%method, %path, status, latency_ms, "http request");
    } else if response.status().is_client_error() {
        tracing::warn!(%method, %path, status, latency_ms, "http request");
    } else {
        tracing::info!(%method, %path, status, latency_ms, "http request");
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        routing::get,
        Extension, Router,
    };
    use std::io;
    use std::sync::{Arc, Mutex};
    use tower::util::ServiceExt;

    /// 收集日志输出的内存 writer
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        /// 访问日志记录（每行一条）
        fn access_records(&self) -> Vec<String> {
            String::from_utf8_lossy(&self.0.lock().unwrap())
                .lines()
                .filter(|line| line.contains("http request"))
                .map(str::to_string)
                .collect()
        }
    }

    async fn send_logged(uri: &str) -> (StatusCode, Vec<String>) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .without_time()
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let response = create_test_router()
            .oneshot(get_request(uri))
            .await
            .unwrap();
        (response.status(), logs.access_records())
    }

    fn assert_access_record(record: &str, level: &str, path: &str, status: u16) {
        assert!(record.contains(level), "{record}");
        assert!(record.contains("method=GET"), "{record}");
        assert!(record.contains(&format!("path={path}")), "{record}");
        assert!(record.contains(&format!("status={status}")), "{record}");
        assert!(record.contains("latency_ms="), "{record}");
        assert!(record.contains("request_id="), "{record}");
    }

    async fn echo_request_id(Extension(request_id): Extension<RequestId>) -> String {
        request_id.to_string()
    }

    async fn error_handler() -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn create_test_router() -> Router {
        Router::new()
            .route("/echo", get(echo_request_id))
            .route("/error", get(error_handler))
            .layer(axum::middleware::from_fn(request_logger_middleware))
            .layer(axum::middleware::from_fn(request_id_middleware))
    }

    fn get_request(uri: &str) -> HttpRequest<Body> {
        HttpRequest::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_request_id_header_matches_extension() {
        let app = create_test_router();
        let response = app.oneshot(get_request("/echo")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let header = response
            .headers()
            .get("X-Request-Id")
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(Uuid::parse_str(&header).is_ok());

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(body, header.as_bytes());
    }

    #[tokio::test]
    async fn test_request_ids_are_unique() {
        let app = create_test_router();
        let first = app.clone().oneshot(get_request("/echo")).await.unwrap();
        let second = app.oneshot(get_request("/echo")).await.unwrap();

        assert_ne!(
            first.headers().get(&REQUEST_ID_HEADER),
            second.headers().get(&REQUEST_ID_HEADER)
        );
    }

    #[tokio::test]
    async fn test_error_response_still_tagged() {
        let app = create_test_router();
        let response = app.oneshot(get_request("/error")).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers().contains_key(&REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn test_logger_records_success() {
        let (status, records) = send_logged("/echo").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(records.len(), 1, "{records:?}");
        assert_access_record(&records[0], "INFO", "/echo", 200);
    }

    #[tokio::test]
    async fn test_logger_records_client_error() {
        let (status, records) = send_logged("/missing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(records.len(), 1, "{records:?}");
        assert_access_record(&records[0], "WARN", "/missing", 404);
    }

    #[tokio::test]
    async fn test_logger_records_server_error() {
        let (status, records) = send_logged("/error").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(records.len(), 1, "{records:?}");
        assert_access_record(&records[0], "ERROR", "/error", 500);
    }

    #[tokio::test]
    async fn test_unmatched_route_still_tagged() {
        let app = create_test_router();
        let response = app.oneshot(get_request("/missing")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().contains_key(&REQUEST_ID_HEADER));
    }
}
