//! Logging middleware

use axum::{
    body::Body,
    extract::Request,
    http::{HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

/// Response header carrying the request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request logging middleware
///
/// Every request runs inside a span tagged with a fresh request id, so the
/// judge client and service logs of one submission can be correlated. The id
/// is echoed back in `x-request-id`.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let span = info_span!("request", request_id = %request_id, method = %method, path = %path);
    let mut response = next.run(request).instrument(span.clone()).await;

    let status = response.status();
    let duration_ms = format!("{:.2}", start.elapsed().as_secs_f64() * 1000.0);

    let _entered = span.enter();
    match status {
        StatusCode::BAD_GATEWAY | StatusCode::GATEWAY_TIMEOUT => {
            warn!(status = status.as_u16(), duration_ms = %duration_ms, "Judge unavailable")
        }
        s if s.is_server_error() => {
            warn!(status = s.as_u16(), duration_ms = %duration_ms, "Request completed with server error")
        }
        s if s.is_client_error() && s != StatusCode::NOT_FOUND => {
            warn!(status = s.as_u16(), duration_ms = %duration_ms, "Request completed with client error")
        }
        s => info!(status = s.as_u16(), duration_ms = %duration_ms, "Request completed"),
    }

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}
