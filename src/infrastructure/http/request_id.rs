use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

pub const X_REQUEST_ID: &str = "x-request-id";

/// Longest caller-supplied id we propagate; anything longer is replaced
const MAX_REQUEST_ID_LEN: usize = 128;

/// Attach a request id to each request and echo it on the response.
///
/// A well-formed `x-request-id` sent by the caller is reused so ids can be
/// correlated across hops; otherwise a fresh UUID is generated.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|value| value.to_str().ok())
        .filter(|id| is_acceptable(id))
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let span = tracing::info_span!("request_context", request_id = %request_id);
    let mut response = next.run(request).instrument(span).await;

    if let Ok(header_value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(X_REQUEST_ID, header_value);
    }

    response
}

fn is_acceptable(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_REQUEST_ID_LEN
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}
