use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::Response,
};
use futures::StreamExt;
use serde_json::Value;
use tracing::error;

use crate::{diagnostics::DiagnosticSink, store::LogEntry, AppState};

/// Paths that never produce a log entry.
const SKIP_PATHS: [&str; 2] = ["/swagger", "/favicon.ico"];

/// A body chunk captured for logging, decided once at capture time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapturedBody {
    Empty,
    Text(String),
}

impl CapturedBody {
    fn from_bytes(bytes: &[u8]) -> Self {
        if bytes.is_empty() {
            CapturedBody::Empty
        } else {
            // Non-UTF-8 payloads are captured lossily; they will fail JSON
            // parsing and surface verbatim in the diagnostic
            CapturedBody::Text(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}

/// Logs every request/response pair passing through the router.
///
/// The downstream response is returned to the caller byte-for-byte; logging
/// is a side effect only. The request body is buffered and the request
/// rebuilt before it reaches the handler. Of the response body, only the
/// first data chunk is considered for logging; later chunks stream through
/// untouched.
pub async fn log_requests_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    if SKIP_PATHS.contains(&request.uri().path()) {
        return Ok(next.run(request).await);
    }

    let url = request.uri().path().to_string();
    let authorization = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let (parts, body) = request.into_parts();
    let request_bytes = axum::body::to_bytes(body, usize::MAX).await.map_err(|err| {
        error!(%err, "Failed to read request body");
        StatusCode::BAD_REQUEST
    })?;
    let request_body = CapturedBody::from_bytes(&request_bytes);
    let request = Request::from_parts(parts, Body::from(request_bytes));

    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let mut chunks = body.into_data_stream();
    let first_chunk = chunks.next().await;
    let response_body = match &first_chunk {
        Some(Ok(bytes)) => CapturedBody::from_bytes(bytes),
        _ => CapturedBody::Empty,
    };
    let body = Body::from_stream(futures::stream::iter(first_chunk).chain(chunks));
    let response = Response::from_parts(parts, body);

    if let Some(entry) = build_log_entry(
        state.diagnostics.as_ref(),
        request_body,
        authorization,
        &url,
        response_body,
    ) {
        state.log_store.create(entry).map_err(|err| {
            error!(%err, "Failed to persist log entry");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
    }

    Ok(response)
}

/// Normalizes the captured bodies into a [`LogEntry`].
///
/// An empty request logs as `""` while an empty response logs as absent;
/// downstream consumers of the store rely on that asymmetry. A non-JSON body
/// emits a diagnostic and aborts the whole operation, so a malformed request
/// skips the response check entirely.
pub fn build_log_entry(
    diagnostics: &dyn DiagnosticSink,
    request: CapturedBody,
    authorization: Option<String>,
    url: &str,
    response: CapturedBody,
) -> Option<LogEntry> {
    let request = match request {
        CapturedBody::Empty => Value::String(String::new()),
        CapturedBody::Text(raw) => match parse_json(&raw) {
            Ok(value) => value,
            Err(_) => {
                diagnostics.error(&format!("Request is not JSON! Body: {raw}"));
                return None;
            }
        },
    };

    let response = match response {
        CapturedBody::Empty => None,
        CapturedBody::Text(raw) => match parse_json(&raw) {
            Ok(value) => Some(value),
            Err(_) => {
                diagnostics.error(&format!("Response is not JSON! Body: {raw}"));
                return None;
            }
        },
    };

    Some(LogEntry {
        request,
        headers: authorization,
        url: url.to_string(),
        response,
    })
}

fn parse_json(raw: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(raw)
}
