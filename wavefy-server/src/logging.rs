use std::time::{Duration, Instant};

use axum::{
    extract::Request,
    http::{Method, StatusCode},
    middleware::Next,
    response::Response,
};
use log::info;

/// Logs every API request along with its status and how long it took
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    if let Some(line) = request_line(&method, &path, response.status(), start.elapsed()) {
        info!("{}", line);
    }

    response
}

/// Formats the log line for a finished request, or nothing if it's not an API request
fn request_line(method: &Method, path: &str, status: StatusCode, elapsed: Duration) -> Option<String> {
    if !path.starts_with(crate::API_PREFIX) {
        return None;
    }

    Some(format!(
        "{} {} {} in {}ms",
        method,
        path,
        status.as_u16(),
        elapsed.as_millis()
    ))
}
