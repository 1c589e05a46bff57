use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;
use std::time::Duration;

use crate::shared::format::format_number;

fn print_line(status: StatusCode, method: &Method, path: &str, elapsed: Duration, size: &str) {
    // cyan for success, yellow for everything else
    let color = if status.is_success() { "36" } else { "33" };
    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        color,
        Local::now().format("%H:%M:%S"),
        elapsed.as_millis(),
        size,
        status.as_u16(),
        method,
        path
    );
}

/// Prints one console line per request: local time, duration,
/// response size, status, method and path.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // buffer the body to learn its real size
    match to_bytes(body, usize::MAX).await {
        Ok(bytes) => {
            print_line(parts.status, &method, &path, start.elapsed(), &format_number(bytes.len()));
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(e) => {
            tracing::warn!("Failed to read response body for {}: {}", path, e);
            print_line(parts.status, &method, &path, start.elapsed(), "error");
            Response::from_parts(parts, Body::default())
        }
    }
}
