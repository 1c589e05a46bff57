//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and turning failed
//! responses into user-facing messages.

use contracts::shared::api_error::ApiErrorBody;
use gloo_net::http::Response;

/// Get the base URL for API requests
///
/// A `STOREFRONT_API_BASE` value set at build time wins. Otherwise the URL is
/// built from the current window location, using port 3000 for the backend.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = option_env!("STOREFRONT_API_BASE") {
        return base.trim_end_matches('/').to_string();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/products");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Message for a non-2xx response: the body's `message` when the backend
/// sent one, `fallback` otherwise
pub async fn error_message(response: Response, fallback: &str) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log::warn!("API request failed with status {}", status);
    resolve_error_message(&body, fallback)
}

pub fn resolve_error_message(body: &str, fallback: &str) -> String {
    ApiErrorBody::message_from(body).unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_message_is_preferred() {
        let body = r#"{"success":false,"message":"Please enter a valid email address"}"#;
        assert_eq!(
            resolve_error_message(body, "Failed to send message. Please try again."),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn fallback_for_html_or_empty_bodies() {
        let fallback = "Inquiry not found";
        assert_eq!(resolve_error_message("", fallback), fallback);
        assert_eq!(resolve_error_message("<h1>502 Bad Gateway</h1>", fallback), fallback);
    }
}
