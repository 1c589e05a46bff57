use contracts::domain::a002_inquiry::aggregate::{
    ContactRequest, ContactResponse, TrackInquiryResponse,
};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, error_message};

const SEND_FAILED: &str = "Failed to send message. Please try again.";
const NOT_FOUND: &str = "Inquiry not found";

/// POST /contact
pub async fn send_contact_message(request: &ContactRequest) -> Result<ContactResponse, String> {
    let response = Request::post(&api_url("/contact"))
        .json(request)
        .map_err(|e| format!("Failed to encode request: {}", e))?
        .send()
        .await
        .map_err(|e| {
            log::error!("Contact request failed: {}", e);
            SEND_FAILED.to_string()
        })?;

    if !response.ok() {
        return Err(error_message(response, SEND_FAILED).await);
    }

    response
        .json::<ContactResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// GET /contact/track/{code}
pub async fn track_inquiry(reference_code: &str) -> Result<TrackInquiryResponse, String> {
    let path = format!(
        "/contact/track/{}",
        urlencoding::encode(reference_code.trim())
    );
    let response = Request::get(&api_url(&path)).send().await.map_err(|e| {
        log::error!("Tracking request failed: {}", e);
        NOT_FOUND.to_string()
    })?;

    if !response.ok() {
        return Err(error_message(response, NOT_FOUND).await);
    }

    response
        .json::<TrackInquiryResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
