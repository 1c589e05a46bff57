use axum::extract::{Path, State};
use axum::Json;
use contracts::domain::a002_inquiry::aggregate::{
    ContactRequest, ContactResponse, Inquiry, TrackInquiryResponse, UnreadCount,
    UpdateStatusRequest,
};
use contracts::domain::a002_inquiry::reference_code::ReferenceCode;

use crate::domain::a002_inquiry::service::{self, TrackError};
use crate::shared::error::ApiError;
use crate::shared::state::AppState;

fn parse_code(code: &str) -> Result<ReferenceCode, ApiError> {
    ReferenceCode::parse(code).map_err(ApiError::BadRequest)
}

fn inquiry_not_found() -> ApiError {
    ApiError::NotFound(TrackError::NotFound.to_string())
}

/// POST /contact
pub async fn submit(
    State(state): State<AppState>,
    Json(request): Json<ContactRequest>,
) -> Result<Json<ContactResponse>, ApiError> {
    let inquiry = service::submit(
        &state.db,
        state.notifier.as_ref(),
        &state.config.company,
        request,
    )
    .await?;

    Ok(Json(ContactResponse {
        success: true,
        message: "Quote request submitted successfully!".into(),
        reference_code: inquiry.reference_code.into_inner(),
        message_id: inquiry.id,
    }))
}

/// GET /contact/track/:code
pub async fn track(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<TrackInquiryResponse>, ApiError> {
    match service::track(&state.db, &code).await {
        Ok(inquiry) => Ok(Json(inquiry.to_tracking())),
        Err(TrackError::Malformed(msg)) => Err(ApiError::BadRequest(msg)),
        Err(e @ TrackError::NotFound) => Err(ApiError::NotFound(e.to_string())),
        Err(TrackError::Storage(e)) => Err(ApiError::Internal(e)),
    }
}

/// GET /contact/admin/all
pub async fn list_all(State(state): State<AppState>) -> Result<Json<Vec<Inquiry>>, ApiError> {
    Ok(Json(service::list_all(&state.db).await?))
}

/// GET /contact/admin/unread
pub async fn list_unread(State(state): State<AppState>) -> Result<Json<Vec<Inquiry>>, ApiError> {
    Ok(Json(service::list_unread(&state.db).await?))
}

/// GET /contact/admin/unread/count
pub async fn count_unread(State(state): State<AppState>) -> Result<Json<UnreadCount>, ApiError> {
    let count = service::count_unread(&state.db).await?;
    Ok(Json(UnreadCount { count }))
}

/// GET /contact/admin/:code
pub async fn get_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Inquiry>, ApiError> {
    let code = parse_code(&code)?;
    service::get_by_code(&state.db, &code)
        .await?
        .map(Json)
        .ok_or_else(inquiry_not_found)
}

/// PUT /contact/admin/:code/status
pub async fn update_status(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(body): Json<UpdateStatusRequest>,
) -> Result<Json<Inquiry>, ApiError> {
    let code = parse_code(&code)?;
    if !service::update_status(&state.db, &code, body.status).await? {
        return Err(inquiry_not_found());
    }
    service::get_by_code(&state.db, &code)
        .await?
        .map(Json)
        .ok_or_else(inquiry_not_found)
}

/// PUT /contact/admin/:code/read
pub async fn mark_read(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Inquiry>, ApiError> {
    let code = parse_code(&code)?;
    if !service::mark_read(&state.db, &code).await? {
        return Err(inquiry_not_found());
    }
    service::get_by_code(&state.db, &code)
        .await?
        .map(Json)
        .ok_or_else(inquiry_not_found)
}
