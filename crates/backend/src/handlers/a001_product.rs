use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a001_product::aggregate::{Product, ProductDto};
use serde_json::json;

use crate::domain::a001_product::service;
use crate::shared::error::ApiError;
use crate::shared::state::AppState;

fn not_found(id: i32) -> ApiError {
    ApiError::NotFound(format!("Product {} not found", id))
}

/// GET /api/products
pub async fn list_all(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(service::list_all(&state.db).await?))
}

/// GET /api/products/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Product>, ApiError> {
    service::get_by_id(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(id))
}

/// POST /api/products
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<ProductDto>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let product = service::create(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /api/products/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<ProductDto>,
) -> Result<Json<Product>, ApiError> {
    service::update(&state.db, id, dto)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(id))
}

/// DELETE /api/products/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    if service::delete(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

/// POST /api/products/upload
///
/// Expects a multipart field `file` holding a CSV document.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<serde_json::Value>, ApiError> {
    let mut data = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid multipart body: {}", e)))?
    {
        if field.name() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(format!("Failed to read upload: {}", e)))?;
            data = Some(bytes);
            break;
        }
    }

    let Some(data) = data else {
        return Err(ApiError::BadRequest("Missing 'file' field".into()));
    };

    let imported = service::import_csv(&state.db, &data).await?;
    Ok(Json(json!({ "success": true, "imported": imported })))
}
