use contracts::domain::a001_product::aggregate::Product;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, error_message};

/// GET /api/products
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    let response = Request::get(&api_url("/api/products"))
        .send()
        .await
        .map_err(|e| {
            log::error!("Product request failed: {}", e);
            "Failed to fetch products".to_string()
        })?;

    if !response.ok() {
        return Err(error_message(response, "Failed to fetch products").await);
    }

    response
        .json::<Vec<Product>>()
        .await
        .map_err(|e| format!("Failed to parse products: {}", e))
}
