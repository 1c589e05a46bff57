use serde::{Deserialize, Serialize};

use crate::domain::common::AggregateRoot;

// ============================================================================
// Aggregate Root
// ============================================================================

/// Catalog item offered by the distributor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl Product {
    pub fn from_dto(id: i32, dto: ProductDto) -> Self {
        Self {
            id,
            name: dto.name.trim().to_string(),
            description: non_blank(dto.description),
            image_url: non_blank(dto.image_url),
            category: non_blank(dto.category),
        }
    }

    /// Apply an update payload in place
    pub fn update(&mut self, dto: &ProductDto) {
        self.name = dto.name.trim().to_string();
        self.description = non_blank(dto.description.clone());
        self.image_url = non_blank(dto.image_url.clone());
        self.category = non_blank(dto.category.clone());
    }

    /// Text used by the keyword categorizer: name and description
    pub fn search_text(&self) -> String {
        format!(
            "{} {}",
            self.name,
            self.description.as_deref().unwrap_or_default()
        )
        .to_lowercase()
    }
}

impl AggregateRoot for Product {
    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "product"
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Create/update payload for a product
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDto {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl ProductDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name cannot be empty".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_uses_image_url_camel_case_on_the_wire() {
        let json = r#"{"id":3,"name":"Ceiling Fan","description":null,"imageUrl":"/img/fan.png","category":"Fans"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.image_url.as_deref(), Some("/img/fan.png"));
        assert_eq!(Product::full_name(), "a001_product");
    }

    #[test]
    fn missing_optional_fields_default_to_none() {
        let product: Product = serde_json::from_str(r#"{"id":1,"name":"Fuse"}"#).unwrap();
        assert_eq!(product.description, None);
        assert_eq!(product.category, None);
    }

    #[test]
    fn from_dto_trims_and_drops_blank_fields() {
        let dto = ProductDto {
            name: "  Copper Wire  ".into(),
            description: Some("   ".into()),
            image_url: None,
            category: Some(" Cables ".into()),
        };
        let product = Product::from_dto(9, dto);
        assert_eq!(product.name, "Copper Wire");
        assert_eq!(product.description, None);
        assert_eq!(product.category.as_deref(), Some("Cables"));
    }

    #[test]
    fn blank_name_is_rejected() {
        let dto = ProductDto {
            name: " ".into(),
            ..Default::default()
        };
        assert_eq!(dto.validate(), Err("Name cannot be empty".to_string()));
    }
}
