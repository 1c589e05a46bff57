//! Keyword based grouping of catalog products into storefront sections.
//!
//! An explicit `category` field wins; otherwise the product name and
//! description are searched for keywords. Keyword priority differs from the
//! display order: fans are checked before lighting so that "LED Ceiling Fan"
//! lands in fans, not in lighting.

use serde::{Deserialize, Serialize};

use super::aggregate::Product;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Lighting,
    Fans,
    Switches,
    Cables,
    Accessories,
}

/// Static description of a storefront section
#[derive(Debug)]
pub struct CategoryInfo {
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Substrings searched in name + description
    pub keywords: &'static [&'static str],
    /// Values accepted in the explicit `category` field
    pub category_match: &'static [&'static str],
}

const LIGHTING: CategoryInfo = CategoryInfo {
    title: "Lighting Solutions",
    subtitle: "Illuminate Your Space",
    keywords: &[
        "light",
        "lamp",
        "led",
        "bulb",
        "ceiling light",
        "wall light",
        "outdoor light",
        "decorative light",
        "chandelier",
        "spotlight",
        "downlight",
        "panel light",
        "tube light",
        "street light",
    ],
    category_match: &["lighting", "lights", "light"],
};

const FANS: CategoryInfo = CategoryInfo {
    title: "Premium Fans",
    subtitle: "Comfort & Style",
    keywords: &[
        "fan",
        "ceiling fan",
        "exhaust fan",
        "industrial fan",
        "table fan",
        "pedestal fan",
        "ventilation",
    ],
    category_match: &["fans", "fan"],
};

const SWITCHES: CategoryInfo = CategoryInfo {
    title: "Switches & Sockets",
    subtitle: "Smart Controls",
    keywords: &["switch", "socket", "modular", "dimmer", "plug", "board", "regulator"],
    category_match: &["switches", "switch", "sockets", "socket"],
};

const CABLES: CategoryInfo = CategoryInfo {
    title: "Cables & Wiring",
    subtitle: "Safe Connections",
    keywords: &[
        "cable",
        "wire",
        "wiring",
        "copper",
        "electrical wire",
        "power cable",
        "conduit",
        "flex",
    ],
    category_match: &["cables", "cable", "wiring", "wires"],
};

const ACCESSORIES: CategoryInfo = CategoryInfo {
    title: "Electrical Accessories",
    subtitle: "Essential Components",
    keywords: &[
        "mcb",
        "panel",
        "distribution",
        "meter",
        "fuse",
        "relay",
        "contactor",
        "capacitor",
        "junction",
        "box",
        "tape",
        "accessory",
        "accessories",
    ],
    category_match: &["accessories", "accessory", "other"],
};

impl ProductCategory {
    /// Display order of the storefront sections
    pub const ALL: [ProductCategory; 5] = [
        ProductCategory::Lighting,
        ProductCategory::Fans,
        ProductCategory::Switches,
        ProductCategory::Cables,
        ProductCategory::Accessories,
    ];

    /// Order in which keyword lists are searched
    const KEYWORD_PRIORITY: [ProductCategory; 5] = [
        ProductCategory::Fans,
        ProductCategory::Switches,
        ProductCategory::Cables,
        ProductCategory::Lighting,
        ProductCategory::Accessories,
    ];

    pub const FALLBACK: ProductCategory = ProductCategory::Accessories;

    pub fn info(&self) -> &'static CategoryInfo {
        match self {
            ProductCategory::Lighting => &LIGHTING,
            ProductCategory::Fans => &FANS,
            ProductCategory::Switches => &SWITCHES,
            ProductCategory::Cables => &CABLES,
            ProductCategory::Accessories => &ACCESSORIES,
        }
    }

    /// Stable key, also used as the DOM anchor of the section
    pub fn key(&self) -> &'static str {
        match self {
            ProductCategory::Lighting => "lighting",
            ProductCategory::Fans => "fans",
            ProductCategory::Switches => "switches",
            ProductCategory::Cables => "cables",
            ProductCategory::Accessories => "accessories",
        }
    }

    pub fn title(&self) -> &'static str {
        self.info().title
    }

    pub fn subtitle(&self) -> &'static str {
        self.info().subtitle
    }

    fn matches_explicit(&self, category: &str) -> bool {
        self.info()
            .category_match
            .iter()
            .any(|m| category == *m || category.contains(m))
    }

    fn matches_keywords(&self, text: &str) -> bool {
        self.info().keywords.iter().any(|k| text.contains(k))
    }
}

/// Pick the storefront section of a product
pub fn categorize(product: &Product) -> ProductCategory {
    if let Some(category) = product.category.as_deref() {
        let category = category.trim().to_lowercase();
        if !category.is_empty() {
            if let Some(found) = ProductCategory::ALL
                .into_iter()
                .find(|c| c.matches_explicit(&category))
            {
                return found;
            }
        }
    }

    let text = product.search_text();
    ProductCategory::KEYWORD_PRIORITY
        .into_iter()
        .find(|c| c.matches_keywords(&text))
        .unwrap_or(ProductCategory::FALLBACK)
}

/// Products of one storefront section
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    pub category: ProductCategory,
    pub products: Vec<Product>,
}

impl CategoryGroup {
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }
}

/// Group products by section.
///
/// Every category is returned, in display order, so that callers can render
/// navigation consistently and skip the empty ones.
pub fn group_by_category(products: &[Product]) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = ProductCategory::ALL
        .into_iter()
        .map(|category| CategoryGroup {
            category,
            products: Vec::new(),
        })
        .collect();

    for product in products {
        let category = categorize(product);
        if let Some(group) = groups.iter_mut().find(|g| g.category == category) {
            group.products.push(product.clone());
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, description: Option<&str>, category: Option<&str>) -> Product {
        Product {
            id: 0,
            name: name.into(),
            description: description.map(Into::into),
            image_url: None,
            category: category.map(Into::into),
        }
    }

    #[test]
    fn explicit_category_wins_over_keywords() {
        let p = product("Copper Wire Coil", None, Some("Lights"));
        assert_eq!(categorize(&p), ProductCategory::Lighting);
    }

    #[test]
    fn explicit_category_is_trimmed_and_case_insensitive() {
        assert_eq!(
            categorize(&product("Anything", None, Some("  FANS "))),
            ProductCategory::Fans
        );
        assert_eq!(
            categorize(&product("Anything", None, Some("Other"))),
            ProductCategory::Accessories
        );
        assert_eq!(
            categorize(&product("Anything", None, Some("Wall Sockets"))),
            ProductCategory::Switches
        );
    }

    #[test]
    fn unknown_explicit_category_falls_through_to_keywords() {
        let p = product("Exhaust Fan 9 inch", None, Some("Appliances"));
        assert_eq!(categorize(&p), ProductCategory::Fans);
    }

    #[test]
    fn fans_are_checked_before_lighting() {
        let p = product("LED Ceiling Fan", Some("Energy saving"), None);
        assert_eq!(categorize(&p), ProductCategory::Fans);
    }

    #[test]
    fn keyword_matches_in_description() {
        let p = product("FR 1.5 sq mm", Some("Single core copper, 90m"), None);
        assert_eq!(categorize(&p), ProductCategory::Cables);
        let p = product("Anchor Roma", Some("6A modular range"), None);
        assert_eq!(categorize(&p), ProductCategory::Switches);
    }

    #[test]
    fn lighting_and_accessories_keywords() {
        assert_eq!(
            categorize(&product("9W LED Bulb", None, None)),
            ProductCategory::Lighting
        );
        assert_eq!(
            categorize(&product("MCB 32A Double Pole", None, None)),
            ProductCategory::Accessories
        );
    }

    #[test]
    fn unmatched_product_uses_fallback() {
        let p = product("Gift voucher", None, None);
        assert_eq!(categorize(&p), ProductCategory::Accessories);
    }

    #[test]
    fn groups_keep_display_order_and_input_order() {
        let products = vec![
            product("Pedestal Fan", None, None),
            product("Tube Light 20W", None, None),
            product("Table Fan", None, None),
        ];
        let groups = group_by_category(&products);
        assert_eq!(groups.len(), 5);
        assert_eq!(groups[0].category, ProductCategory::Lighting);
        assert_eq!(groups[0].len(), 1);
        assert_eq!(groups[1].category, ProductCategory::Fans);
        let fan_names: Vec<&str> = groups[1].products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(fan_names, vec!["Pedestal Fan", "Table Fan"]);
        assert!(groups[2].is_empty());
    }
}
