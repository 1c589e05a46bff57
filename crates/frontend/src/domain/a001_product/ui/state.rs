use contracts::domain::a001_product::aggregate::Product;
use leptos::prelude::*;

use super::super::api;

/// Catalog fetched once per page
#[derive(Clone, Copy)]
pub struct ProductsState {
    pub products: RwSignal<Vec<Product>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl ProductsState {
    /// Create the signals and start loading
    pub fn load() -> Self {
        let state = Self {
            products: RwSignal::new(Vec::new()),
            loading: RwSignal::new(true),
            error: RwSignal::new(None),
        };

        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_products().await {
                Ok(items) => {
                    log::debug!("Loaded {} products", items.len());
                    state.products.set(items);
                }
                Err(e) => state.error.set(Some(e)),
            }
            state.loading.set(false);
        });

        state
    }
}
