use leptos::prelude::*;

use crate::domain::a001_product::ui::ProductCatalog;

#[component]
pub fn ProductsPage() -> impl IntoView {
    view! {
        <div class="page page--products">
            <ProductCatalog />
        </div>
    }
}
