use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a001_product::category::{group_by_category, CategoryGroup};
use leptos::prelude::*;

use super::{ProductCard, ProductDetails, ProductsState};
use crate::shared::icons::icon;

fn scroll_to_section(id: &str) {
    if let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    {
        element.scroll_into_view();
    }
}

#[component]
fn CategorySection(group: CategoryGroup, on_view: Callback<Product>) -> impl IntoView {
    view! {
        <section id=group.category.key() class="catalog-section">
            <div class="section-header">
                <p class="section-header__eyebrow">{group.category.subtitle()}</p>
                <h2 class="section-header__title">{group.category.title()}</h2>
                <div class="section-header__rule"></div>
            </div>
            <div class="catalog-grid">
                {group.products.into_iter().map(|product| view! {
                    <ProductCard product=product on_view=on_view />
                }).collect_view()}
            </div>
        </section>
    }
}

/// Full catalog grouped by category, with a jump bar and a detail dialog
#[component]
pub fn ProductCatalog() -> impl IntoView {
    let state = ProductsState::load();
    let selected = RwSignal::new(None::<Product>);
    let on_view = Callback::new(move |product: Product| selected.set(Some(product)));
    let close = Callback::new(move |_: ()| selected.set(None));

    let groups = Memo::new(move |_| {
        state.products.with(|products| {
            group_by_category(products)
                .into_iter()
                .filter(|g| !g.is_empty())
                .collect::<Vec<_>>()
        })
    });

    let body = move || {
        if state.loading.get() {
            return view! {
                <div class="catalog-status">
                    <div class="spinner"></div>
                    <p class="catalog-status__text">"Loading Products"</p>
                </div>
            }
            .into_any();
        }
        if let Some(err) = state.error.get() {
            return view! {
                <div class="catalog-status catalog-status--error">
                    <p class="catalog-status__text">{err}</p>
                </div>
            }
            .into_any();
        }
        if groups.with(Vec::is_empty) {
            return view! {
                <div class="catalog-status">
                    {icon("package")}
                    <p class="catalog-status__text">"No products available"</p>
                    <p class="catalog-status__hint">"Check back soon for our latest collection"</p>
                </div>
            }
            .into_any();
        }

        view! {
            <nav class="catalog-nav">
                {groups.get().into_iter().map(|g| {
                    let key = g.category.key();
                    view! {
                        <button class="catalog-nav__link" on:click=move |_| scroll_to_section(key)>
                            {g.category.title()}
                            <span class="catalog-nav__count">{g.len()}</span>
                        </button>
                    }
                }).collect_view()}
            </nav>
            <div class="catalog-sections">
                {groups.get().into_iter().map(|group| view! {
                    <CategorySection group=group on_view=on_view />
                }).collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <div class="catalog">
            <section class="page-hero">
                <p class="page-hero__eyebrow">"Complete Range"</p>
                <h1 class="page-hero__title">"Our Products"</h1>
                <p class="page-hero__subtitle">
                    "Discover our curated collection of premium electrical solutions for every need"
                </p>
            </section>
            {body}
            {move || selected.get().map(|product| view! {
                <ProductDetails product=product on_close=close />
            })}
        </div>
    }
}
