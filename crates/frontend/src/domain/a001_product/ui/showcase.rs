use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a001_product::category::{group_by_category, CategoryGroup};
use leptos::prelude::*;

use super::{ProductCard, ProductDetails, ProductsState};
use crate::shared::components::SectionHeader;
use crate::shared::icons::icon;

const PER_CATEGORY: usize = 3;

/// First products of every non-empty category
pub fn featured_groups(products: &[Product], per_category: usize) -> Vec<CategoryGroup> {
    group_by_category(products)
        .into_iter()
        .filter(|g| !g.is_empty())
        .map(|mut g| {
            g.products.truncate(per_category);
            g
        })
        .collect()
}

/// Landing page strip with a few products from each category
#[component]
pub fn ProductShowcase() -> impl IntoView {
    let state = ProductsState::load();
    let selected = RwSignal::new(None::<Product>);
    let on_view = Callback::new(move |product: Product| selected.set(Some(product)));
    let close = Callback::new(move |_: ()| selected.set(None));

    let groups = Memo::new(move |_| state.products.with(|p| featured_groups(p, PER_CATEGORY)));

    view! {
        <section class="showcase">
            <SectionHeader eyebrow="Featured" title="From Our Catalog" />
            <Show
                when=move || !state.loading.get() && state.error.get().is_none() && !groups.with(Vec::is_empty)
                fallback=|| ()
            >
                {move || groups.get().into_iter().map(|group| view! {
                    <div class="showcase__group">
                        <div class="showcase__group-header">
                            <h3 class="showcase__group-title">{group.category.title()}</h3>
                            <p class="showcase__group-subtitle">{group.category.subtitle()}</p>
                        </div>
                        <div class="catalog-grid">
                            {group.products.into_iter().map(|product| view! {
                                <ProductCard product=product on_view=on_view show_category=true />
                            }).collect_view()}
                        </div>
                    </div>
                }).collect_view()}
            </Show>
            <div class="showcase__footer">
                <a href="/products" class="button button--outline">
                    "View All Products" {icon("arrow-right")}
                </a>
            </div>
            {move || selected.get().map(|product| view! {
                <ProductDetails product=product on_close=close />
            })}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::category::ProductCategory;

    fn product(id: i32, name: &str) -> Product {
        Product {
            id,
            name: name.into(),
            description: None,
            image_url: None,
            category: None,
        }
    }

    #[test]
    fn featured_groups_skip_empty_categories_and_cap_size() {
        let products = vec![
            product(1, "Ceiling Fan"),
            product(2, "Table Fan"),
            product(3, "Exhaust Fan"),
            product(4, "Pedestal Fan"),
            product(5, "FR Copper Wire"),
        ];
        let groups = featured_groups(&products, 3);
        let categories: Vec<_> = groups.iter().map(|g| g.category).collect();
        assert_eq!(categories, vec![ProductCategory::Fans, ProductCategory::Cables]);
        assert_eq!(groups[0].len(), 3);
        assert_eq!(groups[0].products[0].id, 1);
    }
}
