use contracts::domain::a001_product::aggregate::Product;
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Product tile. The placeholder stays visible when there is no image or
/// the image fails to load.
#[component]
pub fn ProductCard(
    product: Product,
    on_view: Callback<Product>,
    /// Show the raw category label over the image
    #[prop(optional)]
    show_category: bool,
) -> impl IntoView {
    let image_failed = RwSignal::new(false);
    let image_loaded = RwSignal::new(false);
    let image_url = product.image_url.clone();
    let name = product.name.clone();
    let category = product.category.clone().filter(|_| show_category);

    let on_click = {
        let product = product.clone();
        move |_| on_view.run(product.clone())
    };

    view! {
        <article class="product-card" on:click=on_click>
            <div class="product-card__media">
                <div
                    class="product-card__placeholder"
                    class:product-card__placeholder--hidden=move || image_loaded.get()
                >
                    {icon("image")}
                </div>
                {image_url.map(|url| {
                    let alt = name.clone();
                    view! {
                        <Show when=move || !image_failed.get()>
                            <img
                                class="product-card__image"
                                src=url.clone()
                                alt=alt.clone()
                                loading="lazy"
                                on:load=move |_| image_loaded.set(true)
                                on:error=move |_| image_failed.set(true)
                            />
                        </Show>
                    }
                })}
            </div>
            <div class="product-card__overlay">
                <span class="product-card__view">"View"</span>
            </div>
            <div class="product-card__info">
                {category.map(|c| view! { <span class="product-card__category">{c}</span> })}
                <h3 class="product-card__name">{product.name}</h3>
            </div>
        </article>
    }
}
