use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a001_product::category::categorize;
use leptos::prelude::*;

use crate::domain::a002_inquiry::basket::use_quote_basket;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;

const DEFAULT_DESCRIPTION: &str = "A premium quality product designed to meet the highest \
standards of performance and aesthetics. Contact us for detailed specifications.";

fn placeholder() -> impl IntoView {
    view! { <div class="product-details__placeholder">{icon("image")}</div> }
}

/// Detail dialog for one product with a shortcut into the quote form
#[component]
pub fn ProductDetails(product: Product, on_close: Callback<()>) -> impl IntoView {
    let basket = use_quote_basket();
    let image_failed = RwSignal::new(false);

    let Product {
        id,
        name,
        description,
        image_url,
        category,
    } = product.clone();
    let section = categorize(&product).title();
    let description = description.unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());
    let alt = name.clone();

    view! {
        <Modal on_close=on_close class="product-details">
            <div class="product-details__media">
                {match image_url {
                    Some(url) => view! {
                        <Show when=move || !image_failed.get() fallback=placeholder>
                            <img
                                src=url.clone()
                                alt=alt.clone()
                                on:error=move |_| image_failed.set(true)
                            />
                        </Show>
                    }.into_any(),
                    None => placeholder().into_any(),
                }}
            </div>
            <div class="product-details__body">
                <p class="product-details__eyebrow">{section}</p>
                <h2 class="product-details__name">{name}</h2>
                <div class="section-header__rule"></div>

                <h3 class="product-details__label">"Description"</h3>
                <p class="product-details__text">{description}</p>

                {category.map(|c| view! {
                    <h3 class="product-details__label">"Category"</h3>
                    <p class="product-details__text">{c}</p>
                })}

                <div class="product-details__actions">
                    // the router turns this into a client-side navigation
                    <a
                        href="/contact"
                        class="button button--primary"
                        on:click=move |_| {
                            basket.add(id);
                            on_close.run(());
                        }
                    >
                        {move || if basket.contains(id) { "Continue to quote" } else { "Request a quote" }}
                    </a>
                    <Button variant="outline" on_click=Callback::new(move |_| on_close.run(()))>
                        "Close"
                    </Button>
                </div>
            </div>
        </Modal>
    }
}
