use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::domain::a002_inquiry::basket::use_quote_basket;
use crate::shared::company;
use crate::shared::icons::icon;

const LINKS: [(&str, &str); 4] = [
    ("/", "Home"),
    ("/products", "Products"),
    ("/contact", "Contact"),
    ("/track", "Track Request"),
];

fn is_active(current: &str, href: &str) -> bool {
    if href == "/" {
        current == "/"
    } else {
        current == href || current.starts_with(&format!("{}/", href))
    }
}

/// Top navigation with a collapsible menu on small screens
#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();
    let basket = use_quote_basket();
    let menu_open = RwSignal::new(false);

    let links = LINKS
        .iter()
        .map(|&(href, label)| {
            let class = move || {
                if is_active(&location.pathname.get(), href) {
                    "navbar__link navbar__link--active"
                } else {
                    "navbar__link"
                }
            };
            view! {
                <a href=href class=class on:click=move |_| menu_open.set(false)>
                    {label}
                </a>
            }
        })
        .collect_view();

    view! {
        <nav class="navbar">
            <div class="navbar__inner container">
                <a href="/" class="navbar__brand">
                    <span class="navbar__logo">{icon("bolt")}</span>
                    <span class="navbar__name">{company::NAME}</span>
                </a>

                <button
                    class="navbar__toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { icon("x") } else { icon("menu") }}
                </button>

                <div class=move || if menu_open.get() { "navbar__menu navbar__menu--open" } else { "navbar__menu" }>
                    {links}
                    <a href="/contact" class="navbar__quote" on:click=move |_| menu_open.set(false)>
                        "Get a Quote"
                        <Show when=move || !basket.is_empty()>
                            <span class="navbar__count">{move || basket.len()}</span>
                        </Show>
                    </a>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_link_is_active_only_on_root() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/products", "/"));
        assert!(is_active("/products", "/products"));
        assert!(!is_active("/productsx", "/products"));
        assert!(is_active("/track/extra", "/track"));
    }
}
