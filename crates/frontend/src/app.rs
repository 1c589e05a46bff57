use crate::domain::a002_inquiry::basket::QuoteBasket;
use crate::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Products picked in the catalog travel to the contact form through this
    provide_context(QuoteBasket::new());

    view! {
        <AppRoutes />
    }
}
