use leptos::prelude::*;

use crate::domain::a002_inquiry::ui::TrackInquiry;

#[component]
pub fn TrackPage() -> impl IntoView {
    view! {
        <div class="page page--track">
            <section class="page-hero">
                <p class="page-hero__eyebrow">"Quote Requests"</p>
                <h1 class="page-hero__title">"Track Your Request"</h1>
                <p class="page-hero__subtitle">
                    "Enter the reference code from your confirmation email to see where your request stands"
                </p>
            </section>
            <section class="container container--narrow">
                <TrackInquiry />
            </section>
        </div>
    }
}
