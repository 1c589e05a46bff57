use leptos::prelude::*;

use crate::shared::components::SectionHeader;
use crate::shared::icons::icon;

const BADGES: [(&str, &str, &str); 6] = [
    ("check-circle", "Genuine Products", "100% authentic products sourced directly from manufacturers"),
    ("shield", "Warranty Protected", "Full manufacturer warranty on every product we sell"),
    ("shield", "Secure Payments", "Safe and secure transactions on all orders"),
    ("support", "Expert Guidance", "10+ years of technical expertise to help you choose the right products"),
    ("truck", "Pan-India Delivery", "Reliable shipping across India with same-day dispatch on most orders"),
    ("package", "Bulk Orders Welcome", "Special pricing for contractors, builders & wholesale buyers"),
];

#[component]
pub fn TrustBadges() -> impl IntoView {
    view! {
        <section class="trust">
            <div class="container">
                <SectionHeader
                    eyebrow="Why Choose Us"
                    title="Your Trust, Our Priority"
                    subtitle="Every aspect of our business is built on transparency, reliability and excellence"
                />
                <div class="trust__grid">
                    {BADGES.iter().map(|&(icon_name, title, text)| view! {
                        <div class="trust-badge">
                            <div class="trust-badge__icon">{icon(icon_name)}</div>
                            <h3 class="trust-badge__title">{title}</h3>
                            <p class="trust-badge__text">{text}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
