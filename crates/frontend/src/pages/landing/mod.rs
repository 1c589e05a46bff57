//! Home page sections

mod brands;
mod certifications;
mod hero;
mod trust_badges;

use leptos::prelude::*;

use crate::domain::a001_product::ui::ProductShowcase;
use brands::AuthorizedBrands;
use certifications::Certifications;
use hero::{CallToAction, CategoryStrip, Hero, Stats};
use trust_badges::TrustBadges;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <Hero />
            <CategoryStrip />
            <Stats />
            <AuthorizedBrands />
            <ProductShowcase />
            <Certifications />
            <TrustBadges />
            <CallToAction />
        </div>
    }
}
