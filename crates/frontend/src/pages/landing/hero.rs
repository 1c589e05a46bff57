use leptos::prelude::*;

use crate::shared::icons::icon;

struct Feature {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        icon: "check-circle",
        title: "Quality Certified",
        text: "ISO certified products with comprehensive warranty",
    },
    Feature {
        icon: "package",
        title: "Extensive Range",
        text: "1000+ products across all categories",
    },
    Feature {
        icon: "bolt",
        title: "Fast Delivery",
        text: "Same-day dispatch on most orders",
    },
    Feature {
        icon: "support",
        title: "Expert Support",
        text: "Technical assistance included",
    },
];

const CATEGORIES: [(&str, &str); 3] = [
    ("Lighting", "Neekan Lites · Ledlum · Philips · OSRAM"),
    (
        "Switches & Accessories",
        "Schneider · Norisys · Vihan · GreatWhite · GM · Legrand",
    ),
    ("Fans", "Orient · Indo · Ecolink · Kuhl Fans"),
];

const STATS: [(&str, &str); 4] = [
    ("10+", "Years Experience"),
    ("1000+", "Products"),
    ("500+", "Projects Completed"),
    ("98%", "Client Satisfaction"),
];

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__inner container">
                <div class="hero__copy">
                    <p class="hero__eyebrow">"Premium Electrical Solutions"</p>
                    <h1 class="hero__title">
                        "Light"<br /><span class="hero__title-muted">"Redefined"</span>
                    </h1>
                    <div class="hero__rule"></div>
                    <p class="hero__lead">
                        "Exceptional electrical solutions for modern architecture. "
                        "From ambient lighting to industrial power, we illuminate your vision."
                    </p>
                    <div class="hero__actions">
                        <a class="button button--light" href="/products">
                            "Explore Products" {icon("arrow-right")}
                        </a>
                        <a class="button button--ghost" href="/contact">"Get in Touch"</a>
                    </div>
                </div>
                <div class="hero__features">
                    {FEATURES.iter().map(|f| view! {
                        <div class="feature-card">
                            <div class="feature-card__icon">{icon(f.icon)}</div>
                            <h3 class="feature-card__title">{f.title}</h3>
                            <p class="feature-card__text">{f.text}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn CategoryStrip() -> impl IntoView {
    view! {
        <section class="category-strip">
            <div class="container">
                <div class="section-header section-header--dark">
                    <p class="section-header__eyebrow">"Categories"</p>
                    <h2 class="section-header__title">"What We Offer"</h2>
                </div>
                <div class="category-strip__grid">
                    {CATEGORIES.iter().map(|&(name, brands)| view! {
                        <a class="category-tile" href="/products">
                            <h3 class="category-tile__name">{name}</h3>
                            <p class="category-tile__brands">{brands}</p>
                        </a>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Stats() -> impl IntoView {
    view! {
        <section class="stats">
            <div class="stats__grid container">
                {STATS.iter().map(|&(number, label)| view! {
                    <div class="stats__item">
                        <p class="stats__number">{number}</p>
                        <p class="stats__label">{label}</p>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section class="cta">
            <div class="cta__inner container">
                <h2 class="cta__title">"Ready to illuminate"<br />"your next project?"</h2>
                <p class="cta__text">
                    "Get in touch with our team for personalized solutions and expert guidance on your electrical requirements."
                </p>
                <div class="cta__actions">
                    <a class="button button--primary" href="/contact">"Contact Us"</a>
                    <a class="button button--outline" href="/products">"View Catalog"</a>
                </div>
            </div>
        </section>
    }
}
