use leptos::prelude::*;

use crate::shared::company;
use crate::shared::icons::icon;

const CERTIFICATIONS: [(&str, &str, &str); 4] = [
    (
        "BIS Certified",
        "Bureau of Indian Standards",
        "All our products meet the stringent quality standards set by BIS, ensuring safety and reliability.",
    ),
    (
        "ISO 9001:2015",
        "Quality Management",
        "We adhere to international quality management standards in all our operations and product handling.",
    ),
    (
        "ISI Mark",
        "Indian Standards Institution",
        "Products carry the ISI mark certifying compliance with Indian safety and performance standards.",
    ),
    (
        "Energy Star Rated",
        "Energy Efficiency",
        "Our lighting and fan products are rated for energy efficiency, helping you save on electricity bills.",
    ),
];

#[component]
pub fn Certifications() -> impl IntoView {
    view! {
        <section class="heritage">
            <div class="heritage__inner container">
                <div class="heritage__story">
                    <p class="section-header__eyebrow">"Our Heritage"</p>
                    <p class="heritage__since">"Since " <span>"2014"</span></p>
                    <p class="heritage__text">
                        "For over a decade, " {company::NAME} " has been Ambala's trusted name in premium "
                        "electrical solutions. Our commitment to quality, authenticity and customer "
                        "satisfaction has made us the go-to destination for electrical needs across the region."
                    </p>
                    <div class="heritage__marks">
                        <span>{icon("check-circle")} "Authorized Dealer"</span>
                        <span>{icon("check-circle")} "100% Genuine Products"</span>
                    </div>
                </div>
                <div class="heritage__certs">
                    {CERTIFICATIONS.iter().map(|&(title, subtitle, description)| view! {
                        <div class="cert-card">
                            <div class="cert-card__icon">{icon("shield")}</div>
                            <h3 class="cert-card__title">{title}</h3>
                            <p class="cert-card__subtitle">{subtitle}</p>
                            <p class="cert-card__text">{description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
