use leptos::prelude::*;

use crate::domain::a002_inquiry::ui::ContactForm;
use crate::shared::company;
use crate::shared::icons::icon;

#[component]
fn ContactDetails() -> impl IntoView {
    view! {
        <div class="contact-details">
            <p class="section-header__eyebrow">"Reach Out"</p>
            <h2 class="contact-details__title">"Let's Connect"</h2>
            <div class="section-header__rule"></div>
            <p class="contact-details__lead">
                "Have questions about our products or need assistance with your project? "
                "Our team of experts is ready to help you find the perfect solution."
            </p>
            <ul class="contact-details__list">
                <li>
                    <span class="contact-details__icon">{icon("phone")}</span>
                    <div>
                        <h3>"Phone"</h3>
                        <a href=company::PHONE_HREF>{company::PHONE}</a>
                        <p class="contact-details__note">{company::HOURS}</p>
                    </div>
                </li>
                <li>
                    <span class="contact-details__icon">{icon("mail")}</span>
                    <div>
                        <h3>"Email"</h3>
                        <a href=format!("mailto:{}", company::EMAIL)>{company::EMAIL}</a>
                        <p class="contact-details__note">"We respond within 24 hours"</p>
                    </div>
                </li>
                <li>
                    <span class="contact-details__icon">{icon("map-pin")}</span>
                    <div>
                        <h3>"Visit Us"</h3>
                        {company::ADDRESS_LINES.iter().map(|line| view! { <p>{*line}</p> }).collect_view()}
                    </div>
                </li>
            </ul>
        </div>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div class="page page--contact">
            <section class="page-hero">
                <p class="page-hero__eyebrow">"Get in Touch"</p>
                <h1 class="page-hero__title">"Contact Us"</h1>
                <p class="page-hero__subtitle">
                    "Questions, inquiries or partnership opportunities, we're here to help"
                </p>
            </section>
            <section class="contact container">
                <ContactDetails />
                <ContactForm />
            </section>
        </div>
    }
}
