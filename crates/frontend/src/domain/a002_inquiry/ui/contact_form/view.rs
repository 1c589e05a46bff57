use contracts::domain::a002_inquiry::validation::ContactField;
use leptos::prelude::*;

use super::view_model::ContactFormViewModel;
use crate::domain::a001_product::ui::ProductsState;
use crate::domain::a002_inquiry::basket::use_quote_basket;
use crate::shared::components::ui::{Button, Checkbox, Input, Textarea};
use crate::shared::icons::icon;

#[component]
fn ProductPicker(vm: ContactFormViewModel) -> impl IntoView {
    let state = ProductsState::load();
    let basket = vm.basket;
    let error = vm.field_error(ContactField::ProductIds);

    view! {
        <div class="form__group product-picker">
            <div class="product-picker__header">
                <span class="form__label">"Products of interest"</span>
                <span class="product-picker__count">
                    {move || match basket.len() {
                        0 => "None selected".to_string(),
                        1 => "1 selected".to_string(),
                        n => format!("{} selected", n),
                    }}
                </span>
            </div>
            <div class="product-picker__list">
                {move || {
                    if state.loading.get() {
                        return view! { <p class="product-picker__hint">"Loading products..."</p> }.into_any();
                    }
                    if let Some(e) = state.error.get() {
                        return view! { <p class="form__error">{e}</p> }.into_any();
                    }
                    state.products.get().into_iter().map(|p| {
                        let id = p.id;
                        view! {
                            <Checkbox
                                id=format!("product-{}", id)
                                label=p.name
                                checked=Signal::derive(move || basket.contains(id))
                                on_change=Callback::new(move |_| basket.toggle(id))
                            />
                        }
                    }).collect_view().into_any()
                }}
            </div>
            {move || error.get().map(|e| view! { <p class="form__error">{e}</p> })}
        </div>
    }
}

#[component]
fn SubmittedNotice(vm: ContactFormViewModel) -> impl IntoView {
    let code = move || {
        vm.submitted
            .get()
            .map(|r| r.reference_code)
            .unwrap_or_default()
    };
    let track_href = move || format!("/track?code={}", urlencoding::encode(&code()));

    view! {
        <div class="contact-form__success">
            <div class="contact-form__success-icon">{icon("check-circle")}</div>
            <h3>"Quote request submitted successfully!"</h3>
            <p>"Your reference code is"</p>
            <p class="reference-code">{code}</p>
            <p class="contact-form__hint">
                "We usually reply within 24 hours. Keep this code to check the status of your request."
            </p>
            <div class="contact-form__actions">
                <a class="button button--primary" href=track_href>"Track this request"</a>
                <Button variant="outline" on_click=Callback::new(move |_| vm.start_over())>
                    "Send another message"
                </Button>
            </div>
        </div>
    }
}

/// Quote request form with per-field validation
#[component]
pub fn ContactForm() -> impl IntoView {
    let vm = ContactFormViewModel::new(use_quote_basket());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_command();
    };
    let setter = move |field: ContactField| Callback::new(move |value: String| vm.set_field(field, value));

    view! {
        <div class="contact-form">
            <h3 class="contact-form__title">"Send a Message"</h3>
            <Show
                when=move || vm.submitted.get().is_none()
                fallback=move || view! { <SubmittedNotice vm=vm /> }
            >
                <form class="form" on:submit=on_submit novalidate=true>
                    <Input
                        id="contact-name"
                        label="Full Name"
                        placeholder="Your name"
                        autocomplete="name"
                        value=vm.name
                        on_input=setter(ContactField::Name)
                        error=vm.field_error(ContactField::Name)
                    />
                    <Input
                        id="contact-email"
                        label="Email Address"
                        input_type="email"
                        placeholder="your@email.com"
                        autocomplete="email"
                        value=vm.email
                        on_input=setter(ContactField::Email)
                        error=vm.field_error(ContactField::Email)
                    />
                    <Input
                        id="contact-phone"
                        label="Phone Number (optional)"
                        input_type="tel"
                        placeholder="+91 98765 43210"
                        autocomplete="tel"
                        value=vm.phone
                        on_input=setter(ContactField::Phone)
                        error=vm.field_error(ContactField::Phone)
                    />
                    <ProductPicker vm=vm />
                    <Textarea
                        id="contact-message"
                        label="Message"
                        placeholder="Tell us about your project requirements..."
                        rows=4
                        value=vm.message
                        on_input=setter(ContactField::Message)
                        error=vm.field_error(ContactField::Message)
                    />

                    {move || vm.submit_error.get().map(|e| view! {
                        <div class="contact-form__error" role="alert">{e}</div>
                    })}

                    <Button button_type="submit" full_width=true disabled=Signal::derive(move || vm.submitting.get())>
                        {move || if vm.submitting.get() { "Sending..." } else { "Send Message" }}
                    </Button>
                </form>
            </Show>
        </div>
    }
}
