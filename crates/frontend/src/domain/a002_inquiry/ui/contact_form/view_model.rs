use contracts::domain::a002_inquiry::aggregate::{ContactRequest, ContactResponse};
use contracts::domain::a002_inquiry::validation::{validate_contact, ContactField, ValidationErrors};
use leptos::prelude::*;

use crate::domain::a002_inquiry::api;
use crate::domain::a002_inquiry::basket::QuoteBasket;

/// Request as it will be sent, already normalized
pub fn build_request(
    name: &str,
    email: &str,
    phone: &str,
    message: &str,
    product_ids: Vec<i32>,
) -> ContactRequest {
    ContactRequest {
        name: name.to_string(),
        email: email.to_string(),
        phone: Some(phone.to_string()),
        message: message.to_string(),
        product_ids,
    }
    .normalized()
}

/// ViewModel for the contact form
#[derive(Clone, Copy)]
pub struct ContactFormViewModel {
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub message: RwSignal<String>,
    pub errors: RwSignal<ValidationErrors>,
    pub submitting: RwSignal<bool>,
    pub submit_error: RwSignal<Option<String>>,
    pub submitted: RwSignal<Option<ContactResponse>>,
    pub basket: QuoteBasket,
}

impl ContactFormViewModel {
    pub fn new(basket: QuoteBasket) -> Self {
        Self {
            name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            message: RwSignal::new(String::new()),
            errors: RwSignal::new(ValidationErrors::default()),
            submitting: RwSignal::new(false),
            submit_error: RwSignal::new(None),
            submitted: RwSignal::new(None),
            basket,
        }
    }

    fn field_signal(&self, field: ContactField) -> Option<RwSignal<String>> {
        match field {
            ContactField::Name => Some(self.name),
            ContactField::Email => Some(self.email),
            ContactField::Phone => Some(self.phone),
            ContactField::Message => Some(self.message),
            ContactField::ProductIds => None,
        }
    }

    /// Store typed text and drop the stale error of that field
    pub fn set_field(&self, field: ContactField, value: String) {
        if let Some(signal) = self.field_signal(field) {
            signal.set(value);
        }
        self.errors.update(|e| e.errors.retain(|err| err.field != field));
    }

    pub fn field_error(&self, field: ContactField) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.for_field(field).map(str::to_string)))
    }

    pub fn request(&self) -> ContactRequest {
        build_request(
            &self.name.get_untracked(),
            &self.email.get_untracked(),
            &self.phone.get_untracked(),
            &self.message.get_untracked(),
            self.basket.snapshot(),
        )
    }

    /// Validate locally, then send
    pub fn submit_command(&self) {
        if self.submitting.get_untracked() {
            return;
        }
        self.submit_error.set(None);

        let request = self.request();
        if let Err(errors) = validate_contact(&request) {
            self.errors.set(errors);
            return;
        }
        self.errors.set(ValidationErrors::default());
        self.submitting.set(true);

        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match api::send_contact_message(&request).await {
                Ok(response) => {
                    log::info!("Quote request sent: {}", response.reference_code);
                    vm.clear_fields();
                    vm.basket.clear();
                    vm.submitted.set(Some(response));
                }
                Err(e) => vm.submit_error.set(Some(e)),
            }
            vm.submitting.set(false);
        });
    }

    fn clear_fields(&self) {
        self.name.set(String::new());
        self.email.set(String::new());
        self.phone.set(String::new());
        self.message.set(String::new());
    }

    /// Back to an empty form after a successful submission
    pub fn start_over(&self) {
        self.submitted.set(None);
        self.submit_error.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_request_trims_and_drops_blank_phone() {
        let request = build_request("  Asha ", " asha@example.com ", "   ", "Need 40 LED panels soon", vec![3, 3, 7]);
        assert_eq!(request.name, "Asha");
        assert_eq!(request.email, "asha@example.com");
        assert_eq!(request.phone, None);
        assert_eq!(request.product_ids, vec![3, 7]);
    }

    #[test]
    fn built_request_reports_every_bad_field() {
        let request = build_request("A", "asha", "12", "short", vec![]);
        let errors = validate_contact(&request).unwrap_err();
        for field in [
            ContactField::Name,
            ContactField::Email,
            ContactField::Phone,
            ContactField::Message,
        ] {
            assert!(errors.for_field(field).is_some(), "{:?} should fail", field);
        }
        assert!(errors.for_field(ContactField::ProductIds).is_none());
    }
}
