//! Field checks for the contact / quote request form.
//!
//! The same rules run in the browser before submitting and on the server
//! before storing.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::aggregate::ContactRequest;

pub const NAME_MIN: usize = 2;
pub const NAME_MAX: usize = 100;
pub const EMAIL_MAX: usize = 254;
pub const MESSAGE_MIN: usize = 10;
pub const MESSAGE_MAX: usize = 5000;
pub const PHONE_DIGITS_MIN: usize = 7;
pub const PHONE_DIGITS_MAX: usize = 15;
pub const PRODUCTS_MAX: usize = 50;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9+\-() ]+$").expect("valid phone regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Message,
    ProductIds,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: ContactField,
    pub message: String,
}

/// All failed checks of one submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    fn push(&mut self, field: ContactField, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// First message reported for a field
    pub fn for_field(&self, field: ContactField) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
        f.write_str(&joined.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

pub fn validate_name(name: &str) -> Option<&'static str> {
    let len = name.trim().chars().count();
    if len == 0 {
        Some("Please enter your name")
    } else if len < NAME_MIN {
        Some("Name must be at least 2 characters")
    } else if len > NAME_MAX {
        Some("Name must be at most 100 characters")
    } else {
        None
    }
}

pub fn validate_email(email: &str) -> Option<&'static str> {
    let email = email.trim();
    if email.is_empty() {
        Some("Please enter your email address")
    } else if email.chars().count() > EMAIL_MAX || !EMAIL_RE.is_match(email) {
        Some("Please enter a valid email address")
    } else {
        None
    }
}

/// Phone is optional; only a non-blank value is checked
pub fn validate_phone(phone: Option<&str>) -> Option<&'static str> {
    let phone = match phone.map(str::trim) {
        Some(p) if !p.is_empty() => p,
        _ => return None,
    };
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    if !PHONE_RE.is_match(phone) || !(PHONE_DIGITS_MIN..=PHONE_DIGITS_MAX).contains(&digits) {
        Some("Please enter a valid phone number")
    } else {
        None
    }
}

pub fn validate_message(message: &str) -> Option<&'static str> {
    let len = message.trim().chars().count();
    if len == 0 {
        Some("Please enter a message")
    } else if len < MESSAGE_MIN {
        Some("Message must be at least 10 characters")
    } else if len > MESSAGE_MAX {
        Some("Message must be at most 5000 characters")
    } else {
        None
    }
}

pub fn validate_contact(request: &ContactRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if let Some(msg) = validate_name(&request.name) {
        errors.push(ContactField::Name, msg);
    }
    if let Some(msg) = validate_email(&request.email) {
        errors.push(ContactField::Email, msg);
    }
    if let Some(msg) = validate_phone(request.phone.as_deref()) {
        errors.push(ContactField::Phone, msg);
    }
    if let Some(msg) = validate_message(&request.message) {
        errors.push(ContactField::Message, msg);
    }
    if request.product_ids.len() > PRODUCTS_MAX {
        errors.push(
            ContactField::ProductIds,
            "Please select at most 50 products per request",
        );
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ContactRequest {
        ContactRequest {
            name: "Meera Sharma".into(),
            email: "meera@example.co.in".into(),
            phone: Some("+91 98120-52133".into()),
            message: "Please quote 200m of 2.5mm copper wire.".into(),
            product_ids: vec![4],
        }
    }

    #[test]
    fn accepts_valid_request() {
        assert_eq!(validate_contact(&valid()), Ok(()));
    }

    #[test]
    fn accepts_missing_phone() {
        let req = ContactRequest {
            phone: None,
            ..valid()
        };
        assert!(validate_contact(&req).is_ok());
        let req = ContactRequest {
            phone: Some("  ".into()),
            ..valid()
        };
        assert!(validate_contact(&req).is_ok());
    }

    #[test]
    fn rejects_missing_and_short_name() {
        let errs = validate_contact(&ContactRequest {
            name: "   ".into(),
            ..valid()
        })
        .unwrap_err();
        assert_eq!(errs.for_field(ContactField::Name), Some("Please enter your name"));

        let errs = validate_contact(&ContactRequest {
            name: "A".into(),
            ..valid()
        })
        .unwrap_err();
        assert_eq!(
            errs.for_field(ContactField::Name),
            Some("Name must be at least 2 characters")
        );
    }

    #[test]
    fn rejects_invalid_emails() {
        for email in ["", "meera", "meera@", "meera@example", "me era@example.com", "a@b@c.com"] {
            let errs = validate_contact(&ContactRequest {
                email: email.into(),
                ..valid()
            })
            .unwrap_err();
            assert!(
                errs.for_field(ContactField::Email).is_some(),
                "expected email error for {email:?}"
            );
        }
    }

    #[test]
    fn rejects_short_message() {
        let errs = validate_contact(&ContactRequest {
            message: " short ".into(),
            ..valid()
        })
        .unwrap_err();
        assert_eq!(
            errs.for_field(ContactField::Message),
            Some("Message must be at least 10 characters")
        );
    }

    #[test]
    fn name_length_limits_count_characters() {
        assert_eq!(validate_name("Al"), None);
        assert_eq!(validate_name(" A "), Some("Name must be at least 2 characters"));
        // 100 characters, 200 bytes
        assert_eq!(validate_name(&"é".repeat(NAME_MAX)), None);
        assert_eq!(
            validate_name(&"é".repeat(NAME_MAX + 1)),
            Some("Name must be at most 100 characters")
        );
    }

    #[test]
    fn email_length_limit_counts_characters() {
        let domain = "@example.com";
        let at_limit = format!("{}{}", "ü".repeat(EMAIL_MAX - domain.len()), domain);
        assert_eq!(at_limit.chars().count(), EMAIL_MAX);
        assert_eq!(validate_email(&at_limit), None);

        let over = format!("{}{}", "ü".repeat(EMAIL_MAX + 1 - domain.len()), domain);
        assert_eq!(
            validate_email(&over),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn message_length_limits_count_characters() {
        assert_eq!(validate_message("0123456789"), None);
        assert_eq!(
            validate_message("  012345678  "),
            Some("Message must be at least 10 characters")
        );
        assert_eq!(validate_message(&"₹".repeat(MESSAGE_MAX)), None);
        assert_eq!(
            validate_message(&"₹".repeat(MESSAGE_MAX + 1)),
            Some("Message must be at most 5000 characters")
        );
    }

    #[test]
    fn product_selection_limit() {
        let req = ContactRequest {
            product_ids: (1..=PRODUCTS_MAX as i32).collect(),
            ..valid()
        };
        assert!(validate_contact(&req).is_ok());

        let req = ContactRequest {
            product_ids: (0..=PRODUCTS_MAX as i32).collect(),
            ..valid()
        };
        assert_eq!(
            validate_contact(&req).unwrap_err().for_field(ContactField::ProductIds),
            Some("Please select at most 50 products per request")
        );
    }

    #[test]
    fn rejects_malformed_phone() {
        for phone in ["12345", "98120 abc 52133", "+91 98120 52133 99999 1"] {
            assert!(validate_phone(Some(phone)).is_some(), "{phone}");
        }
        assert_eq!(validate_phone(Some("(0171) 264-1234")), None);
    }

    #[test]
    fn reports_every_failing_field_at_once() {
        let errs = validate_contact(&ContactRequest {
            name: "".into(),
            email: "nope".into(),
            phone: None,
            message: "".into(),
            product_ids: (0..51).collect(),
        })
        .unwrap_err();
        let fields: Vec<ContactField> = errs.errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                ContactField::Name,
                ContactField::Email,
                ContactField::Message,
                ContactField::ProductIds
            ]
        );
        assert!(errs.to_string().contains("Please enter your name; "));
    }
}
