//! Emails sent when a quote request arrives.
//!
//! Messages are composed here and handed to a [`Notifier`]. The default
//! [`OutboxNotifier`] stores them in the `notification_outbox` table, from
//! which a mail relay picks them up.

use async_trait::async_trait;
use contracts::domain::a002_inquiry::aggregate::Inquiry;
use sea_orm::DatabaseConnection;
use std::fmt::Write;

use crate::shared::config::CompanyConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub to: String,
    pub subject: String,
    pub body: String,
    pub reference_code: Option<String>,
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, mail: OutgoingMail) -> anyhow::Result<()>;
}

/// Message to the company mailbox about a new quote request
pub fn admin_notification(inquiry: &Inquiry, company: &CompanyConfig) -> OutgoingMail {
    let code = inquiry.reference_code.as_str();
    let mut text = String::new();

    let _ = writeln!(text, "NEW QUOTE REQUEST");
    let _ = writeln!(text, "====================================\n");
    let _ = writeln!(text, "Reference Code: {}\n", code);
    let _ = writeln!(text, "Customer Details:");
    let _ = writeln!(text, "Name: {}", inquiry.name);
    let _ = writeln!(text, "Email: {}", inquiry.email);
    if let Some(phone) = inquiry.phone.as_deref().filter(|p| !p.trim().is_empty()) {
        let _ = writeln!(text, "Phone: {}", phone);
    }
    if let Some(products) = inquiry.product_names_joined() {
        let _ = writeln!(text, "\nProducts Selected:");
        let _ = writeln!(text, "{}", products);
    }
    let _ = writeln!(text, "\nMessage:");
    let _ = writeln!(text, "{}\n", inquiry.message);
    let _ = writeln!(text, "====================================");
    let _ = write!(text, "Please respond using reference code {}", code);

    OutgoingMail {
        to: company.email.clone(),
        subject: format!("New Quote Request [{}] from {}", code, inquiry.name),
        body: text,
        reference_code: Some(code.to_string()),
    }
}

/// Automatic confirmation to the customer
pub fn customer_auto_reply(inquiry: &Inquiry, company: &CompanyConfig) -> OutgoingMail {
    let code = inquiry.reference_code.as_str();
    let mut text = String::new();

    let _ = writeln!(text, "Dear {},\n", inquiry.name);
    let _ = writeln!(text, "Thank you for contacting {}.\n", company.name);
    let _ = writeln!(text, "Your Reference Code: {}\n", code);
    if let Some(products) = inquiry.product_names_joined() {
        let _ = writeln!(text, "Products You Selected:");
        let _ = writeln!(text, "{}\n", products);
    }
    let _ = writeln!(text, "Your Message:");
    let _ = writeln!(text, "\"{}\"\n", inquiry.message);
    let _ = writeln!(text, "We will contact you within 24-48 business hours.\n");
    let _ = writeln!(text, "For urgent inquiries, call us at {}.\n", company.phone);
    let _ = writeln!(text, "Best Regards,");
    let _ = writeln!(text, "{}\n", company.name);
    let _ = writeln!(text, "This is an automated email. Please do not reply directly.");
    let _ = write!(text, "Always mention reference code {}", code);

    OutgoingMail {
        to: inquiry.email.clone(),
        subject: format!("Quote Request Received [{}] - {}", code, company.name),
        body: text,
        reference_code: Some(code.to_string()),
    }
}

/// Send both emails for a new inquiry. Failures are logged, never returned.
pub async fn notify_new_inquiry(notifier: &dyn Notifier, inquiry: &Inquiry, company: &CompanyConfig) {
    for mail in [
        admin_notification(inquiry, company),
        customer_auto_reply(inquiry, company),
    ] {
        let to = mail.to.clone();
        if let Err(e) = notifier.send(mail).await {
            tracing::error!(
                "Failed to queue notification for {} to {}: {:#}",
                inquiry.reference_code,
                to,
                e
            );
        }
    }
}

pub mod outbox {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "notification_outbox")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub recipient: String,
        pub subject: String,
        pub body: String,
        pub reference_code: Option<String>,
        pub created_at: chrono::NaiveDateTime,
        pub sent_at: Option<chrono::NaiveDateTime>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Stores outgoing mail in the outbox table
pub struct OutboxNotifier {
    db: DatabaseConnection,
}

impl OutboxNotifier {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Notifier for OutboxNotifier {
    async fn send(&self, mail: OutgoingMail) -> anyhow::Result<()> {
        use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, Set};

        let active = outbox::ActiveModel {
            id: NotSet,
            recipient: Set(mail.to.clone()),
            subject: Set(mail.subject.clone()),
            body: Set(mail.body),
            reference_code: Set(mail.reference_code),
            created_at: Set(chrono::Utc::now().naive_utc()),
            sent_at: Set(None),
        };
        active.insert(&self.db).await?;
        tracing::info!("Queued email to {}: {}", mail.to, mail.subject);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::a002_inquiry::aggregate::InquiryStatus;
    use contracts::domain::a002_inquiry::reference_code::ReferenceCode;

    fn inquiry(phone: Option<&str>, products: Vec<&str>) -> Inquiry {
        Inquiry {
            id: 7,
            reference_code: ReferenceCode::parse("SE-20260209-A7B3").unwrap(),
            name: "Karan".into(),
            email: "karan@example.com".into(),
            phone: phone.map(Into::into),
            message: "Need pricing for 50 switches".into(),
            product_ids: vec![],
            product_names: products.into_iter().map(Into::into).collect(),
            created_at: NaiveDate::from_ymd_opt(2026, 2, 9)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            is_read: false,
            status: InquiryStatus::Pending,
        }
    }

    #[test]
    fn admin_mail_lists_customer_and_products() {
        let company = CompanyConfig::default();
        let mail = admin_notification(&inquiry(Some("98120 52133"), vec!["Modular Switch 6A", "Dimmer"]), &company);
        assert_eq!(mail.to, company.email);
        assert_eq!(mail.subject, "New Quote Request [SE-20260209-A7B3] from Karan");
        assert!(mail.body.contains("Phone: 98120 52133\n"));
        assert!(mail.body.contains("Products Selected:\nModular Switch 6A, Dimmer\n"));
        assert!(mail.body.ends_with("Please respond using reference code SE-20260209-A7B3"));
    }

    #[test]
    fn admin_mail_omits_empty_sections() {
        let mail = admin_notification(&inquiry(Some("  "), vec![]), &CompanyConfig::default());
        assert!(!mail.body.contains("Phone:"));
        assert!(!mail.body.contains("Products Selected"));
    }

    #[test]
    fn customer_reply_quotes_message_and_company() {
        let company = CompanyConfig::default();
        let mail = customer_auto_reply(&inquiry(None, vec!["Dimmer"]), &company);
        assert_eq!(mail.to, "karan@example.com");
        assert_eq!(
            mail.subject,
            "Quote Request Received [SE-20260209-A7B3] - Sobti Enterprises"
        );
        assert!(mail.body.starts_with("Dear Karan,\n\n"));
        assert!(mail.body.contains("\"Need pricing for 50 switches\""));
        assert!(mail.body.contains(&format!("call us at {}.", company.phone)));
    }
}
