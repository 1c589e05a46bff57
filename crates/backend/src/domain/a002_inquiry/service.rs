use chrono::Utc;
use contracts::domain::a002_inquiry::aggregate::{ContactRequest, Inquiry, InquiryStatus};
use contracts::domain::a002_inquiry::reference_code::ReferenceCode;
use contracts::domain::a002_inquiry::validation::validate_contact;
use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use super::notification::{self, Notifier};
use super::repository::{self, NewInquiry};
use crate::domain::a001_product;
use crate::shared::config::CompanyConfig;

const CODE_ATTEMPTS: usize = 5;

fn is_unique_violation(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<DbErr>().and_then(DbErr::sql_err),
        Some(SqlErr::UniqueConstraintViolation(_))
    )
}

/// Insert under a fresh reference code, drawing a new one when the
/// UNIQUE constraint rejects it
async fn insert_with_unique_code(
    conn: &DatabaseConnection,
    mut new: NewInquiry,
    mut next_code: impl FnMut() -> ReferenceCode,
) -> anyhow::Result<Inquiry> {
    for _ in 0..CODE_ATTEMPTS {
        new.reference_code = next_code();
        match repository::insert(conn, new.clone()).await {
            Err(e) if is_unique_violation(&e) => {
                tracing::warn!("Reference code collision on {}, retrying", new.reference_code);
            }
            result => return result,
        }
    }
    anyhow::bail!(
        "Could not allocate a unique reference code after {} attempts",
        CODE_ATTEMPTS
    )
}

/// Store a quote request and queue its notifications
pub async fn submit(
    conn: &DatabaseConnection,
    notifier: &dyn Notifier,
    company: &CompanyConfig,
    request: ContactRequest,
) -> anyhow::Result<Inquiry> {
    let request = request.normalized();
    validate_contact(&request)?;

    let products = a001_product::repository::find_by_ids(conn, &request.product_ids).await?;
    let product_ids: Vec<i32> = products.iter().map(|p| p.id).collect();
    if product_ids.len() < request.product_ids.len() {
        tracing::warn!(
            "Quote request references unknown products, {} of {} resolved",
            product_ids.len(),
            request.product_ids.len()
        );
    }

    let now = Utc::now().naive_utc();
    let today = now.date();

    let inquiry = insert_with_unique_code(
        conn,
        NewInquiry {
            reference_code: ReferenceCode::generate(today),
            name: request.name,
            email: request.email,
            phone: request.phone,
            message: request.message,
            product_ids,
            product_names: products.into_iter().map(|p| p.name).collect(),
            created_at: now,
        },
        || ReferenceCode::generate(today),
    )
    .await?;

    tracing::info!(
        "Quote request {} stored (id {}, {} products)",
        inquiry.reference_code,
        inquiry.id,
        inquiry.product_ids.len()
    );

    notification::notify_new_inquiry(notifier, &inquiry, company).await;
    Ok(inquiry)
}

#[derive(Debug, thiserror::Error)]
pub enum TrackError {
    #[error("{0}")]
    Malformed(String),
    #[error("No inquiry found with this reference code")]
    NotFound,
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Look up an inquiry by the code the customer typed in
pub async fn track(conn: &DatabaseConnection, input: &str) -> Result<Inquiry, TrackError> {
    let code = ReferenceCode::parse(input).map_err(TrackError::Malformed)?;
    repository::get_by_code(conn, &code)
        .await?
        .ok_or(TrackError::NotFound)
}

pub async fn get_by_code(
    conn: &DatabaseConnection,
    code: &ReferenceCode,
) -> anyhow::Result<Option<Inquiry>> {
    repository::get_by_code(conn, code).await
}

pub async fn list_all(conn: &DatabaseConnection) -> anyhow::Result<Vec<Inquiry>> {
    repository::list_all(conn).await
}

pub async fn list_unread(conn: &DatabaseConnection) -> anyhow::Result<Vec<Inquiry>> {
    repository::list_unread(conn).await
}

pub async fn count_unread(conn: &DatabaseConnection) -> anyhow::Result<u64> {
    repository::count_unread(conn).await
}

/// Change the status; the inquiry also becomes read
pub async fn update_status(
    conn: &DatabaseConnection,
    code: &ReferenceCode,
    status: InquiryStatus,
) -> anyhow::Result<bool> {
    let updated = repository::mark_read(conn, code, Some(status)).await?;
    if updated {
        tracing::info!("Inquiry {} status set to {}", code, status);
    }
    Ok(updated)
}

pub async fn mark_read(conn: &DatabaseConnection, code: &ReferenceCode) -> anyhow::Result<bool> {
    repository::mark_read(conn, code, None).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_inquiry::notification::OutgoingMail;
    use crate::shared::data::db::connect_in_memory;
    use async_trait::async_trait;
    use contracts::domain::a001_product::aggregate::ProductDto;
    use contracts::domain::a002_inquiry::validation::ValidationErrors;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingNotifier {
        sent: Mutex<Vec<OutgoingMail>>,
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn send(&self, mail: OutgoingMail) -> anyhow::Result<()> {
            self.sent.lock().unwrap().push(mail);
            Ok(())
        }
    }

    struct FailingNotifier;

    #[async_trait]
    impl Notifier for FailingNotifier {
        async fn send(&self, _mail: OutgoingMail) -> anyhow::Result<()> {
            anyhow::bail!("smtp relay down")
        }
    }

    fn request(product_ids: Vec<i32>) -> ContactRequest {
        ContactRequest {
            name: " Priya ".into(),
            email: "priya@example.com".into(),
            phone: Some("+91 98765 43210".into()),
            message: "Please send a quote for the selected items".into(),
            product_ids,
        }
    }

    async fn add_product(conn: &DatabaseConnection, name: &str) -> i32 {
        a001_product::service::create(
            conn,
            ProductDto {
                name: name.into(),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .id
    }

    fn new_inquiry(created_at: chrono::NaiveDateTime) -> NewInquiry {
        NewInquiry {
            reference_code: ReferenceCode::generate(created_at.date()),
            name: "Priya".into(),
            email: "priya@example.com".into(),
            phone: None,
            message: "Please send a quote for the selected items".into(),
            product_ids: vec![],
            product_names: vec![],
            created_at,
        }
    }

    #[tokio::test]
    async fn colliding_reference_code_is_redrawn() {
        let conn = connect_in_memory().await.unwrap();
        let now = Utc::now().naive_utc();
        let taken = ReferenceCode::from_parts(now.date(), "ABCD");
        let fresh = ReferenceCode::from_parts(now.date(), "WXYZ");

        let first = insert_with_unique_code(&conn, new_inquiry(now), || taken.clone())
            .await
            .unwrap();
        assert_eq!(first.reference_code, taken);

        let mut codes = vec![fresh.clone(), taken.clone()];
        let second = insert_with_unique_code(&conn, new_inquiry(now), || codes.pop().unwrap())
            .await
            .unwrap();
        assert_eq!(second.reference_code, fresh);
        assert_eq!(list_all(&conn).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn gives_up_after_repeated_collisions() {
        let conn = connect_in_memory().await.unwrap();
        let now = Utc::now().naive_utc();
        let taken = ReferenceCode::from_parts(now.date(), "ABCD");
        insert_with_unique_code(&conn, new_inquiry(now), || taken.clone())
            .await
            .unwrap();

        let mut drawn = 0;
        let err = insert_with_unique_code(&conn, new_inquiry(now), || {
            drawn += 1;
            taken.clone()
        })
        .await
        .unwrap_err();
        assert_eq!(drawn, CODE_ATTEMPTS);
        assert!(err.to_string().contains("unique reference code"));
    }

    #[tokio::test]
    async fn submit_resolves_products_and_notifies() {
        let conn = connect_in_memory().await.unwrap();
        let fan = add_product(&conn, "Ceiling Fan").await;
        let mcb = add_product(&conn, "MCB 32A").await;
        let notifier = RecordingNotifier::default();

        let inquiry = submit(
            &conn,
            &notifier,
            &CompanyConfig::default(),
            request(vec![mcb, 999, fan]),
        )
        .await
        .unwrap();

        assert_eq!(inquiry.name, "Priya");
        assert_eq!(inquiry.product_ids, vec![mcb, fan]);
        assert_eq!(inquiry.product_names, vec!["MCB 32A", "Ceiling Fan"]);
        assert_eq!(inquiry.status, InquiryStatus::Pending);
        assert!(!inquiry.is_read);

        let sent = notifier.sent.lock().unwrap();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[1].to, "priya@example.com");

        let stored = get_by_code(&conn, &inquiry.reference_code).await.unwrap().unwrap();
        assert_eq!(stored, inquiry);
    }

    #[tokio::test]
    async fn invalid_request_is_not_stored() {
        let conn = connect_in_memory().await.unwrap();
        let notifier = RecordingNotifier::default();
        let bad = ContactRequest {
            email: "not-an-email".into(),
            ..request(vec![])
        };

        let err = submit(&conn, &notifier, &CompanyConfig::default(), bad)
            .await
            .unwrap_err();
        assert!(err.downcast_ref::<ValidationErrors>().is_some());
        assert!(list_all(&conn).await.unwrap().is_empty());
        assert!(notifier.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn notification_failure_does_not_fail_submission() {
        let conn = connect_in_memory().await.unwrap();
        let inquiry = submit(&conn, &FailingNotifier, &CompanyConfig::default(), request(vec![]))
            .await
            .unwrap();
        assert!(inquiry.product_names.is_empty());
    }

    #[tokio::test]
    async fn status_update_marks_read_and_filters_unread() {
        let conn = connect_in_memory().await.unwrap();
        let notifier = RecordingNotifier::default();
        let company = CompanyConfig::default();
        let first = submit(&conn, &notifier, &company, request(vec![])).await.unwrap();
        let second = submit(&conn, &notifier, &company, request(vec![])).await.unwrap();
        assert_ne!(first.reference_code, second.reference_code);
        assert_eq!(count_unread(&conn).await.unwrap(), 2);

        assert!(update_status(&conn, &first.reference_code, InquiryStatus::Quoted)
            .await
            .unwrap());
        let unread = list_unread(&conn).await.unwrap();
        assert_eq!(unread.len(), 1);
        assert_eq!(unread[0].reference_code, second.reference_code);

        let updated = get_by_code(&conn, &first.reference_code).await.unwrap().unwrap();
        assert_eq!(updated.status, InquiryStatus::Quoted);
        assert!(updated.is_read);

        assert!(mark_read(&conn, &second.reference_code).await.unwrap());
        assert_eq!(count_unread(&conn).await.unwrap(), 0);

        let all = list_all(&conn).await.unwrap();
        assert_eq!(all[0].reference_code, second.reference_code);
    }

    #[tokio::test]
    async fn track_accepts_lowercase_and_rejects_garbage() {
        let conn = connect_in_memory().await.unwrap();
        let inquiry = submit(&conn, &RecordingNotifier::default(), &CompanyConfig::default(), request(vec![]))
            .await
            .unwrap();

        let typed = format!("  {}  ", inquiry.reference_code.as_str().to_lowercase());
        let found = track(&conn, &typed).await.unwrap();
        assert_eq!(found.id, inquiry.id);

        assert!(matches!(track(&conn, "SE-123").await, Err(TrackError::Malformed(_))));
        assert!(matches!(
            track(&conn, "SE-20200101-ABCD").await,
            Err(TrackError::NotFound)
        ));
    }

    #[tokio::test]
    async fn unknown_code_updates_nothing() {
        let conn = connect_in_memory().await.unwrap();
        let code = ReferenceCode::parse("SE-20260101-FFFF").unwrap();
        assert!(!update_status(&conn, &code, InquiryStatus::Closed).await.unwrap());
        assert!(get_by_code(&conn, &code).await.unwrap().is_none());
    }
}
