use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::reference_code::ReferenceCode;
use crate::domain::common::AggregateRoot;

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InquiryStatus {
    #[default]
    Pending,
    Contacted,
    Quoted,
    Closed,
}

impl InquiryStatus {
    pub const ALL: [InquiryStatus; 4] = [
        InquiryStatus::Pending,
        InquiryStatus::Contacted,
        InquiryStatus::Quoted,
        InquiryStatus::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InquiryStatus::Pending => "PENDING",
            InquiryStatus::Contacted => "CONTACTED",
            InquiryStatus::Quoted => "QUOTED",
            InquiryStatus::Closed => "CLOSED",
        }
    }

    /// Text shown to customers on the tracking page
    pub fn display_name(&self) -> &'static str {
        match self {
            InquiryStatus::Pending => "Received, awaiting review",
            InquiryStatus::Contacted => "Our team has contacted you",
            InquiryStatus::Quoted => "Quotation sent",
            InquiryStatus::Closed => "Closed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Quote request as stored by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: i64,
    pub reference_code: ReferenceCode,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub product_ids: Vec<i32>,
    pub product_names: Vec<String>,
    pub created_at: NaiveDateTime,
    pub is_read: bool,
    pub status: InquiryStatus,
}

impl Inquiry {
    /// Product names as shown in emails and on the tracking page
    pub fn product_names_joined(&self) -> Option<String> {
        if self.product_names.is_empty() {
            None
        } else {
            Some(self.product_names.join(", "))
        }
    }

    pub fn to_tracking(&self) -> TrackInquiryResponse {
        TrackInquiryResponse {
            success: true,
            reference_code: self.reference_code.to_string(),
            status: self.status,
            created_at: self.created_at,
            product_names: self.product_names_joined(),
            message: self.message.clone(),
        }
    }
}

impl AggregateRoot for Inquiry {
    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "inquiry"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Body of `POST /contact`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub message: String,
    #[serde(default)]
    pub product_ids: Vec<i32>,
}

impl ContactRequest {
    /// Trimmed copy; a blank phone becomes `None` and duplicate ids are removed
    pub fn normalized(&self) -> Self {
        let mut product_ids: Vec<i32> = Vec::with_capacity(self.product_ids.len());
        for id in &self.product_ids {
            if !product_ids.contains(id) {
                product_ids.push(*id);
            }
        }
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self
                .phone
                .as_deref()
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string),
            message: self.message.trim().to_string(),
            product_ids,
        }
    }
}

/// Successful answer of `POST /contact`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
    pub reference_code: String,
    pub message_id: i64,
}

/// Public view returned by `GET /contact/track/{code}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackInquiryResponse {
    pub success: bool,
    pub reference_code: String,
    pub status: InquiryStatus,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub product_names: Option<String>,
    pub message: String,
}

/// Body of `PUT /contact/admin/{code}/status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: InquiryStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnreadCount {
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> Inquiry {
        Inquiry {
            id: 1,
            reference_code: ReferenceCode::parse("SE-20260209-A7B3").unwrap(),
            name: "Asha".into(),
            email: "asha@example.com".into(),
            phone: None,
            message: "Need 40 ceiling fans".into(),
            product_ids: vec![2, 5],
            product_names: vec!["Ceiling Fan".into(), "Regulator".into()],
            created_at: NaiveDate::from_ymd_opt(2026, 2, 9)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap(),
            is_read: false,
            status: InquiryStatus::Pending,
        }
    }

    #[test]
    fn status_serializes_upper_case() {
        assert_eq!(
            serde_json::to_string(&InquiryStatus::Quoted).unwrap(),
            "\"QUOTED\""
        );
        assert_eq!(InquiryStatus::parse(" contacted"), Some(InquiryStatus::Contacted));
        assert_eq!(InquiryStatus::parse("lost"), None);
    }

    #[test]
    fn tracking_view_joins_product_names() {
        let tracking = sample().to_tracking();
        assert_eq!(tracking.reference_code, "SE-20260209-A7B3");
        assert_eq!(tracking.product_names.as_deref(), Some("Ceiling Fan, Regulator"));
        let json = serde_json::to_value(&tracking).unwrap();
        assert_eq!(json["referenceCode"], "SE-20260209-A7B3");
        assert_eq!(json["status"], "PENDING");
    }

    #[test]
    fn contact_request_reads_product_ids_and_optional_phone() {
        let req: ContactRequest = serde_json::from_str(
            r#"{"name":"A","email":"a@b.in","message":"hello there","productIds":[1,2]}"#,
        )
        .unwrap();
        assert_eq!(req.product_ids, vec![1, 2]);
        assert_eq!(req.phone, None);
    }

    #[test]
    fn normalized_trims_fields_and_dedupes_ids() {
        let req = ContactRequest {
            name: "  Ravi ".into(),
            email: " ravi@shop.in ".into(),
            phone: Some("   ".into()),
            message: " Quote please for wires ".into(),
            product_ids: vec![3, 1, 3],
        };
        let n = req.normalized();
        assert_eq!(n.name, "Ravi");
        assert_eq!(n.email, "ravi@shop.in");
        assert_eq!(n.phone, None);
        assert_eq!(n.product_ids, vec![3, 1]);
    }
}
