use serde::{Deserialize, Serialize};

/// JSON body of every non-2xx API response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub success: bool,
    pub message: String,
}

impl ApiErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    /// Extract `message` from an error response body, if any
    pub fn message_from(body: &str) -> Option<String> {
        serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .map(|b| b.message)
            .filter(|m| !m.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_from_reads_error_payloads() {
        assert_eq!(
            ApiErrorBody::message_from(r#"{"success":false,"message":"No inquiry found"}"#),
            Some("No inquiry found".to_string())
        );
        assert_eq!(
            ApiErrorBody::message_from(r#"{"message":"Bad"}"#),
            Some("Bad".to_string())
        );
    }

    #[test]
    fn message_from_ignores_other_bodies() {
        assert_eq!(ApiErrorBody::message_from(""), None);
        assert_eq!(ApiErrorBody::message_from("<html>502</html>"), None);
        assert_eq!(ApiErrorBody::message_from(r#"{"message":"  "}"#), None);
        assert_eq!(ApiErrorBody::message_from(r#"{"error":"x"}"#), None);
    }
}
