use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

const PREFIX: &str = "SE";

static CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^SE-\d{8}-[0-9A-F]{4}$").expect("valid reference code regex"));

/// Customer facing handle of an inquiry: `SE-YYYYMMDD-XXXX`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceCode(String);

impl ReferenceCode {
    /// Build a code for the given day with a random four character suffix
    pub fn generate(date: NaiveDate) -> Self {
        let random = uuid::Uuid::new_v4().simple().to_string();
        Self::from_parts(date, &random[..4])
    }

    /// Build a code from a date and an explicit suffix (upper-cased)
    pub fn from_parts(date: NaiveDate, suffix: &str) -> Self {
        Self(format!(
            "{}-{}-{}",
            PREFIX,
            date.format("%Y%m%d"),
            suffix.to_uppercase()
        ))
    }

    /// Parse user input. Surrounding whitespace and lower case are accepted.
    pub fn parse(input: &str) -> Result<Self, String> {
        let normalized = input.trim().to_uppercase();
        if !CODE_RE.is_match(&normalized) {
            return Err(format!(
                "Invalid reference code '{}', expected SE-YYYYMMDD-XXXX",
                input.trim()
            ));
        }
        let date_part = &normalized[3..11];
        NaiveDate::parse_from_str(date_part, "%Y%m%d")
            .map_err(|_| format!("Invalid date in reference code '{}'", input.trim()))?;
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ReferenceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 9).unwrap()
    }

    #[test]
    fn from_parts_formats_date_and_suffix() {
        let code = ReferenceCode::from_parts(day(), "a7b3");
        assert_eq!(code.as_str(), "SE-20260209-A7B3");
    }

    #[test]
    fn generated_code_round_trips_through_parse() {
        let code = ReferenceCode::generate(day());
        assert!(code.as_str().starts_with("SE-20260209-"));
        assert_eq!(ReferenceCode::parse(code.as_str()), Ok(code));
    }

    #[test]
    fn parse_normalizes_case_and_whitespace() {
        let code = ReferenceCode::parse("  se-20260209-a7b3 ").unwrap();
        assert_eq!(code.to_string(), "SE-20260209-A7B3");
    }

    #[test]
    fn parse_rejects_malformed_codes() {
        assert!(ReferenceCode::parse("").is_err());
        assert!(ReferenceCode::parse("SE-2026029-A7B3").is_err());
        assert!(ReferenceCode::parse("XX-20260209-A7B3").is_err());
        assert!(ReferenceCode::parse("SE-20260209-ZZZZ").is_err());
        assert!(ReferenceCode::parse("SE-20261399-A7B3").is_err());
    }
}
