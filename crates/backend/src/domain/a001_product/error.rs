use thiserror::Error;

/// Catalog errors caused by the caller's input
#[derive(Debug, Error)]
pub enum ProductError {
    #[error("{0}")]
    Invalid(String),

    #[error("{0}")]
    InvalidCsv(String),
}
