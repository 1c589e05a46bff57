pub mod aggregate;
pub mod reference_code;
pub mod validation;
