pub mod csv_import;
pub mod error;
pub mod repository;
pub mod service;
