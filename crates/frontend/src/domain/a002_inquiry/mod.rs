pub mod api;
pub mod basket;
pub mod ui;
