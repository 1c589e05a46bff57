pub mod api_utils;
pub mod company;
pub mod components;
pub mod icons;
pub mod modal;
