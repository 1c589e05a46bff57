//! Contact / quote request form
//!
//! - view_model.rs: form state, validation and the submit command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::ContactForm;
pub use view_model::ContactFormViewModel;
