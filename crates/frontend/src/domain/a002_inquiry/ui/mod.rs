pub mod contact_form;
pub mod track;

pub use contact_form::ContactForm;
pub use track::TrackInquiry;
