pub mod section_header;
pub mod ui;

pub use section_header::SectionHeader;
