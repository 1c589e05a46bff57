pub mod badge;
pub mod button;
pub mod checkbox;
pub mod input;
pub mod textarea;

pub use badge::{Badge, StatusBadge};
pub use button::Button;
pub use checkbox::Checkbox;
pub use input::Input;
pub use textarea::Textarea;
