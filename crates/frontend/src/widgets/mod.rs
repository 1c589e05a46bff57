pub mod support_chat;

pub use support_chat::SupportChat;
