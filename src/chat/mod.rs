//! Chat feature — scripted keyword-to-answer responder

pub mod handler;
pub mod responder;

pub use handler::{chat_router, ChatState};
pub use responder::Responder;
