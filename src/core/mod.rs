//! Core domain types for the idiom chain puzzle
//!
//! Plain data with no I/O: idioms, questions and classified chat messages.

mod idiom;
mod message;
mod question;

pub use idiom::Idiom;
pub use message::{Message, MessageError, RawMessage, Timestamp};
pub use question::{ANNOUNCEMENT_PREFIX, Question};
