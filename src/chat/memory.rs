//! In-memory chat channel

use super::{ChatClient, ChatError, UserDirectory};
use crate::core::{Message, Timestamp};
use std::cell::RefCell;

/// A single channel held in memory
///
/// Serves a fixed history and member list and records every post.
#[derive(Debug, Default)]
pub struct MemoryClient {
    messages: Vec<Message>,
    users: UserDirectory,
    posts: RefCell<Vec<(String, String)>>,
}

impl MemoryClient {
    /// Create a channel with the given history, newest first
    #[must_use]
    pub fn new(messages: Vec<Message>, users: UserDirectory) -> Self {
        Self {
            messages,
            users,
            posts: RefCell::default(),
        }
    }

    /// Posts recorded so far as (channel, text) pairs
    #[must_use]
    pub fn posts(&self) -> Vec<(String, String)> {
        self.posts.borrow().clone()
    }

    /// Text of the most recent post
    #[must_use]
    pub fn last_post(&self) -> Option<String> {
        self.posts.borrow().last().map(|(_, text)| text.clone())
    }
}

impl ChatClient for MemoryClient {
    fn history(&self, _channel: &str, oldest: Timestamp) -> Result<Vec<Message>, ChatError> {
        Ok(self
            .messages
            .iter()
            .filter(|message| message.ts() >= oldest)
            .cloned()
            .collect())
    }

    fn user_names(&self) -> Result<UserDirectory, ChatError> {
        Ok(self.users.clone())
    }

    fn post(&self, channel: &str, text: &str) -> Result<(), ChatError> {
        self.posts
            .borrow_mut()
            .push((channel.to_string(), text.to_string()));
        Ok(())
    }
}
