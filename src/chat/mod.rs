//! Chat platform access
//!
//! The scoring core never talks to the network. Commands reach the channel
//! through the `ChatClient` trait, implemented for the Slack Web API and for
//! an in-memory channel used in tests.

pub mod memory;
pub mod slack;

use crate::core::{Message, Timestamp};
use rustc_hash::FxHashMap;
use thiserror::Error;

pub use memory::MemoryClient;
pub use slack::SlackClient;

/// Errors raised by a chat client
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("{method} request failed: {source}")]
    Transport {
        method: &'static str,
        #[source]
        source: Box<ureq::Error>,
    },
    #[error("{method} returned an unreadable response: {source}")]
    Decode {
        method: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("{method} failed: {code}")]
    Api { method: &'static str, code: String },
}

/// User id to display name lookup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDirectory {
    names: FxHashMap<String, String>,
}

impl UserDirectory {
    /// Display name for a user, falling back to the id when unknown or blank
    #[must_use]
    pub fn display_name<'a>(&'a self, user_id: &'a str) -> &'a str {
        self.names
            .get(user_id)
            .map(String::as_str)
            .filter(|name| !name.is_empty())
            .unwrap_or(user_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for UserDirectory {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            names: iter
                .into_iter()
                .map(|(id, name)| (id.into(), name.into()))
                .collect(),
        }
    }
}

/// The operations commands need from a chat channel
pub trait ChatClient {
    /// Messages posted at or after `oldest`, newest first
    ///
    /// # Errors
    /// Returns `ChatError` if the history cannot be fetched.
    fn history(&self, channel: &str, oldest: Timestamp) -> Result<Vec<Message>, ChatError>;

    /// Display names of the workspace members
    ///
    /// # Errors
    /// Returns `ChatError` if the member list cannot be fetched.
    fn user_names(&self) -> Result<UserDirectory, ChatError>;

    /// Post a message to a channel
    ///
    /// # Errors
    /// Returns `ChatError` if the message is rejected.
    fn post(&self, channel: &str, text: &str) -> Result<(), ChatError>;
}
