//! Chat message records
//!
//! `RawMessage` mirrors the wire shape of a chat history entry. It is
//! classified into the closed `Message` type before any parsing happens, so
//! the scoring code never inspects optional wire fields directly.

use serde::Deserialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while classifying or reading a message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    #[error("message is missing the `{0}` field")]
    MissingField(&'static str),
    #[error("invalid message timestamp `{0}`")]
    InvalidTimestamp(String),
}

/// Message timestamp in decimal seconds since the Unix epoch
///
/// Chat platforms send these as strings such as `"1642126151.021700"`.
/// Ordering uses `f64::total_cmp`, so timestamps can be sorted directly.
#[derive(Debug, Clone, Copy)]
pub struct Timestamp(f64);

impl Timestamp {
    #[must_use]
    pub const fn from_secs(seconds: f64) -> Self {
        Self(seconds)
    }

    #[must_use]
    pub const fn seconds(self) -> f64 {
        self.0
    }
}

impl FromStr for Timestamp {
    type Err = MessageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<f64>() {
            Ok(seconds) if seconds.is_finite() => Ok(Self(seconds)),
            _ => Err(MessageError::InvalidTimestamp(s.to_string())),
        }
    }
}

impl PartialEq for Timestamp {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Timestamp {}

impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timestamp {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}

/// A chat history entry as delivered by the message source
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawMessage {
    #[serde(rename = "type")]
    pub kind: String,
    pub subtype: Option<String>,
    pub text: Option<String>,
    pub user: Option<String>,
    pub bot_id: Option<String>,
    pub ts: String,
}

/// A classified chat message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Ordinary message written by a user
    Plain {
        user: String,
        text: String,
        ts: Timestamp,
    },
    /// Message posted by a bot integration
    Bot {
        bot_id: String,
        user: Option<String>,
        text: Option<String>,
        ts: Timestamp,
    },
    /// Channel event such as `channel_join`
    System {
        subtype: String,
        user: Option<String>,
        text: Option<String>,
        ts: Timestamp,
    },
    /// Any history entry whose type is not `message`
    Other { kind: String, ts: Timestamp },
}

const MESSAGE_KIND: &str = "message";

impl TryFrom<RawMessage> for Message {
    type Error = MessageError;

    fn try_from(raw: RawMessage) -> Result<Self, Self::Error> {
        let ts = raw.ts.parse()?;

        if raw.kind != MESSAGE_KIND {
            return Ok(Self::Other { kind: raw.kind, ts });
        }

        if let Some(bot_id) = raw.bot_id {
            return Ok(Self::Bot {
                bot_id,
                user: raw.user,
                text: raw.text,
                ts,
            });
        }

        if let Some(subtype) = raw.subtype {
            return Ok(Self::System {
                subtype,
                user: raw.user,
                text: raw.text,
                ts,
            });
        }

        Ok(Self::Plain {
            user: raw.user.ok_or(MessageError::MissingField("user"))?,
            text: raw.text.ok_or(MessageError::MissingField("text"))?,
            ts,
        })
    }
}

impl Message {
    /// Build a plain user message
    #[must_use]
    pub fn plain(user: impl Into<String>, text: impl Into<String>, ts: Timestamp) -> Self {
        Self::Plain {
            user: user.into(),
            text: text.into(),
            ts,
        }
    }

    /// Build a bot message without a user
    #[must_use]
    pub fn bot(bot_id: impl Into<String>, text: impl Into<String>, ts: Timestamp) -> Self {
        Self::Bot {
            bot_id: bot_id.into(),
            user: None,
            text: Some(text.into()),
            ts,
        }
    }

    #[must_use]
    pub const fn ts(&self) -> Timestamp {
        match self {
            Self::Plain { ts, .. }
            | Self::Bot { ts, .. }
            | Self::System { ts, .. }
            | Self::Other { ts, .. } => *ts,
        }
    }

    /// Whether the entry is of the `message` type
    #[must_use]
    pub const fn is_message(&self) -> bool {
        !matches!(self, Self::Other { .. })
    }

    #[must_use]
    pub fn user(&self) -> Option<&str> {
        match self {
            Self::Plain { user, .. } => Some(user),
            Self::Bot { user, .. } | Self::System { user, .. } => user.as_deref(),
            Self::Other { .. } => None,
        }
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Plain { text, .. } => Some(text),
            Self::Bot { text, .. } | Self::System { text, .. } => text.as_deref(),
            Self::Other { .. } => None,
        }
    }

    #[must_use]
    pub fn bot_id(&self) -> Option<&str> {
        match self {
            Self::Bot { bot_id, .. } => Some(bot_id),
            _ => None,
        }
    }

    /// Author of the message
    ///
    /// # Errors
    /// Returns `MessageError::MissingField` if the message has no user.
    pub fn require_user(&self) -> Result<&str, MessageError> {
        self.user().ok_or(MessageError::MissingField("user"))
    }

    /// Text of the message
    ///
    /// # Errors
    /// Returns `MessageError::MissingField` if the message has no text.
    pub fn require_text(&self) -> Result<&str, MessageError> {
        self.text().ok_or(MessageError::MissingField("text"))
    }
}
