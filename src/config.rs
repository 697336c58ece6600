//! Runtime configuration
//!
//! Chat settings come from command-line flags or the environment and are
//! only validated for the commands that talk to the channel.

use crate::core::Timestamp;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Default Slack Web API endpoint
pub const DEFAULT_API_BASE: &str = "https://slack.com/api";

/// Default length of the history window read when posting answers
pub const DEFAULT_WINDOW_HOURS: u64 = 12;

/// Errors raised while resolving configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing API token (set USER_TOKEN or pass --token)")]
    MissingToken,
    #[error("missing channel id (set CHANNEL_ID or pass --channel)")]
    MissingChannel,
    #[error("history window must be at least one hour")]
    EmptyWindow,
}

/// Settings needed to reach the puzzle channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    pub token: String,
    pub channel: String,
    pub api_base: String,
    pub window: Duration,
}

impl ChatConfig {
    /// Validate raw settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the token or channel is missing or blank, or
    /// the window is zero hours.
    pub fn resolve(
        token: Option<String>,
        channel: Option<String>,
        api_base: String,
        window_hours: u64,
    ) -> Result<Self, ConfigError> {
        let token = token
            .filter(|token| !token.trim().is_empty())
            .ok_or(ConfigError::MissingToken)?;
        let channel = channel
            .filter(|channel| !channel.trim().is_empty())
            .ok_or(ConfigError::MissingChannel)?;

        if window_hours == 0 {
            return Err(ConfigError::EmptyWindow);
        }

        Ok(Self {
            token,
            channel,
            api_base,
            window: Duration::from_secs(window_hours.saturating_mul(60 * 60)),
        })
    }

    /// Start of the history window ending at `now`
    #[must_use]
    pub fn oldest(&self, now: SystemTime) -> Timestamp {
        let oldest = now.checked_sub(self.window).unwrap_or(UNIX_EPOCH);
        let seconds = oldest
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_secs());

        Timestamp::from_secs(seconds as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(token: Option<&str>, channel: Option<&str>) -> Result<ChatConfig, ConfigError> {
        ChatConfig::resolve(
            token.map(str::to_string),
            channel.map(str::to_string),
            DEFAULT_API_BASE.to_string(),
            DEFAULT_WINDOW_HOURS,
        )
    }

    #[test]
    fn resolve_complete_settings() {
        let config = resolve(Some("xoxp-1"), Some("C1")).unwrap();
        assert_eq!(config.token, "xoxp-1");
        assert_eq!(config.channel, "C1");
        assert_eq!(config.window, Duration::from_secs(12 * 3600));
    }

    #[test]
    fn missing_token() {
        assert_eq!(resolve(None, Some("C1")), Err(ConfigError::MissingToken));
        assert_eq!(resolve(Some("  "), Some("C1")), Err(ConfigError::MissingToken));
    }

    #[test]
    fn missing_channel() {
        assert_eq!(resolve(Some("xoxp-1"), None), Err(ConfigError::MissingChannel));
    }

    #[test]
    fn zero_window_rejected() {
        let result = ChatConfig::resolve(
            Some("xoxp-1".to_string()),
            Some("C1".to_string()),
            DEFAULT_API_BASE.to_string(),
            0,
        );
        assert_eq!(result, Err(ConfigError::EmptyWindow));
    }

    #[test]
    fn oldest_is_window_before_now() {
        let config = resolve(Some("xoxp-1"), Some("C1")).unwrap();
        let now = UNIX_EPOCH + Duration::from_secs(1_642_126_151);

        let oldest = config.oldest(now);
        assert_eq!(oldest, Timestamp::from_secs(1_642_126_151.0 - 43_200.0));
    }
}
