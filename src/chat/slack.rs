//! Slack Web API client
//!
//! Blocking HTTP calls to `conversations.history`, `users.list` and
//! `chat.postMessage`, authenticated with a bearer token.

use super::{ChatClient, ChatError, UserDirectory};
use crate::core::{Message, RawMessage, Timestamp};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

const PAGE_LIMIT: &str = "200";

/// Client for one Slack workspace
pub struct SlackClient {
    agent: ureq::Agent,
    api_base: String,
    token: String,
}

#[derive(Debug, Deserialize)]
struct ApiStatus {
    ok: bool,
    error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ResponseMetadata {
    #[serde(default)]
    next_cursor: String,
}

#[derive(Debug, Deserialize)]
struct HistoryPage {
    #[serde(flatten)]
    status: ApiStatus,
    #[serde(default)]
    messages: Vec<RawMessage>,
    #[serde(default)]
    response_metadata: ResponseMetadata,
}

#[derive(Debug, Deserialize)]
struct MembersPage {
    #[serde(flatten)]
    status: ApiStatus,
    #[serde(default)]
    members: Vec<Member>,
    #[serde(default)]
    response_metadata: ResponseMetadata,
}

#[derive(Debug, Deserialize)]
struct Member {
    id: String,
    #[serde(default)]
    profile: Profile,
}

#[derive(Debug, Default, Deserialize)]
struct Profile {
    #[serde(default)]
    display_name: String,
}

impl ApiStatus {
    fn check(self, method: &'static str) -> Result<(), ChatError> {
        if self.ok {
            Ok(())
        } else {
            Err(ChatError::Api {
                method,
                code: self.error.unwrap_or_else(|| "unknown_error".to_string()),
            })
        }
    }
}

/// A cursor-paginated API response
trait Page {
    type Item;

    /// Items on this page and the cursor of the next one (empty on the last page)
    fn into_parts(self, method: &'static str) -> Result<(Vec<Self::Item>, String), ChatError>;
}

impl Page for HistoryPage {
    type Item = RawMessage;

    fn into_parts(self, method: &'static str) -> Result<(Vec<RawMessage>, String), ChatError> {
        self.status.check(method)?;
        Ok((self.messages, self.response_metadata.next_cursor))
    }
}

impl Page for MembersPage {
    type Item = Member;

    fn into_parts(self, method: &'static str) -> Result<(Vec<Member>, String), ChatError> {
        self.status.check(method)?;
        Ok((self.members, self.response_metadata.next_cursor))
    }
}

/// Base query plus the cursor, when there is one
fn with_cursor<'a>(
    base: &[(&'a str, &'a str)],
    cursor: Option<&'a str>,
) -> Vec<(&'a str, &'a str)> {
    let mut query = base.to_vec();
    query.extend(cursor.map(|cursor| ("cursor", cursor)));
    query
}

/// Fetch pages until the API stops returning a cursor
///
/// `fetch` gets `None` for the first page and the previous page's cursor after that.
fn collect_pages<P, F>(method: &'static str, mut fetch: F) -> Result<Vec<P::Item>, ChatError>
where
    P: Page,
    F: FnMut(Option<&str>) -> Result<P, ChatError>,
{
    let mut items = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let (batch, next) = fetch(cursor.as_deref())?.into_parts(method)?;
        items.extend(batch);

        if next.is_empty() {
            tracing::debug!(method, count = items.len(), "read last page");
            return Ok(items);
        }
        cursor = Some(next);
    }
}

impl SlackClient {
    #[must_use]
    pub fn new(api_base: impl Into<String>, token: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(30))
            .build();

        Self {
            agent,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    fn url(&self, method: &str) -> String {
        format!("{}/{method}", self.api_base)
    }

    fn authorization(&self) -> String {
        format!("Bearer {}", self.token)
    }

    fn get<T: DeserializeOwned>(
        &self,
        method: &'static str,
        query: &[(&str, &str)],
    ) -> Result<T, ChatError> {
        tracing::debug!(method, "calling Slack API");

        self.agent
            .get(&self.url(method))
            .set("Authorization", &self.authorization())
            .query_pairs(query.iter().copied())
            .call()
            .map_err(|source| ChatError::Transport {
                method,
                source: Box::new(source),
            })?
            .into_json()
            .map_err(|source| ChatError::Decode { method, source })
    }
}

impl ChatClient for SlackClient {
    fn history(&self, channel: &str, oldest: Timestamp) -> Result<Vec<Message>, ChatError> {
        const METHOD: &str = "conversations.history";

        let oldest = oldest.to_string();
        let base = [
            ("channel", channel),
            ("oldest", oldest.as_str()),
            ("limit", PAGE_LIMIT),
        ];

        let raw = collect_pages(METHOD, |cursor| {
            self.get::<HistoryPage>(METHOD, &with_cursor(&base, cursor))
        })?;

        let messages: Vec<Message> = raw
            .into_iter()
            .filter_map(|raw| {
                Message::try_from(raw)
                    .map_err(|e| tracing::warn!(error = %e, "skipping unreadable message"))
                    .ok()
            })
            .collect();

        tracing::info!(count = messages.len(), "fetched channel history");
        Ok(messages)
    }

    fn user_names(&self) -> Result<UserDirectory, ChatError> {
        const METHOD: &str = "users.list";

        let base = [("limit", PAGE_LIMIT)];
        let members = collect_pages(METHOD, |cursor| {
            self.get::<MembersPage>(METHOD, &with_cursor(&base, cursor))
        })?;

        let names: Vec<(String, String)> = members
            .into_iter()
            .map(|member| (member.id, member.profile.display_name))
            .collect();

        tracing::info!(count = names.len(), "fetched user directory");
        Ok(names.into_iter().collect())
    }

    fn post(&self, channel: &str, text: &str) -> Result<(), ChatError> {
        const METHOD: &str = "chat.postMessage";

        tracing::debug!(method = METHOD, channel, "calling Slack API");

        let status: ApiStatus = self
            .agent
            .post(&self.url(METHOD))
            .set("Authorization", &self.authorization())
            .send_json(serde_json::json!({ "channel": channel, "text": text }))
            .map_err(|source| ChatError::Transport {
                method: METHOD,
                source: Box::new(source),
            })?
            .into_json()
            .map_err(|source| ChatError::Decode {
                method: METHOD,
                source,
            })?;

        status.check(METHOD)?;
        tracing::info!(channel, "posted message");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_page_decodes() {
        let page: HistoryPage = serde_json::from_str(
            r#"{
                "ok": true,
                "messages": [
                    {"type":"message","text":"誘引 → 引責","user":"U1","ts":"1642126149.021400","blocks":[]},
                    {"type":"message","subtype":"bot_message","text":"今日の問題： [誘]から[赦]まで","ts":"1642125292.017500","bot_id":"B1"}
                ],
                "has_more": false,
                "response_metadata": {"next_cursor": ""}
            }"#,
        )
        .unwrap();

        assert!(page.status.ok);
        assert_eq!(page.messages.len(), 2);
        assert_eq!(page.messages[1].bot_id.as_deref(), Some("B1"));
        assert!(page.response_metadata.next_cursor.is_empty());
    }

    #[test]
    fn error_status_becomes_api_error() {
        let page: HistoryPage =
            serde_json::from_str(r#"{"ok": false, "error": "channel_not_found"}"#).unwrap();

        match page.status.check("conversations.history") {
            Err(ChatError::Api { code, .. }) => assert_eq!(code, "channel_not_found"),
            other => panic!("expected API error, got {other:?}"),
        }
    }

    #[test]
    fn members_page_decodes_missing_profile() {
        let page: MembersPage = serde_json::from_str(
            r#"{"ok": true, "members": [
                {"id": "U1", "profile": {"display_name": "user1"}},
                {"id": "U2"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(page.members[0].profile.display_name, "user1");
        assert_eq!(page.members[1].profile.display_name, "");
    }

    fn members_page(json: &str) -> MembersPage {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn collect_pages_follows_cursor() {
        let mut pages = vec![
            members_page(r#"{"ok": true, "members": [{"id": "U1"}], "response_metadata": {"next_cursor": "dXNlcjpVMg=="}}"#),
            members_page(r#"{"ok": true, "members": [{"id": "U2"}, {"id": "U3"}], "response_metadata": {"next_cursor": ""}}"#),
        ]
        .into_iter();
        let mut cursors = Vec::new();

        let members = collect_pages("users.list", |cursor| {
            cursors.push(cursor.map(str::to_string));
            Ok(pages.next().unwrap())
        })
        .unwrap();

        let ids: Vec<_> = members.iter().map(|member| member.id.as_str()).collect();
        assert_eq!(ids, ["U1", "U2", "U3"]);
        assert_eq!(cursors, [None, Some("dXNlcjpVMg==".to_string())]);
    }

    #[test]
    fn collect_pages_stops_on_missing_metadata() {
        let mut calls = 0;
        let members = collect_pages("users.list", |_| {
            calls += 1;
            Ok(members_page(r#"{"ok": true, "members": [{"id": "U1"}]}"#))
        })
        .unwrap();

        assert_eq!(members.len(), 1);
        assert_eq!(calls, 1);
    }

    #[test]
    fn collect_pages_fails_on_error_page() {
        let mut pages = vec![
            members_page(r#"{"ok": true, "members": [{"id": "U1"}], "response_metadata": {"next_cursor": "next"}}"#),
            members_page(r#"{"ok": false, "error": "ratelimited"}"#),
        ]
        .into_iter();

        let result = collect_pages("users.list", |_| Ok(pages.next().unwrap()));
        assert!(matches!(result, Err(ChatError::Api { code, .. }) if code == "ratelimited"));
    }

    #[test]
    fn with_cursor_appends_only_when_present() {
        let base = [("limit", PAGE_LIMIT)];
        assert_eq!(with_cursor(&base, None), [("limit", "200")]);
        assert_eq!(
            with_cursor(&base, Some("abc")),
            [("limit", "200"), ("cursor", "abc")]
        );
    }

    #[test]
    fn api_base_trailing_slash_is_trimmed() {
        let client = SlackClient::new("https://slack.example/api/", "xoxp-test");
        assert_eq!(
            client.url("chat.postMessage"),
            "https://slack.example/api/chat.postMessage"
        );
    }
}
