//! High-level client — `AgileClient` with nested sub-client accessors.
//!
//! Each resource has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use std::sync::Arc;

use crate::config::{BasicAuthSettings, ClientConfig, OAuthSettings, Settings};
use crate::domain::board::client::Boards;
use crate::domain::rapid_view::client::RapidViews;
use crate::domain::sprint::client::Sprints;
use crate::domain::team_calendar::client::TeamCalendars;
use crate::error::SdkError;
use crate::http::AgileHttp;

// Re-export sub-client types for convenience.
pub use crate::domain::board::client::Boards as BoardsClient;
pub use crate::domain::rapid_view::client::RapidViews as RapidViewsClient;
pub use crate::domain::sprint::client::Sprints as SprintsClient;
pub use crate::domain::team_calendar::client::TeamCalendars as TeamCalendarsClient;

/// The primary entry point for the SDK.
///
/// Provides nested sub-client accessors for each resource:
/// `client.boards()`, `client.sprints()`, etc.
#[derive(Debug, Clone)]
pub struct AgileClient {
    pub(crate) http: AgileHttp,
}

impl AgileClient {
    pub fn builder() -> AgileClientBuilder {
        AgileClientBuilder::default()
    }

    /// Build a client straight from raw settings.
    pub fn from_settings(settings: &Settings) -> Result<Self, SdkError> {
        Self::builder().settings(settings.clone()).build()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn boards(&self) -> Boards<'_> {
        Boards { executor: &self.http }
    }

    pub fn sprints(&self) -> Sprints<'_> {
        Sprints { executor: &self.http }
    }

    pub fn rapid_views(&self) -> RapidViews<'_> {
        RapidViews { executor: &self.http }
    }

    pub fn team_calendars(&self) -> TeamCalendars<'_> {
        TeamCalendars { executor: &self.http }
    }

    /// The underlying dispatcher, for endpoints without a sub-client.
    pub fn http(&self) -> &AgileHttp {
        &self.http
    }

    pub fn config(&self) -> &ClientConfig {
        self.http.config()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct AgileClientBuilder {
    settings: Settings,
    cookie_jar: Option<Arc<reqwest::cookie::Jar>>,
}

impl AgileClientBuilder {
    /// Replace every option with the given settings.
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn host(mut self, host: &str) -> Self {
        self.settings.host = Some(host.to_string());
        self
    }

    pub fn protocol(mut self, protocol: &str) -> Self {
        self.settings.protocol = Some(protocol.to_string());
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.settings.port = Some(port);
        self
    }

    pub fn path_prefix(mut self, prefix: &str) -> Self {
        self.settings.path_prefix = Some(prefix.to_string());
        self
    }

    /// OAuth1 credentials. `private_key` is a PEM-encoded RSA key.
    pub fn oauth(
        mut self,
        consumer_key: &str,
        private_key: &str,
        token: &str,
        token_secret: &str,
    ) -> Self {
        self.settings.oauth = Some(OAuthSettings {
            consumer_key: Some(consumer_key.to_string()),
            private_key: Some(private_key.to_string()),
            token: Some(token.to_string()),
            token_secret: Some(token_secret.to_string()),
        });
        self
    }

    pub fn basic_auth(mut self, username: &str, password: &str) -> Self {
        self.settings.basic_auth = Some(BasicAuthSettings {
            base64: None,
            username: Some(username.to_string()),
            password: Some(password.to_string()),
        });
        self
    }

    /// Pre-encoded `user:pass` token, sent verbatim.
    pub fn basic_auth_token(mut self, base64: &str) -> Self {
        self.settings.basic_auth = Some(BasicAuthSettings {
            base64: Some(base64.to_string()),
            username: None,
            password: None,
        });
        self
    }

    /// Share a cookie store across every request of the client.
    pub fn cookie_jar(mut self, jar: Arc<reqwest::cookie::Jar>) -> Self {
        self.cookie_jar = Some(jar);
        self
    }

    pub fn build(self) -> Result<AgileClient, SdkError> {
        let mut config = ClientConfig::from_settings(&self.settings)?;
        if let Some(jar) = self.cookie_jar {
            config = config.with_cookie_jar(jar);
        }

        tracing::debug!(
            host = config.host(),
            auth = config.auth().as_str(),
            "Built Agile client"
        );

        Ok(AgileClient {
            http: AgileHttp::new(config)?,
        })
    }
}
