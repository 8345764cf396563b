//! Client configuration — raw `Settings` intake and the validated `ClientConfig`.
//!
//! `Settings` mirrors the recognized construction options and can be loaded
//! from any serde format by the host application. `ClientConfig::from_settings`
//! validates it once; the result is never mutated afterwards.

use std::fmt;
#[cfg(feature = "http")]
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::auth::{present, AuthStrategy};
use crate::error::ConfigError;
use crate::network::{self, API_VERSION, DEFAULT_PATH_PREFIX, DEFAULT_PROTOCOL};

/// Raw construction options. Every field is optional here; validation happens
/// in [`ClientConfig::from_settings`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub host: Option<String>,
    pub protocol: Option<String>,
    pub port: Option<u16>,
    pub path_prefix: Option<String>,
    pub oauth: Option<OAuthSettings>,
    pub basic_auth: Option<BasicAuthSettings>,
}

/// OAuth1 block. All four fields are required together.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OAuthSettings {
    pub consumer_key: Option<String>,
    /// PEM-encoded RSA private key (PKCS#1 or PKCS#8).
    pub private_key: Option<String>,
    /// The verified access token.
    pub token: Option<String>,
    pub token_secret: Option<String>,
}

/// Basic block: either `base64` or `username` + `password`.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicAuthSettings {
    /// Pre-encoded `user:pass`.
    pub base64: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl fmt::Debug for OAuthSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthSettings")
            .field("consumer_key", &self.consumer_key)
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .field("token", &self.token)
            .field("token_secret", &self.token_secret.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl fmt::Debug for BasicAuthSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuthSettings")
            .field("base64", &self.base64.as_ref().map(|_| "<redacted>"))
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Validated, immutable client configuration.
#[derive(Clone)]
pub struct ClientConfig {
    host: String,
    protocol: String,
    port: Option<u16>,
    path_prefix: String,
    auth: AuthStrategy,
    #[cfg(feature = "http")]
    cookie_jar: Option<Arc<reqwest::cookie::Jar>>,
}

impl ClientConfig {
    /// Validate raw settings: host first, then the authentication blocks.
    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigError> {
        let host = present(&settings.host).ok_or(ConfigError::MissingHost)?;
        let auth = AuthStrategy::resolve(settings.oauth.as_ref(), settings.basic_auth.as_ref())?;

        Ok(Self {
            host: host.to_string(),
            protocol: present(&settings.protocol)
                .unwrap_or(DEFAULT_PROTOCOL)
                .to_string(),
            port: settings.port,
            path_prefix: present(&settings.path_prefix)
                .unwrap_or(DEFAULT_PATH_PREFIX)
                .to_string(),
            auth,
            #[cfg(feature = "http")]
            cookie_jar: None,
        })
    }

    /// Attach a cookie store shared by every request of the client.
    #[cfg(feature = "http")]
    pub fn with_cookie_jar(mut self, jar: Arc<reqwest::cookie::Jar>) -> Self {
        self.cookie_jar = Some(jar);
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    pub fn path_prefix(&self) -> &str {
        &self.path_prefix
    }

    pub fn api_version(&self) -> &'static str {
        API_VERSION
    }

    pub fn auth(&self) -> &AuthStrategy {
        &self.auth
    }

    #[cfg(feature = "http")]
    pub fn cookie_jar(&self) -> Option<&Arc<reqwest::cookie::Jar>> {
        self.cookie_jar.as_ref()
    }

    /// Absolute URL for a path relative to the Agile API root.
    pub fn build_url(&self, path: &str) -> String {
        network::build_url(
            &self.protocol,
            &self.host,
            self.port,
            &self.path_prefix,
            path,
        )
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("ClientConfig");
        s.field("host", &self.host)
            .field("protocol", &self.protocol)
            .field("port", &self.port)
            .field("path_prefix", &self.path_prefix)
            .field("auth", &self.auth);
        #[cfg(feature = "http")]
        s.field("cookie_jar", &self.cookie_jar.is_some());
        s.finish()
    }
}
