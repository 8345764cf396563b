//! Authentication — strategy resolution and credential types.
//!
//! ## Strategy Model
//!
//! Exactly one [`AuthStrategy`] is chosen when a client is constructed and is
//! never changed afterwards:
//!
//! - **OAuth1**: RSA-SHA1 request signing. Wins over Basic when both blocks are
//!   supplied.
//! - **Basic**: either a pre-encoded `user:pass` token sent verbatim as
//!   `Authorization: Basic <token>`, or a username/password pair handed to the
//!   transport.
//! - **None**: requests go out unauthenticated.
//!
//! Credentials never travel on a [`RequestDescriptor`](crate::http::RequestDescriptor);
//! the dispatcher attaches them right before transmission.

pub mod oauth;

use std::fmt;

use crate::config::{BasicAuthSettings, OAuthSettings};
use crate::error::ConfigError;

pub use oauth::{OAuth1Credentials, SIGNATURE_METHOD};

/// The resolved authentication strategy of a client.
#[derive(Clone)]
pub enum AuthStrategy {
    OAuth1(OAuth1Credentials),
    Basic(BasicCredentials),
    None,
}

impl AuthStrategy {
    /// Resolve the strategy from the raw configuration blocks.
    ///
    /// An OAuth block takes precedence; the Basic block is only consulted when
    /// no OAuth block is present. Neither block resolves to [`AuthStrategy::None`].
    pub fn resolve(
        oauth: Option<&OAuthSettings>,
        basic: Option<&BasicAuthSettings>,
    ) -> Result<Self, ConfigError> {
        if let Some(oauth) = oauth {
            return Ok(Self::OAuth1(OAuth1Credentials::from_settings(oauth)?));
        }
        if let Some(basic) = basic {
            return Ok(Self::Basic(BasicCredentials::from_settings(basic)?));
        }
        Ok(Self::None)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OAuth1(_) => "oauth1",
            Self::Basic(_) => "basic",
            Self::None => "none",
        }
    }

    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Debug for AuthStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OAuth1(creds) => f.debug_tuple("OAuth1").field(creds).finish(),
            Self::Basic(creds) => f.debug_tuple("Basic").field(creds).finish(),
            Self::None => f.write_str("None"),
        }
    }
}

/// HTTP Basic credentials. Exactly one form is populated.
#[derive(Clone, PartialEq, Eq)]
pub enum BasicCredentials {
    /// Pre-encoded `user:pass`, used verbatim.
    Encoded(String),
    UsernamePassword { username: String, password: String },
}

impl BasicCredentials {
    fn from_settings(settings: &BasicAuthSettings) -> Result<Self, ConfigError> {
        if let Some(token) = present(&settings.base64) {
            if token.chars().any(|c| c.is_control()) {
                return Err(ConfigError::InvalidBasicToken);
            }
            return Ok(Self::Encoded(token.to_string()));
        }

        let username = present(&settings.username).ok_or(ConfigError::MissingBasicField("username"))?;
        let password = present(&settings.password).ok_or(ConfigError::MissingBasicField("password"))?;

        Ok(Self::UsernamePassword {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    /// Value of the `Authorization` header for the pre-encoded form.
    pub fn header_value(&self) -> Option<String> {
        match self {
            Self::Encoded(token) => Some(format!("Basic {}", token)),
            Self::UsernamePassword { .. } => None,
        }
    }
}

impl fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encoded(_) => f.write_str("Encoded(<redacted>)"),
            Self::UsernamePassword { username, .. } => f
                .debug_struct("UsernamePassword")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
        }
    }
}

/// Empty strings count as absent.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
