//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A resource-client call was missing a mandatory argument. Raised before
    /// any network activity.
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),
}

/// Errors raised while constructing a client. Construction does not complete.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing host")]
    MissingHost,

    /// An OAuth block was supplied without one of its four mandatory fields.
    #[error("missing oauth {0}")]
    MissingOAuthField(&'static str),

    /// A Basic block was supplied without a token and without `username` or `password`.
    #[error("missing basic auth {0}")]
    MissingBasicField(&'static str),

    #[error("invalid oauth private key: {0}")]
    InvalidPrivateKey(String),

    #[error("basic auth token is not a valid header value")]
    InvalidBasicToken,

    #[cfg(feature = "http")]
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Failures delivered for a single dispatched request.
#[derive(Error, Debug)]
pub enum HttpError {
    /// Connection refused, DNS failure, timeout, broken body stream.
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx status. `body` is the raw, unparsed response body.
    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    /// A 2xx body that is not valid JSON.
    #[error("Invalid JSON in response body: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// The request could not be assembled (malformed URL or header). Nothing
    /// was sent.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Failed to sign request: {0}")]
    Signing(String),
}

impl HttpError {
    /// HTTP status of the response, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            #[cfg(feature = "http")]
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Raw response body for `Api` and `Parse` failures.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Api { body, .. } | Self::Parse { body, .. } => Some(body),
            _ => None,
        }
    }
}
