//! OAuth 1.0a request signing with RSA-SHA1.
//!
//! The HTTP transport has no OAuth1 support, so requests are signed here:
//! the signature base string is built from the method, the normalized base
//! URI and the sorted protocol + query parameters, then signed with
//! RSASSA-PKCS1-v1_5 over SHA-1 and sent as an `Authorization: OAuth ...`
//! header. JSON bodies do not take part in the signature.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs1v15::SigningKey;
use rsa::pkcs8::DecodePrivateKey;
use rsa::signature::{SignatureEncoding, Signer};
use rsa::RsaPrivateKey;
use sha1::Sha1;

use crate::auth::present;
use crate::config::OAuthSettings;
use crate::error::{ConfigError, HttpError};

/// The only supported signature method.
pub const SIGNATURE_METHOD: &str = "RSA-SHA1";

const OAUTH_VERSION: &str = "1.0";
const NONCE_LEN: usize = 32;

/// Resolved OAuth1 credentials. All four inputs are mandatory together.
#[derive(Clone)]
pub struct OAuth1Credentials {
    consumer_key: String,
    token: String,
    /// Kept with the credential set; RSA-SHA1 signatures do not use it.
    token_secret: String,
    signing_key: SigningKey<Sha1>,
}

impl OAuth1Credentials {
    pub(crate) fn from_settings(settings: &OAuthSettings) -> Result<Self, ConfigError> {
        let consumer_key =
            present(&settings.consumer_key).ok_or(ConfigError::MissingOAuthField("consumer_key"))?;
        let private_key =
            present(&settings.private_key).ok_or(ConfigError::MissingOAuthField("private_key"))?;
        let token = present(&settings.token).ok_or(ConfigError::MissingOAuthField("token"))?;
        let token_secret =
            present(&settings.token_secret).ok_or(ConfigError::MissingOAuthField("token_secret"))?;

        Ok(Self {
            consumer_key: consumer_key.to_string(),
            token: token.to_string(),
            token_secret: token_secret.to_string(),
            signing_key: SigningKey::<Sha1>::new(parse_private_key(private_key)?),
        })
    }

    pub fn consumer_key(&self) -> &str {
        &self.consumer_key
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn token_secret(&self) -> &str {
        &self.token_secret
    }

    pub fn signature_method(&self) -> &'static str {
        SIGNATURE_METHOD
    }

    /// Build the `Authorization` header value for one request.
    ///
    /// `base_uri` is `scheme://host[:port]/path` without query; `query` holds
    /// the decoded query parameters that will be sent.
    pub fn authorization_header(
        &self,
        method: &str,
        base_uri: &str,
        query: &[(String, String)],
    ) -> Result<String, HttpError> {
        self.sign_with(method, base_uri, query, &nonce(), Utc::now().timestamp())
    }

    pub(crate) fn sign_with(
        &self,
        method: &str,
        base_uri: &str,
        query: &[(String, String)],
        nonce: &str,
        timestamp: i64,
    ) -> Result<String, HttpError> {
        let mut protocol = vec![
            ("oauth_consumer_key".to_string(), self.consumer_key.clone()),
            ("oauth_nonce".to_string(), nonce.to_string()),
            ("oauth_signature_method".to_string(), SIGNATURE_METHOD.to_string()),
            ("oauth_timestamp".to_string(), timestamp.to_string()),
            ("oauth_token".to_string(), self.token.clone()),
            ("oauth_version".to_string(), OAUTH_VERSION.to_string()),
        ];

        let mut params = protocol.clone();
        params.extend(query.iter().cloned());
        let base = signature_base_string(method, base_uri, &params);

        let signature = self
            .signing_key
            .try_sign(base.as_bytes())
            .map_err(|e| HttpError::Signing(e.to_string()))?;
        protocol.push((
            "oauth_signature".to_string(),
            STANDARD.encode(signature.to_bytes()),
        ));
        protocol.sort();

        let fields = protocol
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", encode(k), encode(v)))
            .collect::<Vec<_>>()
            .join(", ");
        Ok(format!("OAuth {}", fields))
    }
}

impl fmt::Debug for OAuth1Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuth1Credentials")
            .field("consumer_key", &self.consumer_key)
            .field("token", &self.token)
            .field("token_secret", &"<redacted>")
            .field("signature_method", &SIGNATURE_METHOD)
            .finish()
    }
}

/// `METHOD&enc(base_uri)&enc(k1=v1&k2=v2...)` with parameters encoded then sorted.
pub(crate) fn signature_base_string(
    method: &str,
    base_uri: &str,
    params: &[(String, String)],
) -> String {
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (encode(k), encode(v)))
        .collect();
    encoded.sort();

    let normalized = encoded
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.to_ascii_uppercase(),
        encode(base_uri),
        encode(&normalized)
    )
}

fn parse_private_key(pem: &str) -> Result<RsaPrivateKey, ConfigError> {
    RsaPrivateKey::from_pkcs1_pem(pem)
        .or_else(|_| RsaPrivateKey::from_pkcs8_pem(pem))
        .map_err(|e| ConfigError::InvalidPrivateKey(e.to_string()))
}

fn nonce() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(NONCE_LEN)
        .map(char::from)
        .collect()
}

/// RFC 3986 percent-encoding: everything but `A-Za-z0-9-._~`.
fn encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
