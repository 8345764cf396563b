//! Request dispatcher — `AgileHttp`.
//!
//! Every resource call funnels through [`AgileHttp::make_request`]: attach the
//! client's authentication, send, classify the status and normalize the body.
//! No retries and no client-imposed timeout; a failed call surfaces at once.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, Request, Url};
use tracing;

use crate::auth::{AuthStrategy, BasicCredentials, OAuth1Credentials};
use crate::config::ClientConfig;
use crate::error::{ConfigError, HttpError};
use crate::http::executor::RequestExecutor;
use crate::http::request::RequestDescriptor;
use crate::http::response::{classify, ResponseValue};

/// HTTP dispatcher for the Agile REST API.
///
/// Cheap to clone; clones share configuration, connection pool and cookie jar.
#[derive(Debug, Clone)]
pub struct AgileHttp {
    config: Arc<ClientConfig>,
    client: Client,
}

impl AgileHttp {
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let mut builder = Client::builder();
        if let Some(jar) = config.cookie_jar() {
            builder = builder.cookie_provider(jar.clone());
        }

        Ok(Self {
            config: Arc::new(config),
            client: builder.build()?,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn build_url(&self, path: &str) -> String {
        self.config.build_url(path)
    }

    pub async fn make_request(
        &self,
        request: RequestDescriptor,
        success_literal: Option<&str>,
    ) -> Result<ResponseValue, HttpError> {
        let method = request.method;
        let query = request.query_pairs();

        let mut builder = self
            .client
            .request(method.into(), request.uri.as_str())
            .header(ACCEPT, "application/json");
        if !query.is_empty() {
            builder = builder.query(&query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        builder = match self.config.auth() {
            AuthStrategy::Basic(BasicCredentials::Encoded(token)) => {
                builder.header(AUTHORIZATION, format!("Basic {}", token))
            }
            AuthStrategy::Basic(BasicCredentials::UsernamePassword { username, password }) => {
                builder.basic_auth(username, Some(password))
            }
            AuthStrategy::OAuth1(_) | AuthStrategy::None => builder,
        };

        let mut outgoing = builder
            .build()
            .map_err(|e| HttpError::InvalidRequest(e.to_string()))?;
        if let AuthStrategy::OAuth1(creds) = self.config.auth() {
            let header = oauth_header(creds, &outgoing)?;
            outgoing.headers_mut().insert(AUTHORIZATION, header);
        }

        tracing::debug!(
            method = %method,
            auth = self.config.auth().as_str(),
            "Dispatching request to {}",
            outgoing.url()
        );

        let response = self.client.execute(outgoing).await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        tracing::debug!(status, "Response from {}", request.uri);

        classify(status, body, success_literal)
    }
}

#[async_trait]
impl RequestExecutor for AgileHttp {
    fn build_url(&self, path: &str) -> String {
        AgileHttp::build_url(self, path)
    }

    async fn make_request(
        &self,
        request: RequestDescriptor,
        success_literal: Option<&str>,
    ) -> Result<ResponseValue, HttpError> {
        AgileHttp::make_request(self, request, success_literal).await
    }
}

fn oauth_header(creds: &OAuth1Credentials, request: &Request) -> Result<HeaderValue, HttpError> {
    let url = request.url();
    let query: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let value = creds.authorization_header(request.method().as_str(), &base_uri(url), &query)?;
    HeaderValue::from_str(&value).map_err(|e| HttpError::Signing(e.to_string()))
}

/// `scheme://host[:port]/path`; default ports are left out.
fn base_uri(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{}://{}:{}{}", url.scheme(), host, port, url.path()),
        None => format!("{}://{}{}", url.scheme(), host, url.path()),
    }
}
