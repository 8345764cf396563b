//! The capability resource clients depend on.

use async_trait::async_trait;

use crate::error::HttpError;
use crate::http::request::RequestDescriptor;
use crate::http::response::ResponseValue;

/// URL building plus single-shot request execution.
///
/// Implemented by [`AgileHttp`](crate::http::AgileHttp). Resource clients hold a
/// `&dyn RequestExecutor` and never see configuration or credentials.
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    /// Absolute URL for a path relative to the Agile API root.
    fn build_url(&self, path: &str) -> String;

    /// Dispatch one request and resolve exactly once with its outcome.
    ///
    /// When `success_literal` is given, a 2xx outcome yields
    /// [`ResponseValue::Literal`] instead of the body.
    async fn make_request(
        &self,
        request: RequestDescriptor,
        success_literal: Option<&str>,
    ) -> Result<ResponseValue, HttpError>;
}
