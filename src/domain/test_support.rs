//! Recording `RequestExecutor` used by the resource-client tests.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::HttpError;
use crate::http::response::classify;
use crate::http::{RequestDescriptor, RequestExecutor, ResponseValue};
use crate::network;

#[derive(Debug, Clone)]
pub(crate) struct Recorded {
    pub request: RequestDescriptor,
    pub success_literal: Option<String>,
}

/// Records every descriptor and answers with a canned status and body.
pub(crate) struct RecordingExecutor {
    calls: Mutex<Vec<Recorded>>,
    status: u16,
    body: String,
}

impl RecordingExecutor {
    pub fn replying(body: Value) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn failing(status: u16, body: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            status,
            body: body.to_string(),
        }
    }

    pub fn calls(&self) -> Vec<Recorded> {
        self.calls.lock().unwrap().clone()
    }

    pub fn only_call(&self) -> Recorded {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one request");
        calls.into_iter().next().unwrap()
    }
}

#[async_trait]
impl RequestExecutor for RecordingExecutor {
    fn build_url(&self, path: &str) -> String {
        network::build_url("https", "jira.test", None, "/", path)
    }

    async fn make_request(
        &self,
        request: RequestDescriptor,
        success_literal: Option<&str>,
    ) -> Result<ResponseValue, HttpError> {
        self.calls.lock().unwrap().push(Recorded {
            request,
            success_literal: success_literal.map(String::from),
        });
        classify(self.status, self.body.clone(), success_literal)
    }
}
