//! Rapid views sub-client.

use serde_json::Value;

use crate::error::SdkError;
use crate::http::{RequestDescriptor, RequestExecutor};

pub struct RapidViews<'a> {
    pub(crate) executor: &'a dyn RequestExecutor,
}

impl<'a> RapidViews<'a> {
    pub fn new(executor: &'a dyn RequestExecutor) -> Self {
        Self { executor }
    }

    pub async fn get_all_rapid_views(&self) -> Result<Value, SdkError> {
        let url = self.executor.build_url("/rapidview");
        Ok(self
            .executor
            .make_request(RequestDescriptor::get(url), None)
            .await?
            .into_json())
    }

    pub async fn get_rapid_view(&self, rapid_view_id: u64) -> Result<Value, SdkError> {
        let url = self
            .executor
            .build_url(&format!("/rapidview/{}", rapid_view_id));
        Ok(self
            .executor
            .make_request(RequestDescriptor::get(url), None)
            .await?
            .into_json())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_support::RecordingExecutor;
    use serde_json::json;

    #[test]
    fn test_get_all_rapid_views() {
        let executor = RecordingExecutor::replying(json!({"views": []}));
        let views = RapidViews::new(&executor);

        let value = tokio_test::block_on(views.get_all_rapid_views()).unwrap();
        assert_eq!(value, json!({"views": []}));
        assert_eq!(
            executor.only_call().request.uri,
            "https://jira.test/rest/agile/1.0/rapidview"
        );
    }

    #[test]
    fn test_get_rapid_view() {
        let executor = RecordingExecutor::replying(json!({"id": 31}));
        let views = RapidViews::new(&executor);

        tokio_test::block_on(views.get_rapid_view(31)).unwrap();
        assert_eq!(
            executor.only_call().request.uri,
            "https://jira.test/rest/agile/1.0/rapidview/31"
        );
    }
}
