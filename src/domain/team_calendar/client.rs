//! Team calendars sub-client.

use serde_json::Value;

use crate::error::SdkError;
use crate::http::{RequestDescriptor, RequestExecutor};

pub struct TeamCalendars<'a> {
    pub(crate) executor: &'a dyn RequestExecutor,
}

impl<'a> TeamCalendars<'a> {
    pub fn new(executor: &'a dyn RequestExecutor) -> Self {
        Self { executor }
    }

    /// Sprints visible to team calendars, optionally narrowed by a JQL filter.
    pub async fn get_all_sprints(&self, jql: Option<&str>) -> Result<Value, SdkError> {
        let url = self
            .executor
            .build_url("/integration/teamcalendars/sprint/list");
        let request = RequestDescriptor::get(url).query_opt("jql", jql);

        Ok(self.executor.make_request(request, None).await?.into_json())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_support::RecordingExecutor;
    use serde_json::json;

    #[test]
    fn test_get_all_sprints_with_jql() {
        let executor = RecordingExecutor::replying(json!({"sprints": [{"id": 1}]}));
        let calendars = TeamCalendars::new(&executor);

        let value =
            tokio_test::block_on(calendars.get_all_sprints(Some("project = AG"))).unwrap();
        assert_eq!(value["sprints"][0]["id"], 1);

        let call = executor.only_call();
        assert_eq!(
            call.request.uri,
            "https://jira.test/rest/agile/1.0/integration/teamcalendars/sprint/list"
        );
        assert_eq!(
            call.request.query_pairs(),
            vec![("jql".to_string(), "project = AG".to_string())]
        );
    }

    #[test]
    fn test_get_all_sprints_without_jql_sends_no_query() {
        let executor = RecordingExecutor::replying(json!({"sprints": []}));
        let calendars = TeamCalendars::new(&executor);

        tokio_test::block_on(calendars.get_all_sprints(None)).unwrap();
        assert!(executor.only_call().request.query.is_empty());
    }
}
