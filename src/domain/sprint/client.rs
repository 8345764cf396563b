//! Sprints sub-client — issue membership, sprint queries and reports.

use serde_json::Value;

use crate::domain::sprint::{SprintQueryOptions, ADDED_TO_SPRINT, REMOVED_FROM_SPRINT};
use crate::error::SdkError;
use crate::http::{RequestDescriptor, RequestExecutor, ResponseValue};

pub struct Sprints<'a> {
    pub(crate) executor: &'a dyn RequestExecutor,
}

impl<'a> Sprints<'a> {
    pub fn new(executor: &'a dyn RequestExecutor) -> Self {
        Self { executor }
    }

    /// Move issues into a sprint. `issue` is sent verbatim as the body,
    /// e.g. `{"issues": ["AG-1"]}`. Resolves to [`ADDED_TO_SPRINT`].
    pub async fn add_to_sprint(
        &self,
        sprint_id: u64,
        issue: &Value,
    ) -> Result<ResponseValue, SdkError> {
        if issue.is_null() {
            return Err(SdkError::Usage("no issue passed".to_string()));
        }

        let url = self
            .executor
            .build_url(&format!("/sprint/{}/issue", sprint_id));
        let request = RequestDescriptor::post(url).body(issue.clone());

        Ok(self
            .executor
            .make_request(request, Some(ADDED_TO_SPRINT))
            .await?)
    }

    /// Remove issues from a sprint. Resolves to [`REMOVED_FROM_SPRINT`].
    pub async fn remove_from_sprint(
        &self,
        sprint_id: u64,
        issue_keys: &[&str],
    ) -> Result<ResponseValue, SdkError> {
        require_issue_keys(issue_keys)?;

        let url = self
            .executor
            .build_url(&format!("/sprint/{}/issue", sprint_id));
        let request = RequestDescriptor::delete(url).query("issues", issue_keys);

        Ok(self
            .executor
            .make_request(request, Some(REMOVED_FROM_SPRINT))
            .await?)
    }

    /// Remove issues through the sprint ranking endpoint
    /// (`/sprint/rank/{id}/remove`). Resolves to [`REMOVED_FROM_SPRINT`].
    pub async fn rank_remove(
        &self,
        sprint_id: u64,
        issue_keys: &[&str],
    ) -> Result<ResponseValue, SdkError> {
        require_issue_keys(issue_keys)?;

        let url = self
            .executor
            .build_url(&format!("/sprint/rank/{}/remove", sprint_id));
        let request = RequestDescriptor::put(url).query("issues", issue_keys);

        Ok(self
            .executor
            .make_request(request, Some(REMOVED_FROM_SPRINT))
            .await?)
    }

    /// All sprints of a rapid view.
    pub async fn sprint_query(
        &self,
        rapid_view_id: u64,
        options: SprintQueryOptions,
    ) -> Result<Value, SdkError> {
        let url = self
            .executor
            .build_url(&format!("/sprintquery/{}", rapid_view_id));
        let request = RequestDescriptor::get(url)
            .query_opt("includeHistoricSprints", options.include_historic)
            .query_opt("includeFutureSprints", options.include_future);

        Ok(self.executor.make_request(request, None).await?.into_json())
    }

    /// Burndown-style report for one sprint of a rapid view.
    pub async fn sprint_report(
        &self,
        rapid_view_id: u64,
        sprint_id: u64,
    ) -> Result<Value, SdkError> {
        let url = self.executor.build_url("/rapid/charts/sprintreport");
        let request = RequestDescriptor::get(url)
            .query("rapidViewId", rapid_view_id)
            .query("sprintId", sprint_id);

        Ok(self.executor.make_request(request, None).await?.into_json())
    }
}

fn require_issue_keys(issue_keys: &[&str]) -> Result<(), SdkError> {
    if issue_keys.is_empty() || issue_keys.iter().any(|k| k.is_empty()) {
        return Err(SdkError::Usage("no issue passed".to_string()));
    }
    Ok(())
}
