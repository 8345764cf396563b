//! Boards sub-client — board listing and board sprints.

use serde_json::Value;

use crate::domain::board::BoardSprintsQuery;
use crate::error::SdkError;
use crate::http::{RequestDescriptor, RequestExecutor};

pub struct Boards<'a> {
    pub(crate) executor: &'a dyn RequestExecutor,
}

impl<'a> Boards<'a> {
    pub fn new(executor: &'a dyn RequestExecutor) -> Self {
        Self { executor }
    }

    pub async fn get_all_boards(&self) -> Result<Value, SdkError> {
        let url = self.executor.build_url("/board");
        Ok(self
            .executor
            .make_request(RequestDescriptor::get(url), None)
            .await?
            .into_json())
    }

    pub async fn get_board(&self, board_id: u64) -> Result<Value, SdkError> {
        let url = self.executor.build_url(&format!("/board/{}", board_id));
        Ok(self
            .executor
            .make_request(RequestDescriptor::get(url), None)
            .await?
            .into_json())
    }

    pub async fn get_board_sprints(
        &self,
        board_id: u64,
        query: BoardSprintsQuery,
    ) -> Result<Value, SdkError> {
        let url = self
            .executor
            .build_url(&format!("/board/{}/sprint", board_id));
        let request = RequestDescriptor::get(url)
            .query_opt("state", query.state.map(|s| s.as_str()))
            .query_opt("startAt", query.start_at)
            .query_opt("maxResults", query.max_results);

        Ok(self.executor.make_request(request, None).await?.into_json())
    }
}
