//! Board domain — boards and the sprints attached to them.

pub mod client;

use crate::domain::sprint::SprintState;

/// Filters for `GET /board/{id}/sprint`. Unset fields are not sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardSprintsQuery {
    pub state: Option<SprintState>,
    pub start_at: Option<u32>,
    pub max_results: Option<u32>,
}
