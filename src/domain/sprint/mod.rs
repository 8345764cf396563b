//! Sprint domain — sprint membership, sprint queries and sprint reports.

pub mod client;

use serde::{Deserialize, Serialize};

/// Reported instead of the body when issues were added to a sprint.
pub const ADDED_TO_SPRINT: &str = "Added to Sprint";

/// Reported instead of the body when issues were removed from a sprint.
pub const REMOVED_FROM_SPRINT: &str = "Removed from Sprint";

/// Lifecycle state used to filter sprints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SprintState {
    Future,
    Active,
    Closed,
}

impl SprintState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Future => "future",
            Self::Active => "active",
            Self::Closed => "closed",
        }
    }
}

impl std::fmt::Display for SprintState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Filters for `GET /sprintquery/{rapidViewId}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SprintQueryOptions {
    pub include_historic: Option<bool>,
    pub include_future: Option<bool>,
}
