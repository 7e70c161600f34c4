use async_trait::async_trait;

use crate::domain::branch::TicketKey;
use crate::domain::subtask::SubtaskSummary;
use crate::error::AppResult;

/// Result of looking up a parent issue. A missing issue is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueLookup {
    Found(Vec<SubtaskSummary>),
    NotFound,
}

#[async_trait]
pub trait IssueTrackerService: Send + Sync {
    /// Subtasks of `ticket` in the order the tracker returns them.
    async fn fetch_subtasks(&self, ticket: &TicketKey) -> AppResult<IssueLookup>;
}
