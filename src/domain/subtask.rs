use serde::{Deserialize, Serialize};

pub const UNASSIGNED: &str = "Unassigned";
pub const DONE_STATUS: &str = "Done";

/// Client-side projection of a Jira subtask, as persisted to `subtasks.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtaskSummary {
    pub key: String,
    pub summary: String,
    pub status: String,
    pub assignee: String,
}

impl SubtaskSummary {
    pub fn new(key: String, summary: String, status: String, assignee: Option<String>) -> Self {
        Self {
            key,
            summary,
            status,
            assignee: assignee.unwrap_or_else(|| UNASSIGNED.to_string()),
        }
    }

    /// Exact, case-sensitive match on the workflow status name.
    pub fn is_done(&self) -> bool {
        self.status == DONE_STATUS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_unassigned() {
        let subtask = SubtaskSummary::new(
            "PROJ-1".to_string(),
            "Wire login".to_string(),
            "Done".to_string(),
            None,
        );
        assert_eq!(subtask.assignee, "Unassigned");
    }

    #[test]
    fn done_is_exact_match() {
        let with_status = |status: &str| {
            SubtaskSummary::new(
                "PROJ-1".to_string(),
                "x".to_string(),
                status.to_string(),
                Some("Ada".to_string()),
            )
        };
        assert!(with_status("Done").is_done());
        assert!(!with_status("done").is_done());
        assert!(!with_status("DONE").is_done());
        assert!(!with_status("Done ").is_done());
        assert!(!with_status("In Progress").is_done());
    }
}
