/// Markdown fragments for the release notes document.
#[derive(Debug, Clone)]
pub struct ReleaseLinks {
    board_url: String,
}

impl ReleaseLinks {
    pub fn new(board_url: impl Into<String>) -> Self {
        Self {
            board_url: board_url.into(),
        }
    }

    pub fn issue_url(&self, key: &str) -> String {
        format!("{}?selectedIssue={}", self.board_url, key)
    }

    pub fn header(&self, ticket: &str) -> String {
        format!(
            "## Parent Issue\n[{ticket}]({})\n\n## Main Updates\n",
            self.issue_url(ticket)
        )
    }

    pub fn entry(&self, key: &str, summary: &str) -> String {
        format!("- [{key}]({}): {summary}\n", self.issue_url(key))
    }
}
