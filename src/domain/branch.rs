use std::fmt;

use regex::Regex;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct BranchName(pub String);

impl BranchName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First `{project_key}-\w+` substring of the branch name.
    pub fn resolve_ticket(&self, project_key: &str) -> AppResult<Option<TicketKey>> {
        resolve_ticket(self.as_str(), project_key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketKey(String);

impl TicketKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn resolve_ticket(branch: &str, project_key: &str) -> AppResult<Option<TicketKey>> {
    let re = ticket_pattern(project_key)?;
    Ok(re.find(branch).map(|m| TicketKey(m.as_str().to_string())))
}

fn ticket_pattern(project_key: &str) -> AppResult<Regex> {
    let pattern = format!(r"{}-\w+", regex::escape(project_key));
    Regex::new(&pattern).map_err(|err| {
        AppError::Configuration(format!("invalid ticket pattern for project key '{project_key}': {err}"))
    })
}
