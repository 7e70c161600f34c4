use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{AppError, AppResult};

pub const ENV_BRANCH_NAME: &str = "BRANCH_NAME";
pub const ENV_JIRA_API_TOKEN: &str = "JIRA_API_TOKEN";
pub const ENV_JIRA_EMAIL: &str = "JIRA_EMAIL";
pub const ENV_JIRA_DOMAIN: &str = "JIRA_DOMAIN";
pub const ENV_JIRA_PROJECT_KEY: &str = "JIRA_PROJECT_KEY";
pub const ENV_JIRA_BASE_URL: &str = "JIRA_BASE_URL";
pub const ENV_JIRA_BOARD_ID: &str = "JIRA_BOARD_ID";

pub const DEFAULT_SUBTASKS_FILE: &str = "subtasks.json";
pub const DEFAULT_RELEASE_FILE: &str = "RELEASE_NOTES.md";
pub const DEFAULT_BOARD_ID: u32 = 1;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub branch_name: String,
    pub jira_token: String,
    pub jira_email: String,
    pub jira_domain: String,
    pub project_key: String,
    /// Explicit site root; when unset the Atlassian cloud URL for `jira_domain` is used.
    pub jira_base_url: Option<String>,
    pub board_id: u32,
    pub subtasks_path: PathBuf,
    pub release_path: PathBuf,
}

impl AppConfig {
    /// Process environment, falling back to the nearest `.env` file.
    pub fn from_env() -> AppResult<Self> {
        let file = dotenv::dotenv_iter().map(file_vars).unwrap_or_default();
        Self::from_env_with(file)
    }

    pub fn from_env_file(path: &Path) -> AppResult<Self> {
        let file = dotenv::from_path_iter(path)
            .map(file_vars)
            .map_err(|err| {
                AppError::Configuration(format!("failed to read {}: {err}", path.display()))
            })?;
        Self::from_env_with(file)
    }

    fn from_env_with(file: HashMap<String, String>) -> AppResult<Self> {
        // Variables already set in the environment win over the file.
        Self::from_lookup(|key| env::var(key).ok().or_else(|| file.get(key).cloned()))
    }

    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| lookup(key).unwrap_or_default();

        let board_id = match lookup(ENV_JIRA_BOARD_ID).filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw.trim().parse::<u32>().map_err(|_| {
                AppError::Configuration(format!("{ENV_JIRA_BOARD_ID} must be a number, got '{raw}'"))
            })?,
            None => DEFAULT_BOARD_ID,
        };

        Ok(Self {
            branch_name: required(ENV_BRANCH_NAME),
            jira_token: required(ENV_JIRA_API_TOKEN),
            jira_email: required(ENV_JIRA_EMAIL),
            jira_domain: required(ENV_JIRA_DOMAIN),
            project_key: required(ENV_JIRA_PROJECT_KEY),
            jira_base_url: lookup(ENV_JIRA_BASE_URL).filter(|v| !v.trim().is_empty()),
            board_id,
            subtasks_path: PathBuf::from(DEFAULT_SUBTASKS_FILE),
            release_path: PathBuf::from(DEFAULT_RELEASE_FILE),
        })
    }

    /// Root of the Jira site, without a trailing slash.
    pub fn site_url(&self) -> String {
        match &self.jira_base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://{}.atlassian.net", self.jira_domain),
        }
    }

    pub fn board_url(&self) -> String {
        format!(
            "{}/jira/software/projects/{}/boards/{}",
            self.site_url(),
            self.project_key,
            self.board_id
        )
    }

    pub fn warn_on_missing(&self) {
        let settings = [
            (ENV_JIRA_API_TOKEN, &self.jira_token),
            (ENV_JIRA_EMAIL, &self.jira_email),
            (ENV_JIRA_PROJECT_KEY, &self.project_key),
        ];
        for (key, value) in settings {
            if value.is_empty() {
                warn!("{key} is not set; the run will likely fail");
            }
        }
        if self.jira_domain.is_empty() && self.jira_base_url.is_none() {
            warn!("{ENV_JIRA_DOMAIN} is not set; Jira links will be invalid");
        }
    }
}

fn file_vars<I, E>(entries: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = Result<(String, String), E>>,
{
    entries.into_iter().filter_map(Result::ok).collect()
}
