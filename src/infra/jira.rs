use async_trait::async_trait;
use base64::prelude::{BASE64_STANDARD, Engine as _};
use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, AUTHORIZATION},
};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::domain::branch::TicketKey;
use crate::domain::subtask::SubtaskSummary;
use crate::error::{AppError, AppResult};
use crate::services::{IssueLookup, IssueTrackerService};

pub struct JiraClient {
    http: Client,
    base_url: String,
    email: String,
    token: String,
}

impl JiraClient {
    pub fn new(base_url: String, email: String, token: String) -> Self {
        Self {
            http: Client::new(),
            base_url,
            email,
            token,
        }
    }

    fn auth_header(email: &str, token: &str) -> String {
        let credentials = format!("{email}:{token}");
        let encoded = BASE64_STANDARD.encode(credentials);
        format!("Basic {encoded}")
    }

    fn issue_endpoint(base_url: &str, ticket: &TicketKey) -> String {
        format!("{}/rest/api/2/issue/{}/", base_url.trim_end_matches('/'), ticket)
    }
}

#[async_trait]
impl IssueTrackerService for JiraClient {
    async fn fetch_subtasks(&self, ticket: &TicketKey) -> AppResult<IssueLookup> {
        let url = Self::issue_endpoint(&self.base_url, ticket);
        debug!("GET {url}");

        let response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, Self::auth_header(&self.email, &self.token))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| AppError::IssueTracker(format!("failed to call Jira: {err}")))?;

        let status = response.status();
        info!("Response: {status}");

        if status == StatusCode::NOT_FOUND {
            return Ok(IssueLookup::NotFound);
        }
        if !status.is_success() {
            return Err(AppError::RequestFailed { status });
        }

        let body = response
            .text()
            .await
            .map_err(|err| AppError::IssueTracker(format!("failed to read Jira response: {err}")))?;
        let subtasks = parse_subtasks(&body)?;

        Ok(IssueLookup::Found(
            subtasks.into_iter().map(JiraSubtask::into_summary).collect(),
        ))
    }
}

fn parse_subtasks(body: &str) -> AppResult<Vec<JiraSubtask>> {
    let payload: Value = serde_json::from_str(body)
        .map_err(|err| AppError::MalformedResponse(format!("body is not JSON: {err}")))?;

    let raw = payload
        .pointer("/fields/subtasks")
        .ok_or_else(|| AppError::MalformedResponse("missing fields.subtasks".to_string()))?;

    Vec::<JiraSubtask>::deserialize(raw)
        .map_err(|err| AppError::MalformedResponse(format!("invalid subtask entry: {err}")))
}

#[derive(Deserialize)]
struct JiraSubtask {
    key: String,
    fields: JiraSubtaskFields,
}

impl JiraSubtask {
    fn into_summary(self) -> SubtaskSummary {
        SubtaskSummary::new(
            self.key,
            self.fields.summary,
            self.fields.status.name,
            self.fields.assignee.map(|user| user.display_name),
        )
    }
}

#[derive(Deserialize)]
struct JiraSubtaskFields {
    summary: String,
    status: JiraStatus,
    #[serde(default)]
    assignee: Option<JiraUser>,
}

#[derive(Deserialize)]
struct JiraStatus {
    name: String,
}

#[derive(Deserialize)]
struct JiraUser {
    #[serde(rename = "displayName")]
    display_name: String,
}
