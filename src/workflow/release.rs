use std::path::PathBuf;

use tracing::info;

use crate::context::AppContext;
use crate::domain::branch::{BranchName, TicketKey};
use crate::domain::release::ReleaseLinks;
use crate::error::{AppError, AppResult};
use crate::infra::release_file::ReleaseFile;
use crate::infra::subtask_store::SubtaskStore;
use crate::services::IssueLookup;

#[derive(Debug)]
pub enum ReleaseOutcome {
    /// The parent issue does not exist; nothing was written.
    IssueNotFound { ticket: TicketKey },
    Written(ReleaseSummary),
}

#[derive(Debug)]
pub struct ReleaseSummary {
    pub ticket: TicketKey,
    pub subtasks_path: PathBuf,
    pub release_path: PathBuf,
    /// Keys of the subtasks listed in the release notes, in tracker order.
    pub included: Vec<String>,
    pub skipped: usize,
}

pub async fn generate_release_notes(
    ctx: &AppContext,
    branch_override: Option<String>,
) -> AppResult<ReleaseOutcome> {
    let branch = BranchName(branch_override.unwrap_or_else(|| ctx.config.branch_name.clone()));
    let project_key = &ctx.config.project_key;

    let ticket = branch
        .resolve_ticket(project_key)?
        .ok_or_else(|| AppError::NoTicketMatch {
            branch: branch.as_str().to_string(),
            project_key: project_key.clone(),
        })?;
    info!("Resolved ticket {ticket} from branch {}", branch.as_str());

    let subtasks = match ctx.issue_tracker.fetch_subtasks(&ticket).await? {
        IssueLookup::Found(subtasks) => subtasks,
        IssueLookup::NotFound => return Ok(ReleaseOutcome::IssueNotFound { ticket }),
    };

    let store = SubtaskStore::new(&ctx.config.subtasks_path);
    store.write(&subtasks).await?;

    let summary = write_release(ctx, &store, ticket).await?;
    Ok(ReleaseOutcome::Written(summary))
}

async fn write_release(
    ctx: &AppContext,
    store: &SubtaskStore,
    ticket: TicketKey,
) -> AppResult<ReleaseSummary> {
    // The persisted file is the source of truth for this stage.
    let subtasks = store.read().await?;
    info!("Parent Issue: {ticket}");

    let release = ReleaseFile::new(
        &ctx.config.release_path,
        ReleaseLinks::new(ctx.config.board_url()),
    );
    release.initialize(ticket.as_str()).await?;

    let mut included = Vec::new();
    let mut skipped = 0;
    for subtask in &subtasks {
        if !subtask.is_done() {
            info!("Subtask {} not done", subtask.key);
            skipped += 1;
            continue;
        }
        info!("Issue Key: {}, Summary: {}", subtask.key, subtask.summary);
        release.append(&subtask.key, &subtask.summary).await?;
        included.push(subtask.key.clone());
    }

    Ok(ReleaseSummary {
        ticket,
        subtasks_path: store.path().to_path_buf(),
        release_path: release.path().to_path_buf(),
        included,
        skipped,
    })
}
