use crate::context::AppContext;
use crate::error::AppResult;
use crate::workflow::release::{ReleaseOutcome, generate_release_notes};

#[derive(Debug, Clone)]
pub struct ReleaseCommandArgs {
    pub branch: Option<String>,
}

pub async fn run(ctx: &AppContext, args: ReleaseCommandArgs) -> AppResult<ReleaseOutcome> {
    generate_release_notes(ctx, args.branch).await
}
