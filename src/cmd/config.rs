use clap::{Args, Subcommand};

use crate::config::AppConfig;
use crate::error::AppResult;

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommand {
    /// Show the resolved configuration (secrets masked).
    Show,
}

pub fn run(command: ConfigCommand, config: &AppConfig) -> AppResult<()> {
    match command {
        ConfigCommand::Show => run_show(config),
    }
}

fn run_show(cfg: &AppConfig) -> AppResult<()> {
    println!("Branch name: {}", display_value(&cfg.branch_name));
    println!("Jira domain: {}", display_value(&cfg.jira_domain));
    println!("Jira site: {}", cfg.site_url());
    println!("Jira email: {}", display_value(&cfg.jira_email));
    println!("Jira API token: {}", mask_secret(&cfg.jira_token));
    println!("Project key: {}", display_value(&cfg.project_key));
    println!("Board: {}", cfg.board_url());
    println!("Subtasks file: {}", cfg.subtasks_path.display());
    println!("Release notes file: {}", cfg.release_path.display());

    Ok(())
}

fn display_value(value: &str) -> String {
    if value.is_empty() {
        "<not set>".to_string()
    } else {
        value.to_string()
    }
}

fn mask_secret(value: &str) -> String {
    match value.chars().count() {
        0 => "<not set>".to_string(),
        n if n > 6 => {
            let chars: Vec<char> = value.chars().collect();
            let prefix: String = chars[..3].iter().collect();
            let suffix: String = chars[n - 3..].iter().collect();
            format!("{prefix}***{suffix}")
        }
        _ => "***".to_string(),
    }
}
