use std::path::{Path, PathBuf};

use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::info;

use crate::domain::release::ReleaseLinks;
use crate::error::AppResult;

pub struct ReleaseFile {
    path: PathBuf,
    links: ReleaseLinks,
}

impl ReleaseFile {
    pub fn new(path: impl Into<PathBuf>, links: ReleaseLinks) -> Self {
        Self {
            path: path.into(),
            links,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Truncates the file and writes the parent issue header.
    pub async fn initialize(&self, ticket: &str) -> AppResult<()> {
        fs::write(&self.path, self.links.header(ticket)).await?;
        info!("{} has been created!", self.path.display());
        Ok(())
    }

    pub async fn append(&self, key: &str, summary: &str) -> AppResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(self.links.entry(key, summary).as_bytes())
            .await?;
        file.flush().await?;
        info!("{} has been updated!", self.path.display());
        Ok(())
    }
}
