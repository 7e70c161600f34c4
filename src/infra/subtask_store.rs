use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tokio::fs;
use tracing::info;

use crate::domain::subtask::SubtaskSummary;
use crate::error::AppResult;

const INDENT: &[u8] = b"    ";

/// JSON file holding the projected subtasks between the fetch and release stages.
pub struct SubtaskStore {
    path: PathBuf,
}

impl SubtaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrites the file with the given subtasks.
    pub async fn write(&self, subtasks: &[SubtaskSummary]) -> AppResult<()> {
        let data = to_json(subtasks)?;
        fs::write(&self.path, data).await?;
        info!("Filtered subtasks written to {}", self.path.display());
        Ok(())
    }

    pub async fn read(&self) -> AppResult<Vec<SubtaskSummary>> {
        let contents = fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&contents)?)
    }
}

fn to_json(subtasks: &[SubtaskSummary]) -> AppResult<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    subtasks.serialize(&mut serializer)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::error::AppError;

    fn sample() -> Vec<SubtaskSummary> {
        vec![
            SubtaskSummary::new(
                "PROJ-43".to_string(),
                "Add form".to_string(),
                "Done".to_string(),
                Some("Ada Lovelace".to_string()),
            ),
            SubtaskSummary::new(
                "PROJ-44".to_string(),
                "Add tests".to_string(),
                "To Do".to_string(),
                None,
            ),
        ]
    }

    #[tokio::test]
    async fn reads_back_what_was_written() {
        let dir = TempDir::new().unwrap();
        let store = SubtaskStore::new(dir.path().join("subtasks.json"));

        store.write(&sample()).await.unwrap();
        let read = store.read().await.unwrap();

        assert_eq!(read, sample());
        assert_eq!(read[1].assignee, "Unassigned");
    }

    #[tokio::test]
    async fn uses_four_space_indent() {
        let dir = TempDir::new().unwrap();
        let store = SubtaskStore::new(dir.path().join("subtasks.json"));

        store.write(&sample()[..1]).await.unwrap();
        let raw = std::fs::read_to_string(store.path()).unwrap();

        assert_eq!(
            raw,
            "[\n    {\n        \"key\": \"PROJ-43\",\n        \"summary\": \"Add form\",\n        \"status\": \"Done\",\n        \"assignee\": \"Ada Lovelace\"\n    }\n]"
        );
    }

    #[tokio::test]
    async fn overwrites_previous_content() {
        let dir = TempDir::new().unwrap();
        let store = SubtaskStore::new(dir.path().join("subtasks.json"));

        store.write(&sample()).await.unwrap();
        store.write(&[]).await.unwrap();

        assert!(store.read().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let store = SubtaskStore::new(dir.path().join("absent.json"));

        assert!(matches!(store.read().await, Err(AppError::Io(_))));
    }
}
