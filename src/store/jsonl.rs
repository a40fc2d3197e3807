//! Append-only JSON Lines file store

use super::traits::{StoreError, Submission, SubmissionStore};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// Writes each submission as one JSON object per line
#[derive(Debug, Clone)]
pub struct JsonlSubmissionStore {
    path: PathBuf,
}

impl JsonlSubmissionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SubmissionStore for JsonlSubmissionStore {
    async fn set_submission(&self, submission: &Submission) -> Result<(), StoreError> {
        let mut line = serde_json::to_string(submission)?;
        line.push('\n');

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        tracing::info!(
            path = %self.path.display(),
            session_id = %submission.session_id,
            "Submission saved"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FullFormModel, GoalType};
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    fn submission(goal: GoalType, timestamp: i64) -> Submission {
        Submission::new(
            FullFormModel { goal: Some(goal) },
            timestamp,
            Uuid::new_v4(),
        )
    }

    fn read_lines(path: &Path) -> Vec<Submission> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("submissions.jsonl");
        let store = JsonlSubmissionStore::new(&path);

        let first = submission(GoalType::GainWeight, 1);
        store.set_submission(&first).await.unwrap();

        assert_eq!(store.path(), path.as_path());
        assert_eq!(read_lines(&path), vec![first]);
    }

    #[tokio::test]
    async fn test_appends_instead_of_overwriting() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("submissions.jsonl");
        let store = JsonlSubmissionStore::new(&path);

        let first = submission(GoalType::LoseWeight, 1);
        let second = submission(GoalType::MaintainWeight, 2);
        store.set_submission(&first).await.unwrap();
        store.set_submission(&second).await.unwrap();

        assert_eq!(read_lines(&path), vec![first, second]);
    }

    #[tokio::test]
    async fn test_unwritable_path_reports_io_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened for appending
        let store = JsonlSubmissionStore::new(dir.path());

        let err = store
            .set_submission(&submission(GoalType::GainWeight, 1))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
    }
}
