//! Trait abstraction for the submission store to enable mocking in tests

use crate::state::FullFormModel;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A finalized questionnaire snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    /// Answers, flattened next to the metadata
    #[serde(flatten)]
    pub form: FullFormModel,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    pub session_id: Uuid,
}

impl Submission {
    pub fn new(form: FullFormModel, timestamp: i64, session_id: Uuid) -> Self {
        Self {
            form,
            timestamp,
            session_id,
        }
    }
}

/// Errors raised while writing a submission
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Durable sink for submissions
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Record one submission
    async fn set_submission(&self, submission: &Submission) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::GoalType;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_submission_flattens_answers() {
        let session_id = Uuid::nil();
        let submission = Submission::new(
            FullFormModel {
                goal: Some(GoalType::MaintainWeight),
            },
            1_700_000_000_000,
            session_id,
        );

        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "goal": "MaintainWeight",
                "timestamp": 1_700_000_000_000i64,
                "session_id": "00000000-0000-0000-0000-000000000000",
            })
        );
    }

    #[test]
    fn test_submission_parses_back() {
        let json = r#"{"goal":"GainWeight","timestamp":5,"session_id":"00000000-0000-0000-0000-000000000000"}"#;
        let submission: Submission = serde_json::from_str(json).unwrap();
        assert_eq!(submission.form.goal, Some(GoalType::GainWeight));
        assert_eq!(submission.timestamp, 5);
    }

    #[test]
    fn test_store_error_display() {
        let err = StoreError::from(std::io::Error::other("disk full"));
        assert_eq!(err.to_string(), "IO error: disk full");
    }
}
