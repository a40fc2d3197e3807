//! Consent-gated, fire-and-forget submission recording

use super::traits::{Submission, SubmissionStore};
use crate::state::FullFormModel;
use chrono::Utc;
use std::sync::Arc;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Hands finished questionnaires to the store when the user allowed it
#[derive(Clone)]
pub struct SubmissionRecorder {
    store: Arc<dyn SubmissionStore>,
    session_id: Uuid,
}

impl SubmissionRecorder {
    pub fn new(store: Arc<dyn SubmissionStore>) -> Self {
        Self {
            store,
            session_id: Uuid::new_v4(),
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Persist `form` in the background if `save_submission` is set.
    ///
    /// Returns `None` when nothing was recorded. The write runs on its own
    /// task; its outcome is only logged, callers are free to drop the handle.
    pub fn record(&self, form: &FullFormModel, save_submission: bool) -> Option<JoinHandle<()>> {
        if !save_submission {
            tracing::debug!("Submission not saved: no consent");
            return None;
        }

        let submission = Submission::new(
            form.clone(),
            Utc::now().timestamp_millis(),
            self.session_id,
        );
        let store = Arc::clone(&self.store);

        Some(tokio::spawn(async move {
            if let Err(e) = store.set_submission(&submission).await {
                tracing::warn!("Failed to save submission: {e}");
            }
        }))
    }
}
