//! Submission persistence
//!
//! The questionnaire only ever writes finished submissions; nothing is read
//! back by the app.

mod jsonl;
mod recorder;
mod traits;

pub use jsonl::JsonlSubmissionStore;
pub use recorder::SubmissionRecorder;
pub use traits::SubmissionStore;

#[cfg(test)]
pub use traits::{MockSubmissionStore, StoreError};
