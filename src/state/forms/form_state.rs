//! Aggregate questionnaire state shared by every step

use super::field::FormValues;
use super::goal::GoalType;
use super::validation::{FieldErrors, FieldRule};
use crate::state::View;
use serde::{Deserialize, Serialize};

/// Union of every step's values, filled in as the user progresses
///
/// A field stays `None` until its step has been accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullFormModel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<GoalType>,
}

impl FullFormModel {
    /// Forget every answer (flow restart)
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// A step's validated values and how they map onto the aggregate
pub trait StepModel: Sized {
    /// Rule table checked on every change, blur and submit
    fn rules() -> &'static [FieldRule];

    /// Seed the step's inputs from what was already answered
    fn initial_values(full: &FullFormModel) -> FormValues;

    /// Accept the raw values or report field-scoped errors
    fn validate(values: &FormValues) -> Result<Self, FieldErrors>;

    /// Shallow merge: only this step's fields are written
    fn merge_into(self, full: &mut FullFormModel);

    /// Where to go once the step is accepted
    fn next_view() -> View;
}

/// Explicit handle to the aggregate state and the persistence consent flag
#[derive(Debug, Clone, Default)]
pub struct FormContext {
    form_model: FullFormModel,
    save_submission: bool,
}

impl FormContext {
    pub fn new(save_submission: bool) -> Self {
        Self {
            form_model: FullFormModel::default(),
            save_submission,
        }
    }

    pub fn form_model(&self) -> &FullFormModel {
        &self.form_model
    }

    /// Merge a validated step into the aggregate
    pub fn set_form_model<M: StepModel>(&mut self, step: M) {
        step.merge_into(&mut self.form_model);
    }

    pub fn save_submission(&self) -> bool {
        self.save_submission
    }

    pub fn set_save_submission(&mut self, enabled: bool) {
        self.save_submission = enabled;
    }

    pub fn restart(&mut self) {
        self.form_model.reset();
    }
}
