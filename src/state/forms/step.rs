//! Per-step controller: binds a step's inputs to the aggregate state

use super::field::{FormFieldId, FormValues};
use super::form_state::{FormContext, StepModel};
use super::validation::{self, FieldErrors, TouchedFields};
use crate::i18n::I18nKey;
use crate::state::View;
use std::marker::PhantomData;

/// Lifecycle of one step
///
/// `Idle → Validating → {Invalid → Idle, Valid} → Submitting → Merged → Navigated`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepPhase {
    #[default]
    Idle,
    Validating,
    Invalid,
    Valid,
    Submitting,
    Merged,
    Navigated,
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Submit is disabled in the current phase
    Ignored,
    /// Validation failed; the aggregate was not touched
    Invalid(FieldErrors),
    /// Values were merged; the caller should navigate to `next`
    Accepted { next: View },
}

/// Drives one step: validation on change/blur/submit and the aggregate merge
#[derive(Debug, Clone)]
pub struct StepController<M: StepModel> {
    values: FormValues,
    errors: FieldErrors,
    touched: TouchedFields,
    phase: StepPhase,
    _model: PhantomData<M>,
}

impl<M: StepModel> StepController<M> {
    /// Mount the step with values already present in the aggregate
    pub fn mount(ctx: &FormContext) -> Self {
        let values = M::initial_values(ctx.form_model());
        let mut controller = Self {
            values,
            errors: FieldErrors::default(),
            touched: TouchedFields::default(),
            phase: StepPhase::Idle,
            _model: PhantomData,
        };
        controller.revalidate();
        controller
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    #[cfg(test)]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn phase(&self) -> StepPhase {
        self.phase
    }

    /// Whether the submit action should be offered
    pub fn can_submit(&self) -> bool {
        !matches!(
            self.phase,
            StepPhase::Submitting | StepPhase::Merged | StepPhase::Navigated
        )
    }

    /// Error to render next to a field, hidden until the field is touched
    pub fn visible_error(&self, field: FormFieldId) -> Option<I18nKey> {
        validation::visible_error(&self.errors, &self.touched, field)
    }

    /// User changed a field's value
    pub fn change(&mut self, field: FormFieldId, value: impl Into<String>) {
        if !self.can_submit() {
            return;
        }
        self.values.set(field, value);
        self.revalidate();
    }

    /// User cleared a field
    pub fn clear(&mut self, field: FormFieldId) {
        if !self.can_submit() {
            return;
        }
        self.values.clear(field);
        self.revalidate();
    }

    /// Focus left a field
    pub fn blur(&mut self, field: FormFieldId) {
        self.touched.touch(field);
        if self.can_submit() {
            self.revalidate();
        }
    }

    /// Validate and, on success, merge into the aggregate
    ///
    /// The merge happens before `Accepted` is returned, so navigation by the
    /// caller always observes the updated aggregate.
    pub fn submit(&mut self, ctx: &mut FormContext) -> StepOutcome {
        if !self.can_submit() {
            return StepOutcome::Ignored;
        }

        self.touched.touch_all(M::rules());
        self.enter(StepPhase::Validating);

        let model = match M::validate(&self.values) {
            Ok(model) => model,
            Err(errors) => {
                tracing::debug!(fields = ?errors.fields().map(|f| f.name()).collect::<Vec<_>>(), "Step rejected");
                self.errors = errors.clone();
                self.enter(StepPhase::Invalid);
                self.enter(StepPhase::Idle);
                return StepOutcome::Invalid(errors);
            }
        };

        self.errors = FieldErrors::default();
        self.enter(StepPhase::Valid);
        self.enter(StepPhase::Submitting);
        ctx.set_form_model(model);
        self.enter(StepPhase::Merged);

        StepOutcome::Accepted {
            next: M::next_view(),
        }
    }

    /// The caller navigated away after an accepted submit
    pub fn mark_navigated(&mut self) {
        if matches!(self.phase, StepPhase::Merged) {
            self.enter(StepPhase::Navigated);
        }
    }

    fn revalidate(&mut self) {
        self.enter(StepPhase::Validating);
        match M::validate(&self.values) {
            Ok(_) => {
                self.errors = FieldErrors::default();
                self.enter(StepPhase::Valid);
            }
            Err(errors) => {
                self.errors = errors;
                self.enter(StepPhase::Invalid);
            }
        }
        // Interaction never leaves the step; only submit advances
        self.enter(StepPhase::Idle);
    }

    fn enter(&mut self, phase: StepPhase) {
        tracing::trace!(from = ?self.phase, to = ?phase, "Step phase change");
        self.phase = phase;
    }
}
