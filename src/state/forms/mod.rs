//! Form domain layer
//!
//! Field definitions, rule tables, the aggregate questionnaire model and the
//! per-step controller that ties them together.

mod field;
mod form_state;
mod goal;
mod step;
mod validation;

pub use field::FormFieldId;
pub use form_state::{FormContext, FullFormModel};
pub use goal::{GoalFormModel, GoalType};
pub use step::{StepController, StepOutcome};

#[cfg(test)]
pub use step::StepPhase;
