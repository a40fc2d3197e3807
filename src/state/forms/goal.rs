//! Goal step: the closed set of goals and the step model built from it

use super::field::{FormFieldId, FormValues};
use super::form_state::{FullFormModel, StepModel};
use super::validation::{self, FieldErrors, FieldRule, Rule};
use crate::i18n::I18nKey;
use crate::state::View;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the user wants to achieve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalType {
    LoseWeight,
    MaintainWeight,
    GainWeight,
}

impl GoalType {
    /// Every legal goal, in display order
    pub const ALL: [GoalType; 3] = [Self::LoseWeight, Self::MaintainWeight, Self::GainWeight];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LoseWeight => "LoseWeight",
            Self::MaintainWeight => "MaintainWeight",
            Self::GainWeight => "GainWeight",
        }
    }

    pub fn label_key(&self) -> I18nKey {
        match self {
            Self::LoseWeight => I18nKey::GoalLoseWeight,
            Self::MaintainWeight => I18nKey::GoalMaintainWeight,
            Self::GainWeight => I18nKey::GoalGainWeight,
        }
    }

    /// Whether a raw value names a goal
    pub fn is_member(value: &str) -> bool {
        value.parse::<GoalType>().is_ok()
    }
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw value that does not name a goal
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown goal '{0}'")]
pub struct UnknownGoal(pub String);

impl FromStr for GoalType {
    type Err = UnknownGoal;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|goal| goal.as_str() == s)
            .ok_or_else(|| UnknownGoal(s.to_string()))
    }
}

const GOAL_RULES: &[FieldRule] = &[FieldRule {
    field: FormFieldId::Goal,
    rule: Rule::RequiredChoice {
        is_member: GoalType::is_member,
    },
}];

/// Validated values of the goal step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalFormModel {
    pub goal: GoalType,
}

impl StepModel for GoalFormModel {
    fn rules() -> &'static [FieldRule] {
        GOAL_RULES
    }

    fn initial_values(full: &FullFormModel) -> FormValues {
        match full.goal {
            Some(goal) => FormValues::new().with(FormFieldId::Goal, goal.as_str()),
            None => FormValues::new(),
        }
    }

    fn validate(values: &FormValues) -> Result<Self, FieldErrors> {
        validation::validate(Self::rules(), values)?;
        let goal = values
            .get(FormFieldId::Goal)
            .and_then(|raw| raw.parse().ok())
            .ok_or_else(|| FieldErrors::single(FormFieldId::Goal, I18nKey::ErrorInvalidChoice))?;
        Ok(Self { goal })
    }

    fn merge_into(self, full: &mut FullFormModel) {
        full.goal = Some(self.goal);
    }

    fn next_view() -> View {
        View::Result
    }
}
