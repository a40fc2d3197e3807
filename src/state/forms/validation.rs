//! Rule tables and the pure validator that consumes them

use super::field::{FormFieldId, FormValues};
use crate::i18n::I18nKey;
use std::collections::{BTreeMap, BTreeSet};

/// Acceptance criterion for one field
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Value must be present and accepted by the field's enumeration
    RequiredChoice { is_member: fn(&str) -> bool },
}

/// One row of a step's rule table
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: FormFieldId,
    pub rule: Rule,
}

/// Field-scoped validation errors, each carrying a message key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<FormFieldId, I18nKey>,
}

impl FieldErrors {
    /// Errors for exactly one field
    pub fn single(field: FormFieldId, key: I18nKey) -> Self {
        let mut errors = Self::default();
        errors.insert(field, key);
        errors
    }

    pub fn get(&self, field: FormFieldId) -> Option<I18nKey> {
        self.errors.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = FormFieldId> + '_ {
        self.errors.keys().copied()
    }

    fn insert(&mut self, field: FormFieldId, key: I18nKey) {
        // First failing rule wins for a field
        self.errors.entry(field).or_insert(key);
    }
}

/// Run a rule table against candidate values
pub fn validate(rules: &[FieldRule], values: &FormValues) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    for FieldRule { field, rule } in rules {
        match rule {
            Rule::RequiredChoice { is_member } => match values.get(*field) {
                None => errors.insert(*field, I18nKey::ErrorRequired),
                Some(value) if value.trim().is_empty() => {
                    errors.insert(*field, I18nKey::ErrorRequired)
                }
                Some(value) if !is_member(value) => {
                    errors.insert(*field, I18nKey::ErrorInvalidChoice)
                }
                Some(_) => {}
            },
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Fields the user has interacted with
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TouchedFields {
    fields: BTreeSet<FormFieldId>,
}

impl TouchedFields {
    pub fn touch(&mut self, field: FormFieldId) {
        self.fields.insert(field);
    }

    pub fn touch_all(&mut self, rules: &[FieldRule]) {
        self.fields.extend(rules.iter().map(|r| r.field));
    }

    pub fn is_touched(&self, field: FormFieldId) -> bool {
        self.fields.contains(&field)
    }
}

/// Error to display for a field: only once it has been touched
pub fn visible_error(
    errors: &FieldErrors,
    touched: &TouchedFields,
    field: FormFieldId,
) -> Option<I18nKey> {
    if touched.is_touched(field) {
        errors.get(field)
    } else {
        None
    }
}
