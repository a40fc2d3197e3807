//! Form field identifiers and raw field values

use std::collections::BTreeMap;

/// Every collectible input in the questionnaire
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormFieldId {
    Goal,
}

impl FormFieldId {
    /// Stable field name, matches the serialized submission key
    pub fn name(&self) -> &'static str {
        match self {
            Self::Goal => "goal",
        }
    }
}

/// Raw, not yet validated values entered on a step
///
/// A missing entry means the user has not picked anything for that field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    values: BTreeMap<FormFieldId, String>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, mostly for seeding initial values
    pub fn with(mut self, field: FormFieldId, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: FormFieldId) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    pub fn set(&mut self, field: FormFieldId, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn clear(&mut self, field: FormFieldId) {
        self.values.remove(&field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_name() {
        assert_eq!(FormFieldId::Goal.name(), "goal");
    }

    #[test]
    fn test_empty_values_have_no_entries() {
        let values = FormValues::new();
        assert!(values.get(FormFieldId::Goal).is_none());
    }

    #[test]
    fn test_set_overwrites_and_clear_removes() {
        let mut values = FormValues::new().with(FormFieldId::Goal, "GainWeight");
        values.set(FormFieldId::Goal, "LoseWeight");
        assert_eq!(values.get(FormFieldId::Goal), Some("LoseWeight"));

        values.clear(FormFieldId::Goal);
        assert_eq!(values, FormValues::new());
    }
}
