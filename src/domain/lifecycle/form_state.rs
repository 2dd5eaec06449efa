//! Form field values owned by a single controller.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping of field name to its current string value.
///
/// Declared fields always exist; an untouched field reads as the empty
/// string. Editing returns a new value so the lifecycle can swap whole states.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    fields: BTreeMap<String, String>,
}

impl FormState {
    /// Creates a form with the given fields, all empty.
    pub fn with_fields<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: names
                .into_iter()
                .map(|name| (name.into(), String::new()))
                .collect(),
        }
    }

    /// Returns the current value of a field, or "" if it was never declared.
    pub fn get(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    /// Returns a copy of this form with one field replaced.
    pub fn with_value(&self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.fields.insert(name.into(), value.into());
        next
    }

    /// Returns a copy of this form with every field emptied.
    pub fn cleared(&self) -> Self {
        Self {
            fields: self
                .fields
                .keys()
                .map(|name| (name.clone(), String::new()))
                .collect(),
        }
    }

    /// Returns true if every field is empty.
    pub fn is_blank(&self) -> bool {
        self.fields.values().all(String::is_empty)
    }

    /// Iterates over (name, value) pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_fields_start_empty() {
        let form = FormState::with_fields(["name", "email"]);
        assert_eq!(form.get("name"), "");
        assert!(form.is_blank());
        assert_eq!(form.iter().count(), 2);
    }

    #[test]
    fn with_value_leaves_original_untouched() {
        let form = FormState::with_fields(["query"]);
        let edited = form.with_value("query", "why?");
        assert_eq!(form.get("query"), "");
        assert_eq!(edited.get("query"), "why?");
    }

    #[test]
    fn cleared_keeps_field_names() {
        let form = FormState::with_fields(["a", "b"])
            .with_value("a", "1")
            .with_value("b", "2");
        let cleared = form.cleared();
        assert!(cleared.is_blank());
        assert_eq!(cleared.iter().map(|(k, _)| k).collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn unknown_field_reads_empty() {
        assert_eq!(FormState::default().get("missing"), "");
    }
}
