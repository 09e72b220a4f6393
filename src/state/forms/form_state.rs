//! Immutable form state keyed by field name

use super::field::{FieldValue, FormField};

/// Ordered set of named fields.
///
/// The field set is fixed at construction: updates return a new state with a
/// single value replaced and never add or remove fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    fields: Vec<FormField>,
}

impl FormState {
    pub fn new(fields: Vec<FormField>) -> Self {
        debug_assert!(
            fields
                .iter()
                .enumerate()
                .all(|(i, f)| fields[..i].iter().all(|g| g.name != f.name)),
            "duplicate field names"
        );
        Self { fields }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn get(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Text value of `name`, empty when missing or not a text field
    pub fn text(&self, name: &str) -> &str {
        self.get(name).map(FormField::as_text).unwrap_or("")
    }

    /// Return a copy of this state with `name` set to `value`.
    ///
    /// Unknown names and mismatched value kinds are programming errors: they
    /// panic in debug builds and leave the state untouched otherwise.
    pub fn with_field(&self, name: &str, value: FieldValue) -> FormState {
        let mut next = self.clone();
        match next.fields.iter_mut().find(|f| f.name == name) {
            Some(field) if field.value.same_kind(&value) => field.value = value,
            Some(_) => {
                debug_assert!(false, "field `{name}` cannot hold {value:?}");
                tracing::error!("Ignoring value of wrong kind for field {name}");
            }
            None => {
                debug_assert!(false, "unknown form field `{name}`");
                tracing::error!("Ignoring update of unknown form field {name}");
            }
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> FormState {
        FormState::new(vec![
            FormField::text("adminName", "Admin Name"),
            FormField::email("adminEmail", "Admin Email"),
            FormField::checkbox("notify", "Notify"),
        ])
    }

    fn text(value: &str) -> FieldValue {
        FieldValue::Text(value.to_string())
    }

    #[test]
    fn test_with_field_replaces_only_that_field() {
        let state = sample();
        let next = state.with_field("adminName", text("Ada"));

        assert_eq!(next.text("adminName"), "Ada");
        assert_eq!(next.text("adminEmail"), "");
        // Previous state untouched
        assert_eq!(state.text("adminName"), "");
    }

    #[test]
    fn test_last_write_wins_and_unset_fields_keep_initial() {
        let state = sample()
            .with_field("adminName", text("A"))
            .with_field("adminEmail", text("x@y.z"))
            .with_field("adminName", text("Ada"));

        assert_eq!(state.text("adminName"), "Ada");
        assert_eq!(state.text("adminEmail"), "x@y.z");
        assert!(!state.get("notify").unwrap().as_flag());
    }

    #[test]
    fn test_field_set_is_fixed() {
        let state = sample().with_field("adminName", text("Ada"));
        let names: Vec<_> = state.fields().iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["adminName", "adminEmail", "notify"]);
        assert_eq!(state.len(), 3);
    }

    #[test]
    fn test_flag_field_update() {
        let state = sample().with_field("notify", FieldValue::Flag(true));
        assert!(state.get("notify").unwrap().as_flag());
    }

    #[test]
    fn test_text_of_missing_field_is_empty() {
        let state = sample();
        assert!(!state.contains("storeName"));
        assert_eq!(state.text("storeName"), "");
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "unknown form field")]
    fn test_unknown_field_panics_in_debug() {
        let _ = sample().with_field("storeName", text("Shop"));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "cannot hold")]
    fn test_wrong_kind_panics_in_debug() {
        let _ = sample().with_field("adminName", FieldValue::Flag(true));
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn test_unknown_field_is_noop_in_release() {
        let state = sample();
        assert_eq!(state.with_field("storeName", text("Shop")), state);
    }
}
