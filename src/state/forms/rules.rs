//! Composable validation rules
//!
//! A rule pairs a pure [`Check`] with the message shown when it fails. Forms
//! hold rules in order and only the first violation is ever reported.

use super::form_state::FormState;

/// Predicate over a form state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Check {
    /// Field holds non-whitespace text
    NonEmpty(&'static str),
    /// Field looks like `local@domain` with both parts present
    Email(&'static str),
    /// Field holds at least `min` characters
    MinLength { field: &'static str, min: usize },
    /// Every listed field is non-empty
    Required(Vec<&'static str>),
    /// Every nested check holds
    AllOf(Vec<Check>),
}

impl Check {
    pub fn holds(&self, state: &FormState) -> bool {
        match self {
            Check::NonEmpty(field) => !state.text(field).trim().is_empty(),
            Check::Email(field) => is_email_shaped(state.text(field)),
            Check::MinLength { field, min } => state.text(field).chars().count() >= *min,
            Check::Required(fields) => fields
                .iter()
                .all(|field| Check::NonEmpty(*field).holds(state)),
            Check::AllOf(checks) => checks.iter().all(|check| check.holds(state)),
        }
    }
}

fn is_email_shaped(value: &str) -> bool {
    match value.trim().split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
        None => false,
    }
}

/// A check plus the message surfaced when it fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRule {
    check: Check,
    message: String,
}

impl ValidationRule {
    pub fn new(check: Check, message: impl Into<String>) -> Self {
        Self {
            check,
            message: message.into(),
        }
    }

    pub fn non_empty(field: &'static str, message: impl Into<String>) -> Self {
        Self::new(Check::NonEmpty(field), message)
    }

    #[allow(dead_code)]
    pub fn email(field: &'static str, message: impl Into<String>) -> Self {
        Self::new(Check::Email(field), message)
    }

    #[allow(dead_code)]
    pub fn min_length(field: &'static str, min: usize, message: impl Into<String>) -> Self {
        Self::new(Check::MinLength { field, min }, message)
    }

    pub fn required(fields: &[&'static str], message: impl Into<String>) -> Self {
        Self::new(Check::Required(fields.to_vec()), message)
    }

    /// `Err` with this rule's message when the check fails
    pub fn evaluate(&self, state: &FormState) -> Result<(), &str> {
        if self.check.holds(state) {
            Ok(())
        } else {
            Err(&self.message)
        }
    }
}

/// Message of the first rule that fails, in declaration order
pub fn first_violation<'a>(rules: &'a [ValidationRule], state: &FormState) -> Option<&'a str> {
    rules.iter().find_map(|rule| rule.evaluate(state).err())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::{FieldValue, FormField};

    fn state(pairs: &[(&'static str, &str)]) -> FormState {
        let mut state = FormState::new(pairs.iter().map(|&(n, _)| FormField::text(n, n)).collect());
        for (name, value) in pairs {
            state = state.with_field(name, FieldValue::Text(value.to_string()));
        }
        state
    }

    mod checks {
        use super::*;

        #[test]
        fn test_non_empty() {
            assert!(Check::NonEmpty("name").holds(&state(&[("name", "Ada")])));
            assert!(!Check::NonEmpty("name").holds(&state(&[("name", "")])));
            assert!(!Check::NonEmpty("name").holds(&state(&[("name", "   ")])));
        }

        #[test]
        fn test_email_shape() {
            let ok = |v: &str| Check::Email("email").holds(&state(&[("email", v)]));
            assert!(ok("ada@example.com"));
            assert!(ok("a@b"));
            assert!(!ok("bad"));
            assert!(!ok("@example.com"));
            assert!(!ok("ada@"));
            assert!(!ok(""));
        }

        #[test]
        fn test_min_length_counts_chars() {
            let check = Check::MinLength {
                field: "password",
                min: 6,
            };
            assert!(!check.holds(&state(&[("password", "12345")])));
            assert!(check.holds(&state(&[("password", "123456")])));
            assert!(check.holds(&state(&[("password", "ééééééé")])));
            assert!(!check.holds(&state(&[("password", "éééé")])));
        }

        #[test]
        fn test_required_subset() {
            let check = Check::Required(vec!["a", "c"]);
            assert!(check.holds(&state(&[("a", "1"), ("b", ""), ("c", "3")])));
            assert!(!check.holds(&state(&[("a", "1"), ("b", "2"), ("c", "")])));
        }

        #[test]
        fn test_all_of() {
            let check = Check::AllOf(vec![
                Check::Email("email"),
                Check::MinLength {
                    field: "password",
                    min: 6,
                },
            ]);
            assert!(check.holds(&state(&[("email", "a@b.c"), ("password", "123456")])));
            assert!(!check.holds(&state(&[("email", "a@b.c"), ("password", "123")])));
            assert!(!check.holds(&state(&[("email", "abc"), ("password", "123456")])));
        }

        #[test]
        fn test_missing_field_fails_non_empty() {
            assert!(!Check::NonEmpty("ghost").holds(&state(&[("name", "Ada")])));
        }
    }

    mod ordering {
        use super::*;

        #[test]
        fn test_first_violation_short_circuits_in_order() {
            let rules = vec![
                ValidationRule::non_empty("a", "A missing"),
                ValidationRule::non_empty("b", "B missing"),
            ];
            let empty = state(&[("a", ""), ("b", "")]);
            assert_eq!(first_violation(&rules, &empty), Some("A missing"));

            let only_b = state(&[("a", "x"), ("b", "")]);
            assert_eq!(first_violation(&rules, &only_b), Some("B missing"));

            let valid = state(&[("a", "x"), ("b", "y")]);
            assert_eq!(first_violation(&rules, &valid), None);
        }

        #[test]
        fn test_evaluate_is_deterministic() {
            let rule = ValidationRule::min_length("password", 6, "too short");
            let s = state(&[("password", "123")]);
            assert_eq!(rule.evaluate(&s), rule.evaluate(&s));
            assert_eq!(rule.evaluate(&s), Err("too short"));
        }

        #[test]
        fn test_constructors_keep_message() {
            let rule = ValidationRule::required(&["a", "b"], "Please fill in all fields");
            assert_eq!(
                rule.evaluate(&state(&[("a", "x"), ("b", " ")])),
                Err("Please fill in all fields")
            );
            let rule = ValidationRule::email("email", "bad email");
            assert_eq!(rule.evaluate(&state(&[("email", "x@y")])), Ok(()));
        }
    }
}
