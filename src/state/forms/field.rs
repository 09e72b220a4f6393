//! Form field value objects

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// True when both values are the same variant
    pub fn same_kind(&self, other: &FieldValue) -> bool {
        matches!(
            (self, other),
            (FieldValue::Text(_), FieldValue::Text(_)) | (FieldValue::Flag(_), FieldValue::Flag(_))
        )
    }
}

/// How a field is presented and whether it accepts input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    /// Rendered masked
    Password,
    Checkbox,
    /// Shown but not editable
    ReadOnly,
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: InputKind,
    pub value: FieldValue,
}

impl FormField {
    /// Create an empty text field
    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self::with_kind(name, label, InputKind::Text)
    }

    pub fn email(name: &'static str, label: &'static str) -> Self {
        Self::with_kind(name, label, InputKind::Email)
    }

    pub fn password(name: &'static str, label: &'static str) -> Self {
        Self::with_kind(name, label, InputKind::Password)
    }

    #[allow(dead_code)]
    pub fn checkbox(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: InputKind::Checkbox,
            value: FieldValue::Flag(false),
        }
    }

    /// Create a read-only text field holding `value`
    pub fn read_only(name: &'static str, label: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            label,
            kind: InputKind::ReadOnly,
            value: FieldValue::Text(value.into()),
        }
    }

    fn with_kind(name: &'static str, label: &'static str, kind: InputKind) -> Self {
        Self {
            name,
            label,
            kind,
            value: FieldValue::Text(String::new()),
        }
    }

    /// Replace the initial value
    pub fn with_value(mut self, value: FieldValue) -> Self {
        self.value = value;
        self
    }

    pub fn is_editable(&self) -> bool {
        !matches!(self.kind, InputKind::ReadOnly)
    }

    /// Get the text value (returns empty string for flag fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Flag(_) => "",
        }
    }

    /// Get the flag value (returns false for text fields)
    #[allow(dead_code)]
    pub fn as_flag(&self) -> bool {
        match &self.value {
            FieldValue::Flag(b) => *b,
            FieldValue::Text(_) => false,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match (&self.value, self.kind) {
            (FieldValue::Text(s), InputKind::Password) => "•".repeat(s.chars().count()),
            (FieldValue::Text(s), _) => s.clone(),
            (FieldValue::Flag(true), _) => "[x]".to_string(),
            (FieldValue::Flag(false), _) => "[ ]".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_starts_empty() {
        let field = FormField::text("storeName", "Store Name");
        assert_eq!(field.as_text(), "");
        assert!(field.is_editable());
        assert_eq!(field.kind, InputKind::Text);
    }

    #[test]
    fn test_password_is_masked() {
        let field = FormField::password("adminPassword", "Admin Password")
            .with_value(FieldValue::Text("secret".to_string()));
        assert_eq!(field.display_value(), "••••••");
        assert_eq!(field.as_text(), "secret");
    }

    #[test]
    fn test_read_only_is_not_editable() {
        let field = FormField::read_only("email", "Email Address", "a@b.c");
        assert!(!field.is_editable());
        assert_eq!(field.display_value(), "a@b.c");
    }

    #[test]
    fn test_checkbox_display() {
        let field = FormField::checkbox("notify", "Notify");
        assert!(!field.as_flag());
        assert_eq!(field.display_value(), "[ ]");
        let field = field.with_value(FieldValue::Flag(true));
        assert!(field.as_flag());
        assert_eq!(field.as_text(), "");
        assert_eq!(field.display_value(), "[x]");
    }

    #[test]
    fn test_same_kind() {
        let text = FieldValue::Text("a".to_string());
        assert!(text.same_kind(&FieldValue::default()));
        assert!(!text.same_kind(&FieldValue::Flag(true)));
    }
}
