use crate::core::FieldName;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Checkbox,
    Text,
    Button,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub name: FieldName,
    pub kind: FieldKind,
    /// Option value for checkboxes, current text for text fields.
    pub value: String,
    pub label: Option<String>,
    pub checked: bool,
}

impl FormField {
    pub fn checkbox(name: impl Into<FieldName>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Checkbox,
            value: value.into(),
            label: None,
            checked: false,
        }
    }

    pub fn text(name: impl Into<FieldName>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Text,
            value: String::new(),
            label: None,
            checked: false,
        }
    }

    pub fn button(name: impl Into<FieldName>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Button,
            value: String::new(),
            label: None,
            checked: false,
        }
    }

    pub fn is_checkbox(&self) -> bool {
        self.kind == FieldKind::Checkbox
    }

    pub fn is_text(&self) -> bool {
        self.kind == FieldKind::Text
    }

    pub fn is_selected(&self) -> bool {
        self.is_checkbox() && self.checked
    }

    /// Label shown to the user, falling back to the option value.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(self.value.as_str())
    }
}
