use crate::core::FieldName;

/// UI events the presentation layer forwards to the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Toggle {
        name: FieldName,
        value: String,
        checked: bool,
    },
    SetText {
        name: FieldName,
        value: String,
    },
    Next,
    Back,
    GoToIndicator(usize),
    SaveDraft,
    ResetSaveLabel,
}

impl Intent {
    pub fn toggle(name: impl Into<FieldName>, value: impl Into<String>, checked: bool) -> Self {
        Self::Toggle {
            name: name.into(),
            value: value.into(),
            checked,
        }
    }

    pub fn set_text(name: impl Into<FieldName>, value: impl Into<String>) -> Self {
        Self::SetText {
            name: name.into(),
            value: value.into(),
        }
    }
}
