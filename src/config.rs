use crate::core::FieldName;
use crate::core::field::{FieldKind, FormField};
use crate::core::form::Form;
use crate::core::step::Step;
use crate::error::{Result, WorkflowError};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

const BUILTIN_WORKFLOW: &str = include_str!("../demos/workflow.yaml");

#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default)]
    pub groups: GroupNames,
    /// Step on which the conditional-action button may appear.
    #[serde(default = "default_conditional_step")]
    pub conditional_step: usize,
    #[serde(default)]
    pub save_confirmation: SaveConfirmation,
    pub steps: Vec<StepConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GroupNames {
    pub record_type: FieldName,
    pub trigger: FieldName,
    pub action: FieldName,
    #[serde(default)]
    pub select_all: Option<SelectAll>,
}

impl Default for GroupNames {
    fn default() -> Self {
        Self {
            record_type: FieldName::from("recordType"),
            trigger: FieldName::from("trigger"),
            action: FieldName::from("action"),
            select_all: Some(SelectAll {
                control: FieldName::from("selectAllRecordTypes"),
                group: FieldName::from("recordType"),
            }),
        }
    }
}

/// A checkbox that mirrors and drives a whole group.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectAll {
    pub control: FieldName,
    pub group: FieldName,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SaveConfirmation {
    pub label: String,
    pub idle_label: String,
    pub reset_after_ms: u64,
}

impl SaveConfirmation {
    pub fn reset_after(&self) -> Duration {
        Duration::from_millis(self.reset_after_ms)
    }
}

impl Default for SaveConfirmation {
    fn default() -> Self {
        Self {
            label: "Saved!".to_string(),
            idle_label: "Save & finish later".to_string(),
            reset_after_ms: 2000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StepConfig {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub fields: Vec<FieldConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldConfig {
    pub name: FieldName,
    pub kind: FieldKind,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub checked: bool,
}

fn default_storage_key() -> String {
    "workflowDraft".to_string()
}

fn default_conditional_step() -> usize {
    2
}

impl WorkflowConfig {
    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&raw)
    }

    /// Record types, criteria, trigger, action and review steps.
    pub fn builtin() -> Result<Self> {
        Self::from_yaml_str(BUILTIN_WORKFLOW)
    }

    pub fn with_steps(steps: Vec<StepConfig>) -> Result<Self> {
        let config = Self {
            storage_key: default_storage_key(),
            groups: GroupNames::default(),
            conditional_step: default_conditional_step(),
            save_confirmation: SaveConfirmation::default(),
            steps,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.steps.is_empty() {
            return Err(WorkflowError::InvalidConfig(
                "workflow needs at least one step".to_string(),
            ));
        }
        if self.storage_key.trim().is_empty() {
            return Err(WorkflowError::InvalidConfig(
                "storage_key must not be empty".to_string(),
            ));
        }
        if let Some(step) = self.steps.iter().find(|step| step.id.trim().is_empty()) {
            return Err(WorkflowError::InvalidConfig(format!(
                "step `{}` has an empty id",
                step.title
            )));
        }
        let fields = || self.steps.iter().flat_map(|step| &step.fields);
        if let Some(field) = fields().find(|field| {
            field.kind == FieldKind::Text
                && fields()
                    .any(|other| other.kind == FieldKind::Checkbox && other.name == field.name)
        }) {
            return Err(WorkflowError::InvalidConfig(format!(
                "`{}` is used by both a checkbox group and a text field",
                field.name
            )));
        }
        Ok(())
    }

    pub fn build_form(&self) -> Form {
        Form::new(
            self.steps
                .iter()
                .map(|step| {
                    Step::new(
                        step.id.clone(),
                        step.title.clone(),
                        step.fields.iter().map(FieldConfig::to_field).collect(),
                    )
                })
                .collect(),
        )
    }
}

impl StepConfig {
    pub fn new(id: impl Into<String>, title: impl Into<String>, fields: Vec<FieldConfig>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            fields,
        }
    }
}

impl FieldConfig {
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

    fn to_field(&self) -> FormField {
        FormField {
            name: self.name.clone(),
            kind: self.kind,
            value: self.value.clone(),
            label: self.label.clone(),
            checked: self.checked && self.kind == FieldKind::Checkbox,
        }
    }
}
