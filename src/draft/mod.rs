//! Persisted snapshot of the wizard: the current step plus every field value.
//!
//! Layout: `{ "step": 2, "values": { "trigger": ["Created"], "workflowName": "x" } }`.
//! Checkbox groups are always stored as arrays (possibly empty), text fields
//! as plain strings.

use crate::core::FieldName;
use crate::core::field::FieldKind;
use crate::core::form::Form;
use crate::error::{Result, WorkflowError};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DraftValue {
    Text(String),
    Selection(IndexSet<String>),
}

impl DraftValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            Self::Selection(_) => None,
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        match self {
            Self::Text(text) => text == value,
            Self::Selection(set) => set.contains(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Draft {
    pub step: usize,
    pub values: IndexMap<FieldName, DraftValue>,
}

#[derive(Deserialize)]
struct RawDraft {
    #[serde(default)]
    step: serde_json::Value,
    values: IndexMap<FieldName, DraftValue>,
}

impl Draft {
    pub fn encode(form: &Form, step: usize) -> Self {
        let mut values = IndexMap::<FieldName, DraftValue>::new();
        for field in form.fields() {
            match field.kind {
                FieldKind::Checkbox => {
                    let entry = values
                        .entry(field.name.clone())
                        .or_insert_with(|| DraftValue::Selection(IndexSet::new()));
                    // a checkbox group always persists as a selection
                    if let DraftValue::Text(_) = entry {
                        *entry = DraftValue::Selection(IndexSet::new());
                    }
                    if let DraftValue::Selection(set) = entry
                        && field.checked
                    {
                        set.insert(field.value.clone());
                    }
                }
                FieldKind::Text => {
                    values
                        .entry(field.name.clone())
                        .or_insert_with(|| DraftValue::Text(field.value.clone()));
                }
                FieldKind::Button => {}
            }
        }
        Self { step, values }
    }

    pub fn to_json(&self) -> String {
        // Keys are strings and values are strings or string arrays, so this cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// A `step` that is not a whole number in `0..step_count` falls back to 0.
    pub fn decode(raw: &str, step_count: usize) -> Result<Self> {
        let parsed: RawDraft = serde_json::from_str(raw)
            .map_err(|err| WorkflowError::MalformedDraft(err.to_string()))?;

        let step = match whole_number(&parsed.step).map(usize::try_from) {
            Some(Ok(step)) if step < step_count => step,
            _ => {
                if !parsed.step.is_null() {
                    debug!(step = %parsed.step, step_count, "ignoring out-of-range draft step");
                }
                0
            }
        };

        Ok(Self {
            step,
            values: parsed.values,
        })
    }

    /// Fields the draft does not mention keep their current state.
    pub fn apply(&self, form: &mut Form) {
        for field in form.fields_mut() {
            let Some(recorded) = self.values.get(field.name.as_str()) else {
                continue;
            };
            match field.kind {
                FieldKind::Checkbox => field.checked = recorded.contains(&field.value),
                FieldKind::Text => match recorded.as_text() {
                    Some(text) => field.value = text.to_string(),
                    None => debug!(field = %field.name, "ignoring selection recorded for text field"),
                },
                FieldKind::Button => {}
            }
        }
    }
}

/// Accepts `2` as well as `2.0`; negative or fractional numbers are rejected.
fn whole_number(value: &serde_json::Value) -> Option<u64> {
    if let Some(step) = value.as_u64() {
        return Some(step);
    }
    let float = value.as_f64()?;
    (float.is_finite() && float >= 0.0 && float.fract() == 0.0 && float <= u64::MAX as f64)
        .then_some(float as u64)
}
