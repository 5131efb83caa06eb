mod navigation;
mod persistence;
mod value_sync;

use crate::config::WorkflowConfig;
use crate::core::form::Form;
use crate::runtime::scheduler::SchedulerCommand;
use crate::state::flow::Flow;
use crate::storage::DraftStore;
use crate::summary::{Summary, build_summary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveLabel {
    #[default]
    Idle,
    /// Shown after a successful save until the scheduled reset fires.
    Confirmed,
}

/// Wizard controller: form fields, step position and draft storage.
pub struct WorkflowState<S: DraftStore> {
    config: WorkflowConfig,
    form: Form,
    flow: Flow,
    store: S,
    save_label: SaveLabel,
    pending_scheduler: Vec<SchedulerCommand>,
}

impl<S: DraftStore> WorkflowState<S> {
    /// Builds the form from `config` and restores any stored draft once.
    pub fn new(config: WorkflowConfig, store: S) -> Self {
        let form = config.build_form();
        let flow = Flow::new(form.step_count());
        let mut state = Self {
            config,
            form,
            flow,
            store,
            save_label: SaveLabel::Idle,
            pending_scheduler: Vec::new(),
        };
        state.restore_draft();
        state
    }

    pub fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn step_count(&self) -> usize {
        self.flow.len()
    }

    pub fn current_step_index(&self) -> usize {
        self.flow.current_index()
    }

    pub fn is_review_step(&self) -> bool {
        self.flow.is_review_step()
    }

    pub fn validate(&self, step_index: usize) -> bool {
        self.form.validate(step_index)
    }

    pub fn save_label(&self) -> SaveLabel {
        self.save_label
    }

    pub fn save_label_confirmed(&self) -> bool {
        self.save_label == SaveLabel::Confirmed
    }

    /// Re-reads the current selections on every call.
    pub fn summary(&self) -> Summary {
        let groups = &self.config.groups;
        build_summary(
            &self.form.selected_values(groups.record_type.as_str()),
            &self.form.selected_values(groups.trigger.as_str()),
            &self.form.selected_values(groups.action.as_str()),
        )
    }

    pub fn review_summary(&self) -> Option<Summary> {
        self.is_review_step().then(|| self.summary())
    }

    pub fn conditional_button_visible(&self) -> bool {
        self.current_step_index() == self.config.conditional_step
            && self
                .form
                .fields_named(self.config.groups.trigger.as_str())
                .any(|field| field.is_selected())
    }

    pub fn take_pending_scheduler_commands(&mut self) -> Vec<SchedulerCommand> {
        std::mem::take(&mut self.pending_scheduler)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::config::{FieldConfig, StepConfig, WorkflowConfig};

    pub fn three_step_config() -> WorkflowConfig {
        WorkflowConfig::with_steps(vec![
            StepConfig::new(
                "records",
                "Records",
                vec![
                    FieldConfig::checkbox("recordType", "Contact"),
                    FieldConfig::checkbox("recordType", "Lead"),
                ],
            ),
            StepConfig::new(
                "trigger",
                "Trigger",
                vec![
                    FieldConfig::checkbox("trigger", "Created"),
                    FieldConfig::checkbox("trigger", "Updated"),
                ],
            ),
            StepConfig::new("review", "Review", vec![FieldConfig::text("workflowName")]),
        ])
        .expect("config")
    }
}
