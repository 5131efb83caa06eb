use super::{SaveLabel, WorkflowState};
use crate::draft::Draft;
use crate::error::WorkflowError;
use crate::runtime::intent::Intent;
use crate::runtime::scheduler::SchedulerCommand;
use crate::storage::DraftStore;
use tracing::{debug, warn};

pub(crate) const SAVE_LABEL_RESET_KEY: &str = "save-label-reset";

impl<S: DraftStore> WorkflowState<S> {
    pub fn draft(&self) -> Draft {
        Draft::encode(&self.form, self.current_step_index())
    }

    /// Writes the draft. Storage failures are logged and leave the wizard
    /// running in memory.
    pub fn save_draft(&mut self) -> bool {
        let draft = self.draft();
        let key = self.config.storage_key.clone();
        match self.store.set(&key, &draft.to_json()) {
            Ok(()) => {
                debug!(key = %key, step = draft.step, "draft saved");
                self.save_label = SaveLabel::Confirmed;
                self.pending_scheduler.push(SchedulerCommand::Debounce {
                    key: SAVE_LABEL_RESET_KEY.to_string(),
                    delay: self.config.save_confirmation.reset_after(),
                    event: Intent::ResetSaveLabel,
                });
                true
            }
            Err(err) => {
                warn!(error = %err, "could not save draft");
                self.save_label = SaveLabel::Idle;
                false
            }
        }
    }

    pub fn reset_save_label(&mut self) {
        self.save_label = SaveLabel::Idle;
    }

    pub(super) fn restore_draft(&mut self) {
        let key = self.config.storage_key.clone();
        let raw = match self.store.get(&key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return,
            Err(err) => {
                warn!(error = %err, "could not read draft");
                return;
            }
        };

        match Draft::decode(&raw, self.step_count()) {
            Ok(draft) => {
                draft.apply(&mut self.form);
                self.flow.restore(draft.step);
                debug!(key = %key, step = draft.step, "draft restored");
            }
            Err(err @ WorkflowError::MalformedDraft(_)) => {
                warn!(error = %err, "discarding stored draft");
            }
            Err(err) => warn!(error = %err, "could not restore draft"),
        }
    }
}
