use super::WorkflowState;
use crate::state::flow::Transition;
use crate::state::progress;
use crate::storage::DraftStore;

impl<S: DraftStore> WorkflowState<S> {
    /// Moves forward when the current step validates. On the review step this
    /// saves the draft instead and returns `SaveRequested`.
    pub fn next(&mut self) -> Transition {
        let valid = self.validate(self.current_step_index());
        let transition = self.flow.advance(valid);
        if transition == Transition::SaveRequested {
            self.save_draft();
        }
        transition
    }

    pub fn back(&mut self) -> Transition {
        self.flow.retreat()
    }

    /// Returns false for forward jumps.
    pub fn go_to_step(&mut self, target: usize) -> bool {
        self.flow.jump_to(target)
    }

    pub fn indicator_count(&self) -> usize {
        progress::indicator_count(self.step_count())
    }

    pub fn indicator_enabled(&self, indicator: usize) -> bool {
        indicator < self.indicator_count()
            && progress::is_enabled(
                indicator,
                self.current_step_index(),
                self.step_count(),
                |step| self.validate(step),
            )
    }

    pub fn go_to_indicator(&mut self, indicator: usize) -> bool {
        if !self.indicator_enabled(indicator) {
            return false;
        }
        self.go_to_step(progress::step_for_indicator(indicator))
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{FieldConfig, StepConfig, WorkflowConfig};
    use crate::state::app_state::WorkflowState;
    use crate::state::app_state::test_support::three_step_config;
    use crate::state::flow::Transition;
    use crate::storage::MemoryStore;

    #[test]
    fn next_is_blocked_until_a_box_is_checked() {
        let mut state = WorkflowState::new(three_step_config(), MemoryStore::new());
        assert_eq!(state.next(), Transition::Blocked);
        assert_eq!(state.current_step_index(), 0);

        state.toggle("recordType", "Lead", true);
        assert_eq!(state.next(), Transition::Moved { from: 0, to: 1 });
    }

    #[test]
    fn next_on_review_step_saves_draft() {
        let mut state = WorkflowState::new(three_step_config(), MemoryStore::new());
        state.toggle("recordType", "Lead", true);
        state.next();
        state.toggle("trigger", "Created", true);
        state.next();
        assert!(state.is_review_step());

        assert_eq!(state.next(), Transition::SaveRequested);
        assert_eq!(state.current_step_index(), 2);
        assert!(state.store().raw("workflowDraft").is_some());
    }

    #[test]
    fn back_from_first_step_is_noop() {
        let mut state = WorkflowState::new(three_step_config(), MemoryStore::new());
        assert_eq!(state.back(), Transition::Unchanged);
        assert_eq!(state.current_step_index(), 0);
    }

    #[test]
    fn indicator_navigation_respects_gate_and_direction() {
        let config = WorkflowConfig::builtin().expect("builtin config");
        let mut state = WorkflowState::new(config, MemoryStore::new());
        state.toggle("recordType", "Contact", true);
        state.next();
        state.toggle("criteria", "Any record", true);
        state.next();
        state.toggle("trigger", "Created", true);
        state.next();
        assert_eq!(state.current_step_index(), 3);

        assert!(!state.go_to_indicator(3));
        assert!(state.go_to_indicator(1));
        assert_eq!(state.current_step_index(), 2);

        state.toggle("criteria", "Any record", false);
        assert!(!state.go_to_indicator(0));
        assert_eq!(state.current_step_index(), 2);
        assert!(!state.go_to_indicator(9));
    }

    #[test]
    fn completed_indicator_stays_clickable_when_criteria_is_empty() {
        let config = WorkflowConfig::builtin().expect("builtin config");
        let store = MemoryStore::new().with_entry(
            "workflowDraft",
            r#"{"step":3,"values":{"recordType":["Contact"],"trigger":["Created"]}}"#,
        );
        let mut state = WorkflowState::new(config, store);
        assert_eq!(state.current_step_index(), 3);
        assert!(!state.validate(1));

        assert!(!state.indicator_enabled(0));
        assert!(state.indicator_enabled(1));
        assert!(state.go_to_indicator(1));
        assert_eq!(state.current_step_index(), 2);
    }

    #[test]
    fn single_step_wizard_indicator_is_enabled_once_valid() {
        let config = WorkflowConfig::with_steps(vec![StepConfig::new(
            "only",
            "Only",
            vec![FieldConfig::checkbox("trigger", "Created")],
        )])
        .expect("config");
        let mut state = WorkflowState::new(config, MemoryStore::new());
        assert!(!state.indicator_enabled(0));

        state.toggle("trigger", "Created", true);
        assert!(state.indicator_enabled(0));
        assert!(state.go_to_indicator(0));
    }
}
