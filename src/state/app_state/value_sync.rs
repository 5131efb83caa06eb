use super::WorkflowState;
use crate::storage::DraftStore;

impl<S: DraftStore> WorkflowState<S> {
    /// Sets one checkbox and keeps the select-all control in sync with its
    /// group. Returns false when no checkbox matches.
    pub fn toggle(&mut self, name: &str, value: &str, checked: bool) -> bool {
        if let Some(select_all) = &self.config.groups.select_all
            && select_all.control == name
        {
            if !self.form.has_checkbox_group(name) {
                return false;
            }
            self.form.set_group_checked(name, checked);
            self.form.set_group_checked(select_all.group.as_str(), checked);
            return true;
        }

        if !self.form.set_checked(name, value, checked) {
            return false;
        }
        if let Some(select_all) = &self.config.groups.select_all
            && select_all.group == name
        {
            let all = self.form.all_checked(name);
            self.form.set_group_checked(select_all.control.as_str(), all);
        }
        true
    }

    pub fn set_text(&mut self, name: &str, value: &str) -> bool {
        self.form.set_text(name, value)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::WorkflowConfig;
    use crate::state::app_state::WorkflowState;
    use crate::storage::MemoryStore;

    fn builtin_state() -> WorkflowState<MemoryStore> {
        let config = WorkflowConfig::builtin().expect("builtin config");
        WorkflowState::new(config, MemoryStore::new())
    }

    #[test]
    fn select_all_drives_the_group() {
        let mut state = builtin_state();
        assert!(state.toggle("selectAllRecordTypes", "all", true));
        assert_eq!(
            state.form().selected_values("recordType"),
            vec!["Contact", "Account", "Lead", "Opportunity"]
        );

        state.toggle("selectAllRecordTypes", "all", false);
        assert!(state.form().selected_values("recordType").is_empty());
    }

    #[test]
    fn group_members_drive_select_all() {
        let mut state = builtin_state();
        for value in ["Contact", "Account", "Lead", "Opportunity"] {
            state.toggle("recordType", value, true);
        }
        assert!(state.form().all_checked("selectAllRecordTypes"));

        state.toggle("recordType", "Lead", false);
        assert!(state.form().selected_values("selectAllRecordTypes").is_empty());
    }

    #[test]
    fn unknown_option_is_ignored() {
        let mut state = builtin_state();
        assert!(!state.toggle("recordType", "Invoice", true));
        assert!(!state.set_text("nope", "x"));
        assert!(state.set_text("workflowName", "Onboarding"));
    }

    #[test]
    fn conditional_button_needs_trigger_step_and_selection() {
        let mut state = builtin_state();
        state.toggle("trigger", "Created", true);
        assert!(!state.conditional_button_visible());

        state.toggle("recordType", "Contact", true);
        state.next();
        state.toggle("criteria", "Owned by me", true);
        state.next();
        assert!(state.conditional_button_visible());

        state.toggle("trigger", "Created", false);
        assert!(!state.conditional_button_visible());
    }
}
