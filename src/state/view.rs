//! Render model handed to the presentation layer after every state change.

use crate::core::FieldName;
use crate::core::field::FieldKind;
use crate::state::app_state::{SaveLabel, WorkflowState};
use crate::state::progress::{self, IndicatorState};
use crate::storage::DraftStore;
use crate::summary::Summary;

pub const NEXT_LABEL: &str = "Next";
pub const SAVE_DRAFT_LABEL: &str = "Save Draft";

#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowView {
    pub steps: Vec<StepView>,
    pub indicators: Vec<IndicatorView>,
    pub buttons: ButtonsView,
    pub conditional_button_visible: bool,
    /// Present on the review step only.
    pub summary: Option<Summary>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepView {
    pub id: String,
    pub title: String,
    pub visible: bool,
    pub aria_hidden: bool,
    pub fields: Vec<FieldView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldView {
    pub name: FieldName,
    pub kind: FieldKind,
    pub value: String,
    pub label: String,
    /// Drives the `selected` class on the surrounding card.
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorView {
    pub label: String,
    pub state: IndicatorState,
    /// `completed` or `active`; upcoming indicators carry no class.
    pub class: Option<&'static str>,
    pub aria_selected: bool,
    pub link_disabled: bool,
    pub tab_index: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonsView {
    pub back_hidden: bool,
    pub save_hidden: bool,
    pub save_label: String,
    pub next_label: String,
    pub next_disabled: bool,
}

impl<S: DraftStore> WorkflowState<S> {
    pub fn view(&self) -> WorkflowView {
        WorkflowView {
            steps: self.step_views(),
            indicators: self.indicator_views(),
            buttons: self.buttons_view(),
            conditional_button_visible: self.conditional_button_visible(),
            summary: self.review_summary(),
        }
    }

    fn step_views(&self) -> Vec<StepView> {
        let current = self.current_step_index();
        self.form()
            .steps()
            .iter()
            .enumerate()
            .map(|(index, step)| StepView {
                id: step.id.clone(),
                title: step.title.clone(),
                visible: index == current,
                aria_hidden: index != current,
                fields: step
                    .fields
                    .iter()
                    .map(|field| FieldView {
                        name: field.name.clone(),
                        kind: field.kind,
                        value: field.value.clone(),
                        label: field.display_label().to_string(),
                        selected: field.is_selected(),
                    })
                    .collect(),
            })
            .collect()
    }

    fn indicator_views(&self) -> Vec<IndicatorView> {
        let current = self.current_step_index();
        (0..self.indicator_count())
            .map(|indicator| {
                let state = progress::classify(indicator, current);
                let enabled = self.indicator_enabled(indicator);
                let label = self
                    .form()
                    .step_at(progress::step_for_indicator(indicator))
                    .map(|step| step.title.clone())
                    .unwrap_or_default();
                IndicatorView {
                    label,
                    state,
                    class: state.css_class(),
                    aria_selected: state == IndicatorState::Active,
                    link_disabled: !enabled,
                    tab_index: if enabled { 0 } else { -1 },
                }
            })
            .collect()
    }

    fn buttons_view(&self) -> ButtonsView {
        let current = self.current_step_index();
        let confirmation = &self.config().save_confirmation;
        let confirmed = self.save_label() == SaveLabel::Confirmed;
        let save_label = if confirmed {
            confirmation.label.clone()
        } else {
            confirmation.idle_label.clone()
        };
        let next_label = match (self.is_review_step(), confirmed) {
            (false, _) => NEXT_LABEL.to_string(),
            (true, false) => SAVE_DRAFT_LABEL.to_string(),
            (true, true) => confirmation.label.clone(),
        };

        ButtonsView {
            back_hidden: current == 0,
            save_hidden: current <= 1,
            save_label,
            next_label,
            next_disabled: !self.validate(current),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::WorkflowConfig;
    use crate::state::app_state::WorkflowState;
    use crate::state::progress::IndicatorState;
    use crate::storage::MemoryStore;

    fn builtin_state() -> WorkflowState<MemoryStore> {
        let config = WorkflowConfig::builtin().expect("builtin config");
        WorkflowState::new(config, MemoryStore::new())
    }

    #[test]
    fn initial_view_shows_first_step_only() {
        let view = builtin_state().view();
        assert_eq!(view.steps.len(), 5);
        assert!(view.steps[0].visible);
        assert!(!view.steps[0].aria_hidden);
        assert!(view.steps[1..].iter().all(|step| !step.visible && step.aria_hidden));

        assert!(view.buttons.back_hidden);
        assert!(view.buttons.save_hidden);
        assert!(view.buttons.next_disabled);
        assert_eq!(view.buttons.next_label, "Next");
        assert!(view.summary.is_none());
    }

    #[test]
    fn indicators_collapse_first_two_steps() {
        let mut state = builtin_state();
        state.toggle("recordType", "Contact", true);
        state.next();

        let view = state.view();
        assert_eq!(view.indicators.len(), 4);
        assert_eq!(view.indicators[0].label, "Record types");
        assert_eq!(view.indicators[1].label, "Trigger");
        assert_eq!(view.indicators[0].state, IndicatorState::Active);
        assert!(view.indicators[0].aria_selected);
        assert_eq!(view.indicators[0].class, Some("active"));
        assert_eq!(view.indicators[2].class, None);
        // criteria step is still empty, so the joint gate keeps the link off
        assert!(view.indicators[0].link_disabled);
        assert_eq!(view.indicators[2].state, IndicatorState::Upcoming);
        assert_eq!(view.indicators[2].tab_index, -1);

        state.toggle("criteria", "Any record", true);
        let view = state.view();
        assert!(!view.indicators[0].link_disabled);
        assert_eq!(view.indicators[0].tab_index, 0);
    }

    #[test]
    fn selected_fields_are_flagged() {
        let mut state = builtin_state();
        state.toggle("recordType", "Lead", true);
        let view = state.view();
        let lead = view.steps[0]
            .fields
            .iter()
            .find(|field| field.value == "Lead")
            .expect("lead field");
        assert!(lead.selected);
        assert_eq!(view.steps[0].fields[0].label, "Select all");
    }

    #[test]
    fn review_step_relabels_next_and_carries_summary() {
        let mut state = builtin_state();
        for (name, value) in [
            ("recordType", "Contact"),
            ("criteria", "Any record"),
            ("trigger", "Created"),
            ("action", "Send email"),
        ] {
            state.toggle(name, value, true);
            state.next();
        }
        assert!(state.is_review_step());

        let view = state.view();
        assert_eq!(view.buttons.next_label, "Save Draft");
        assert!(!view.buttons.save_hidden);
        assert!(!view.buttons.next_disabled);
        assert!(view.summary.as_ref().is_some_and(|summary| summary.is_complete()));

        state.next();
        let view = state.view();
        assert_eq!(view.buttons.next_label, "Saved!");
        assert_eq!(view.buttons.save_label, "Saved!");
    }
}
