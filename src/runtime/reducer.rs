use crate::runtime::effect::Effect;
use crate::runtime::intent::Intent;
use crate::state::app_state::WorkflowState;
use crate::state::flow::Transition;
use crate::storage::DraftStore;

pub struct Reducer;

impl Reducer {
    pub fn reduce<S: DraftStore>(state: &mut WorkflowState<S>, intent: Intent) -> Vec<Effect> {
        let mut effects = match intent {
            Intent::Toggle {
                name,
                value,
                checked,
            } => {
                if state.toggle(name.as_str(), value.as_str(), checked) {
                    step_effects(state)
                } else {
                    vec![]
                }
            }
            Intent::SetText { name, value } => {
                if state.set_text(name.as_str(), value.as_str()) {
                    vec![Effect::RequestRender]
                } else {
                    vec![]
                }
            }
            Intent::Next => match state.next() {
                Transition::Moved { .. } => step_effects(state),
                Transition::SaveRequested => save_effects(state.save_label_confirmed()),
                Transition::Blocked | Transition::Unchanged => vec![],
            },
            Intent::Back => {
                if state.back().moved() {
                    step_effects(state)
                } else {
                    vec![]
                }
            }
            Intent::GoToIndicator(indicator) => {
                if state.go_to_indicator(indicator) {
                    step_effects(state)
                } else {
                    vec![]
                }
            }
            Intent::SaveDraft => save_effects(state.save_draft()),
            Intent::ResetSaveLabel => {
                state.reset_save_label();
                vec![Effect::RequestRender]
            }
        };

        effects.extend(
            state
                .take_pending_scheduler_commands()
                .into_iter()
                .map(Effect::Schedule),
        );
        effects
    }
}

/// The summary is rebuilt from live selections whenever the review step shows.
fn step_effects<S: DraftStore>(state: &WorkflowState<S>) -> Vec<Effect> {
    let mut effects = vec![Effect::RequestRender];
    if let Some(summary) = state.review_summary() {
        effects.push(Effect::SummaryUpdated(summary));
    }
    effects
}

fn save_effects(saved: bool) -> Vec<Effect> {
    if saved {
        vec![Effect::DraftSaved, Effect::RequestRender]
    } else {
        vec![Effect::RequestRender]
    }
}
