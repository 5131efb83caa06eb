use crate::runtime::Instant;
use crate::runtime::effect::Effect;
use crate::runtime::intent::Intent;
use crate::runtime::reducer::Reducer;
use crate::runtime::scheduler::Scheduler;
use crate::state::app_state::WorkflowState;
use crate::state::view::WorkflowView;
use crate::storage::DraftStore;
use std::time::Duration;

/// Presentation-layer port: receives a fresh view after every state change.
pub trait Presenter {
    fn render(&mut self, view: &WorkflowView);
}

pub struct Runner<S: DraftStore, P: Presenter> {
    state: WorkflowState<S>,
    scheduler: Scheduler,
    presenter: P,
}

impl<S: DraftStore, P: Presenter> Runner<S, P> {
    pub fn new(state: WorkflowState<S>, presenter: P) -> Self {
        Self {
            state,
            scheduler: Scheduler::new(),
            presenter,
        }
    }

    pub fn state(&self) -> &WorkflowState<S> {
        &self.state
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Initial render, including the summary when a draft reopened on review.
    pub fn start(&mut self) {
        self.render();
    }

    pub fn dispatch(&mut self, intent: Intent, now: Instant) -> Vec<Effect> {
        let effects = Reducer::reduce(&mut self.state, intent);
        self.apply_effects(&effects, now);
        effects
    }

    /// Fires scheduled events that are due.
    pub fn tick(&mut self, now: Instant) -> Vec<Effect> {
        let mut effects = Vec::new();
        for intent in self.scheduler.drain_ready(now) {
            effects.extend(self.dispatch(intent, now));
        }
        effects
    }

    pub fn poll_timeout(&self, now: Instant, default_timeout: Duration) -> Duration {
        self.scheduler.poll_timeout(now, default_timeout)
    }

    fn apply_effects(&mut self, effects: &[Effect], now: Instant) {
        let mut render_requested = false;
        for effect in effects {
            match effect {
                Effect::Schedule(command) => self.scheduler.schedule(command.clone(), now),
                Effect::RequestRender | Effect::SummaryUpdated(_) | Effect::DraftSaved => {
                    render_requested = true;
                }
            }
        }
        if render_requested {
            self.render();
        }
    }

    fn render(&mut self) {
        let view = self.state.view();
        self.presenter.render(&view);
    }
}
