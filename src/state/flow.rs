use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Done,
    Active,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The current step does not validate.
    Blocked,
    Moved { from: usize, to: usize },
    Unchanged,
    /// `advance` on the review step turns into the save action.
    SaveRequested,
}

impl Transition {
    pub fn moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Step index state machine. The index stays within `0..len`.
#[derive(Debug, Clone)]
pub struct Flow {
    step_count: usize,
    current: usize,
}

impl Flow {
    pub fn new(step_count: usize) -> Self {
        Self {
            step_count,
            current: 0,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.step_count
    }

    pub fn is_empty(&self) -> bool {
        self.step_count == 0
    }

    pub fn last_index(&self) -> usize {
        self.step_count.saturating_sub(1)
    }

    pub fn is_review_step(&self) -> bool {
        !self.is_empty() && self.current == self.last_index()
    }

    pub fn has_next(&self) -> bool {
        self.current + 1 < self.step_count
    }

    pub fn status_at(&self, index: usize) -> StepStatus {
        if index < self.current {
            StepStatus::Done
        } else if index == self.current {
            StepStatus::Active
        } else {
            StepStatus::Pending
        }
    }

    pub fn advance(&mut self, current_valid: bool) -> Transition {
        if !current_valid {
            return Transition::Blocked;
        }
        if self.is_review_step() {
            return Transition::SaveRequested;
        }
        if !self.has_next() {
            return Transition::Unchanged;
        }
        self.move_to(self.current + 1)
    }

    pub fn retreat(&mut self) -> Transition {
        if self.current == 0 {
            return Transition::Unchanged;
        }
        self.move_to(self.current - 1)
    }

    /// Accepts only completed steps or the current one.
    pub fn jump_to(&mut self, target: usize) -> bool {
        if target > self.current {
            debug!(requested = target, current = self.current, "rejected forward jump");
            return false;
        }
        self.move_to(target);
        true
    }

    /// Restores a persisted index; out-of-range values leave the flow untouched.
    pub fn restore(&mut self, step: usize) -> bool {
        if step >= self.step_count {
            return false;
        }
        self.current = step;
        true
    }

    fn move_to(&mut self, to: usize) -> Transition {
        let from = self.current;
        if from == to {
            return Transition::Unchanged;
        }
        self.current = to;
        debug!(from, to, "step changed");
        Transition::Moved { from, to }
    }
}

#[cfg(test)]
mod tests {
    use super::{Flow, StepStatus, Transition};

    #[test]
    fn advance_requires_valid_step() {
        let mut flow = Flow::new(3);
        assert_eq!(flow.advance(false), Transition::Blocked);
        assert_eq!(flow.current_index(), 0);

        assert_eq!(flow.advance(true), Transition::Moved { from: 0, to: 1 });
        assert_eq!(flow.current_index(), 1);
    }

    #[test]
    fn advance_on_review_step_requests_save() {
        let mut flow = Flow::new(2);
        flow.advance(true);
        assert!(flow.is_review_step());

        assert_eq!(flow.advance(true), Transition::SaveRequested);
        assert_eq!(flow.current_index(), 1);
    }

    #[test]
    fn retreat_stops_at_first_step() {
        let mut flow = Flow::new(3);
        assert_eq!(flow.retreat(), Transition::Unchanged);
        assert_eq!(flow.current_index(), 0);

        flow.advance(true);
        assert!(flow.retreat().moved());
        assert_eq!(flow.current_index(), 0);
    }

    #[test]
    fn jump_to_only_goes_backwards() {
        let mut flow = Flow::new(5);
        flow.advance(true);
        flow.advance(true);

        assert!(!flow.jump_to(3));
        assert_eq!(flow.current_index(), 2);
        assert!(flow.jump_to(2));
        assert_eq!(flow.current_index(), 2);
        assert!(flow.jump_to(0));
        assert_eq!(flow.current_index(), 0);
    }

    #[test]
    fn restore_rejects_out_of_range_step() {
        let mut flow = Flow::new(3);
        assert!(!flow.restore(3));
        assert_eq!(flow.current_index(), 0);
        assert!(flow.restore(2));
        assert!(flow.is_review_step());
    }

    #[test]
    fn status_tracks_position() {
        let mut flow = Flow::new(3);
        flow.advance(true);
        assert_eq!(flow.status_at(0), StepStatus::Done);
        assert_eq!(flow.status_at(1), StepStatus::Active);
        assert_eq!(flow.status_at(2), StepStatus::Pending);
    }
}
