//! Progress indicator mapping.
//!
//! Steps 0 and 1 share the first indicator, so a wizard with `n` steps shows
//! `n - 1` indicators. Every later step maps one-to-one, offset by one.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorState {
    Completed,
    Active,
    Upcoming,
}

impl IndicatorState {
    pub fn is_interactive(self) -> bool {
        !matches!(self, Self::Upcoming)
    }

    pub fn css_class(self) -> Option<&'static str> {
        match self {
            Self::Completed => Some("completed"),
            Self::Active => Some("active"),
            Self::Upcoming => None,
        }
    }
}

pub fn indicator_index(step_index: usize) -> usize {
    if step_index <= 1 { 0 } else { step_index - 1 }
}

pub fn step_for_indicator(indicator: usize) -> usize {
    if indicator == 0 { 0 } else { indicator + 1 }
}

/// A single-step wizard still shows one indicator.
pub fn indicator_count(step_count: usize) -> usize {
    match step_count {
        0 => 0,
        1 => 1,
        n => n - 1,
    }
}

pub fn classify(indicator: usize, current_step: usize) -> IndicatorState {
    let current = indicator_index(current_step);
    if indicator < current {
        IndicatorState::Completed
    } else if indicator == current {
        IndicatorState::Active
    } else {
        IndicatorState::Upcoming
    }
}

/// Only the collapsed indicator needs both of the first two steps to validate.
pub fn needs_joint_gate(indicator: usize) -> bool {
    indicator == 0
}

/// `validate` is called for steps 0 and 1 only when the gate applies. A step
/// 1 that does not exist counts as valid.
pub fn is_enabled(
    indicator: usize,
    current_step: usize,
    step_count: usize,
    validate: impl Fn(usize) -> bool,
) -> bool {
    if !classify(indicator, current_step).is_interactive() {
        return false;
    }
    !needs_joint_gate(indicator) || (validate(0) && (step_count < 2 || validate(1)))
}
