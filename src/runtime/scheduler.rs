use crate::runtime::Instant;
use crate::runtime::intent::Intent;
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum SchedulerCommand {
    /// Supersedes any pending event scheduled under the same key.
    Debounce {
        key: String,
        delay: Duration,
        event: Intent,
    },
    Cancel {
        key: String,
    },
}

#[derive(Debug, Clone)]
struct Guard {
    key: String,
    version: u64,
}

#[derive(Debug, Clone)]
struct DelayedTask {
    due_at: Instant,
    guard: Guard,
    event: Intent,
}

#[derive(Default)]
pub struct Scheduler {
    delayed: Vec<DelayedTask>,
    key_versions: HashMap<String, u64>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, command: SchedulerCommand, now: Instant) {
        match command {
            SchedulerCommand::Debounce { key, delay, event } => {
                let version = self.bump_version(&key);
                self.delayed.push(DelayedTask {
                    due_at: now + delay,
                    guard: Guard { key, version },
                    event,
                });
            }
            SchedulerCommand::Cancel { key } => {
                self.bump_version(&key);
            }
        }
    }

    /// Due events in scheduling order; superseded ones are dropped.
    pub fn drain_ready(&mut self, now: Instant) -> Vec<Intent> {
        let mut ready = Vec::new();
        let mut pending = Vec::with_capacity(self.delayed.len());
        for task in self.delayed.drain(..) {
            if task.due_at > now {
                pending.push(task);
            } else if Self::is_current(&self.key_versions, &task.guard) {
                ready.push(task.event);
            }
        }
        self.delayed = pending;
        self.delayed
            .retain(|task| Self::is_current(&self.key_versions, &task.guard));
        ready
    }

    pub fn has_pending(&self) -> bool {
        !self.delayed.is_empty()
    }

    pub fn poll_timeout(&self, now: Instant, default_timeout: Duration) -> Duration {
        self.delayed
            .iter()
            .map(|task| task.due_at.saturating_duration_since(now))
            .fold(default_timeout, Duration::min)
    }

    fn is_current(versions: &HashMap<String, u64>, guard: &Guard) -> bool {
        versions.get(&guard.key).copied().unwrap_or(0) == guard.version
    }

    fn bump_version(&mut self, key: &str) -> u64 {
        let entry = self.key_versions.entry(key.to_string()).or_insert(0);
        *entry = entry.saturating_add(1);
        *entry
    }
}
