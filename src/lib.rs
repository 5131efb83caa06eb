pub mod config;
pub mod core;
pub mod draft;
pub mod error;
pub mod runtime;
pub mod state;
pub mod storage;
pub mod summary;

pub use crate::config::WorkflowConfig;
pub use crate::core::FieldName;
pub use crate::core::field::{FieldKind, FormField};
pub use crate::core::form::Form;
pub use crate::core::step::Step;
pub use crate::draft::{Draft, DraftValue};
pub use crate::error::{Result, WorkflowError};
pub use crate::runtime::effect::Effect;
pub use crate::runtime::intent::Intent;
pub use crate::runtime::runner::{Presenter, Runner};
pub use crate::state::app_state::WorkflowState;
pub use crate::state::flow::{Flow, Transition};
pub use crate::state::view::WorkflowView;
pub use crate::storage::{DraftStore, FileStore, MemoryStore};
pub use crate::summary::{Summary, format_list};
