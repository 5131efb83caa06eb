use thiserror::Error;

pub type Result<T> = std::result::Result<T, WorkflowError>;

#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Persisted draft text is not JSON or lacks the `values` record.
    #[error("malformed draft: {0}")]
    MalformedDraft(String),

    #[error("storage unavailable for key `{key}`: {reason}")]
    StorageUnavailable { key: String, reason: String },

    #[error("invalid workflow config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl WorkflowError {
    pub fn storage(key: impl Into<String>, reason: impl ToString) -> Self {
        Self::StorageUnavailable {
            key: key.into(),
            reason: reason.to_string(),
        }
    }
}
