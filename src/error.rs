use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Not enough meal candidates for day {day}")]
    InsufficientCandidates { day: u32 },

    #[error("Replacement context is stale: {0}")]
    StaleContext(String),

    #[error("Another replacement is already in progress")]
    ReplacementInProgress,

    #[error("Plan build was cancelled")]
    BuildCancelled,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, PlanError>;
