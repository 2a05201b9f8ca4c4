use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PraxisError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown mode: {0} (expected movement, productivity, or balanced)")]
    UnknownMode(String),

    #[error("Unknown plan lane: {0} (expected body, task, or people)")]
    UnknownPlanLane(String),

    #[error("Unknown quick action: {0}")]
    UnknownQuickAction(String),

    #[error("No suggestion #{0}; run `praxis clarify` to list them")]
    UnknownSuggestion(usize),

    #[error("Export target already exists: {0}")]
    ExportTargetExists(PathBuf),

    #[error("Could not resolve a data directory for this platform")]
    NoDataDir,

    #[error("Failed to register signal handler: {0}")]
    SignalHandler(String),
}

pub type Result<T> = std::result::Result<T, PraxisError>;
