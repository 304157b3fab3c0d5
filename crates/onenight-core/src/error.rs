//! Error types for the round facade.

use onenight_state::StateError;
use thiserror::Error;

/// Errors raised while building a round or loading its inputs.
///
/// Play itself never fails: night actions, votes and speeches report
/// rejections through their return values instead.
#[derive(Debug, Error)]
pub enum GameError {
    /// Dealing or addressing the match state failed.
    #[error("Match state error: {0}")]
    State(#[from] StateError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A config or script file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A config or script file is not valid JSON for its type.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
