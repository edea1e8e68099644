//! Error types for the reversi engine.

use thiserror::Error;

/// Everything the engine can reject.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReversiError {
    /// A caller passed a value outside the operation's domain.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The move is not allowed in the current position. State is untouched.
    #[error("illegal move: {message}")]
    IllegalMove { message: String },

    /// The input collaborator broke its single-selection contract.
    #[error("invalid state: {message}")]
    InvalidState { message: String },
}

impl ReversiError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        ReversiError::InvalidArgument {
            message: message.into(),
        }
    }

    pub(crate) fn illegal_move(message: impl Into<String>) -> Self {
        ReversiError::IllegalMove {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_state(message: impl Into<String>) -> Self {
        ReversiError::InvalidState {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReversiError>;
