//! Engine error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// Input the engine cannot work with, such as a board that is not 9 cells long.
///
/// Malformed cell symbols and unknown difficulty names are not errors;
/// they are normalized before the engine sees them.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid input: {} at {}:{}", message, file, line)]
pub struct InvalidInput {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl InvalidInput {
    /// Creates a new input error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Error for a board whose cell count is not 9.
    #[track_caller]
    pub fn board_length(len: usize) -> Self {
        Self::new(format!("board must have exactly 9 cells, got {}", len))
    }
}

impl From<serde_json::Error> for InvalidInput {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("Malformed request: {}", err))
    }
}
