//! Error types for sentiment scoring

use thiserror::Error;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Raised when the scoring collaborator cannot process a text.
///
/// The façade never recovers from these; they reach the caller unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// The collaborator failed while scoring
    #[error("{scorer} scorer failed: {message}")]
    Collaborator { scorer: String, message: String },

    /// The collaborator returned without one of the four scores
    #[error("{scorer} scorer did not report the '{field}' score")]
    MissingScore { scorer: String, field: String },
}

impl AnalysisError {
    /// Name of the scorer that raised the error
    pub fn scorer(&self) -> &str {
        match self {
            AnalysisError::Collaborator { scorer, .. } => scorer,
            AnalysisError::MissingScore { scorer, .. } => scorer,
        }
    }
}
