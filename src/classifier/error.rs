use thiserror::Error;

/// Represents the different types of errors that can occur in the template classifier.
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// Error occurred during the build phase
    #[error("Build error: {0}")]
    BuildError(String),
    /// Error occurred due to invalid input parameters
    #[error("Validation error: {0}")]
    ValidationError(String),
}
