use thiserror::Error;

/// Everything that can stop a review from reaching the review-storage
/// service. Each variant's display text is what the user sees in the
/// status banner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
    #[error("Please select a rating and write a review.")]
    Validation,

    #[error("Please log in before submitting a review.")]
    AuthRequired,

    /// The request never got an HTTP response.
    #[error("Failed to submit review: {0}")]
    Transport(String),

    /// The review service answered with a non-success status.
    #[error("Failed to submit review: {message}")]
    Server { status: u16, message: String },
}
