//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// `courseNumber` absent or blank. Raised before any lookup.
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Course not found: {0}")]
    CourseNotFound(String),

    /// A section references a lecturer id that does not resolve.
    #[error("Lecturer not found: {0}")]
    LecturerNotFound(String),

    /// Storage call failed, or returned data that breaks the port contract.
    #[error("Lookup failed: {0}")]
    Lookup(String),

    #[error("Invalid rating {0}: must be between 1 and 5")]
    InvalidRating(i64),

    #[error("Seed data error: {0}")]
    Seed(String),
}

impl DomainError {
    /// True for errors caused by the caller's input rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DomainError::MissingParameter(_) | DomainError::CourseNotFound(_)
        )
    }
}
