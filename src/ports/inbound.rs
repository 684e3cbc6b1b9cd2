//! Inbound port. HTTP (adapter) calls into the application.

use crate::domain::{CourseReport, DomainError};

/// Course report use case.
#[async_trait::async_trait]
pub trait CourseReportPort: Send + Sync {
    /// Build the report for `course_number`: course metadata, sections with their
    /// reviews, and per-section and course-wide rating aggregates.
    async fn get_course_report(&self, course_number: &str) -> Result<CourseReport, DomainError>;
}
