//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{Course, DomainError, Lecturer, Review, Section};

/// Read-only access to the course catalog (courses, sections, lecturers, reviews).
///
/// Retries and timeouts, if any, belong to the implementation.
#[async_trait::async_trait]
pub trait CatalogPort: Send + Sync {
    /// Find the course with the given course number (e.g. "KIEI-451").
    async fn find_course_by_number(
        &self,
        course_number: &str,
    ) -> Result<Option<Course>, DomainError>;

    /// All sections owned by the course, in storage order.
    async fn find_sections_by_course_id(
        &self,
        course_id: &str,
    ) -> Result<Vec<Section>, DomainError>;

    async fn find_lecturer_by_id(
        &self,
        lecturer_id: &str,
    ) -> Result<Option<Lecturer>, DomainError>;

    /// All reviews attached to the section, in storage order.
    async fn find_reviews_by_section_id(
        &self,
        section_id: &str,
    ) -> Result<Vec<Review>, DomainError>;
}
