//! Course rollup: course → sections → reviews into one `CourseReport`.
//!
//! - Rejects a blank course number before touching storage
//! - Unknown course is `CourseNotFound`; nothing partial is returned
//! - Sections load concurrently (bounded), output keeps the catalog's order
//! - Course totals are one fold over every review of every section

use super::section_builder::load_section;
use crate::domain::{CourseReport, DomainError, SectionView, aggregate};
use crate::ports::{CatalogPort, CourseReportPort};
use crate::shared::config::DEFAULT_MAX_CONCURRENT_LOOKUPS;
use futures::stream::{self, StreamExt, TryStreamExt};
use std::sync::Arc;
use tracing::{debug, info};

/// Course report service. Implements the inbound port over a catalog.
pub struct CourseReportService {
    catalog: Arc<dyn CatalogPort>,
    max_concurrent_lookups: usize,
}

impl CourseReportService {
    pub fn new(catalog: Arc<dyn CatalogPort>) -> Self {
        Self::with_concurrency(catalog, DEFAULT_MAX_CONCURRENT_LOOKUPS)
    }

    /// `max_concurrent_lookups` bounds how many sections load at once (min 1).
    pub fn with_concurrency(catalog: Arc<dyn CatalogPort>, max_concurrent_lookups: usize) -> Self {
        Self {
            catalog,
            max_concurrent_lookups: max_concurrent_lookups.max(1),
        }
    }

    pub async fn build_course_report(
        &self,
        course_number: &str,
    ) -> Result<CourseReport, DomainError> {
        let course_number = course_number.trim();
        if course_number.is_empty() {
            return Err(DomainError::MissingParameter("courseNumber"));
        }

        let course = self
            .catalog
            .find_course_by_number(course_number)
            .await?
            .ok_or_else(|| DomainError::CourseNotFound(course_number.to_string()))?;

        let sections = self.catalog.find_sections_by_course_id(&course.id).await?;
        debug!(
            course_number,
            course_id = %course.id,
            sections = sections.len(),
            "loading sections"
        );

        let catalog = self.catalog.as_ref();
        let section_views: Vec<SectionView> = stream::iter(sections)
            .map(|section| async move { load_section(catalog, &section).await })
            .buffered(self.max_concurrent_lookups)
            .try_collect()
            .await?;

        let totals = aggregate(
            section_views
                .iter()
                .flat_map(|s| s.review.iter().map(|r| r.rating)),
        );

        info!(
            course_number,
            sections = section_views.len(),
            total_reviews = totals.count,
            "course report built"
        );

        Ok(CourseReport {
            course_number: course.course_number,
            name: course.name,
            course_total_reviews: totals.count,
            average_rating: totals.average,
            sections: section_views,
        })
    }
}

#[async_trait::async_trait]
impl CourseReportPort for CourseReportService {
    async fn get_course_report(&self, course_number: &str) -> Result<CourseReport, DomainError> {
        self.build_course_report(course_number).await
    }
}
