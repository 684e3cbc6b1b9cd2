//! Implements CatalogPort in memory.
//!
//! Loaded once from a seed document; read-only afterwards. Sections and
//! reviews come back in seed order.

use super::seed::{SeedCatalog, SeedDocument};
use crate::domain::{Course, DomainError, Lecturer, Review, Section};
use crate::ports::CatalogPort;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    courses: Vec<Course>,
    lecturers: HashMap<String, Lecturer>,
    sections: Vec<Section>,
    reviews: Vec<Review>,
}

impl InMemoryCatalog {
    pub fn new(catalog: SeedCatalog) -> Self {
        Self {
            courses: catalog.courses,
            lecturers: catalog
                .lecturers
                .into_iter()
                .map(|l| (l.id.clone(), l))
                .collect(),
            sections: catalog.sections,
            reviews: catalog.reviews,
        }
    }

    /// Load and validate a JSON seed file.
    pub async fn from_seed_file(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let doc = SeedDocument::load(path).await?;
        Ok(Self::new(doc.into_catalog()?))
    }

    pub fn from_seed_json(raw: &str) -> Result<Self, DomainError> {
        Ok(Self::new(SeedDocument::from_json(raw)?.into_catalog()?))
    }
}

#[async_trait::async_trait]
impl CatalogPort for InMemoryCatalog {
    async fn find_course_by_number(
        &self,
        course_number: &str,
    ) -> Result<Option<Course>, DomainError> {
        Ok(self
            .courses
            .iter()
            .find(|c| c.course_number == course_number)
            .cloned())
    }

    async fn find_sections_by_course_id(
        &self,
        course_id: &str,
    ) -> Result<Vec<Section>, DomainError> {
        let sections: Vec<Section> = self
            .sections
            .iter()
            .filter(|s| s.course_id == course_id)
            .cloned()
            .collect();
        debug!(course_id, count = sections.len(), "sections found");
        Ok(sections)
    }

    async fn find_lecturer_by_id(
        &self,
        lecturer_id: &str,
    ) -> Result<Option<Lecturer>, DomainError> {
        Ok(self.lecturers.get(lecturer_id).cloned())
    }

    async fn find_reviews_by_section_id(
        &self,
        section_id: &str,
    ) -> Result<Vec<Review>, DomainError> {
        Ok(self
            .reviews
            .iter()
            .filter(|r| r.section_id == section_id)
            .cloned()
            .collect())
    }
}
