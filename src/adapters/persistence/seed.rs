//! Seed document: JSON fixture with the whole catalog.
//!
//! Field names of the original document store are accepted as aliases
//! (`courseNum`, `courseName`, `lectName`, `courseID`, `lectID`, `sectionID`,
//! `comment`), so an export from there loads unchanged.

use crate::domain::{Course, DomainError, Lecturer, Rating, Review, Section};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tokio::fs;
use tracing::info;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SeedDocument {
    pub courses: Vec<CourseDoc>,
    pub lecturers: Vec<LecturerDoc>,
    pub sections: Vec<SectionDoc>,
    pub reviews: Vec<ReviewDoc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDoc {
    pub id: String,
    #[serde(alias = "courseNum")]
    pub course_number: String,
    #[serde(alias = "courseName")]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct LecturerDoc {
    pub id: String,
    #[serde(alias = "lectName")]
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionDoc {
    pub id: String,
    #[serde(alias = "courseID")]
    pub course_id: String,
    #[serde(alias = "lectID")]
    pub lecturer_id: String,
}

/// Raw review. `rating` stays an integer until [`SeedDocument::into_catalog`]
/// validates it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDoc {
    pub id: String,
    #[serde(alias = "sectionID")]
    pub section_id: String,
    #[serde(alias = "comment")]
    pub body: String,
    pub rating: i64,
}

/// Validated catalog contents, ready to load into a store.
#[derive(Debug, Default)]
pub struct SeedCatalog {
    pub courses: Vec<Course>,
    pub lecturers: Vec<Lecturer>,
    pub sections: Vec<Section>,
    pub reviews: Vec<Review>,
}

impl SeedDocument {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .await
            .map_err(|e| DomainError::Seed(format!("read {}: {}", path.display(), e)))?;
        let doc = Self::from_json(&raw)?;
        info!(
            path = %path.display(),
            courses = doc.courses.len(),
            sections = doc.sections.len(),
            reviews = doc.reviews.len(),
            "seed document loaded"
        );
        Ok(doc)
    }

    pub fn from_json(raw: &str) -> Result<Self, DomainError> {
        serde_json::from_str(raw).map_err(|e| DomainError::Seed(e.to_string()))
    }

    /// Validate ids, ratings and references, producing domain entities.
    ///
    /// Ids must be unique per entity type and course numbers unique across
    /// courses. Sections must reference a known course, reviews a known
    /// section. Lecturer references are left to the read path, which reports
    /// `LecturerNotFound`.
    pub fn into_catalog(self) -> Result<SeedCatalog, DomainError> {
        let course_ids = unique("course id", self.courses.iter().map(|c| c.id.as_str()))?;
        unique(
            "course number",
            self.courses.iter().map(|c| c.course_number.as_str()),
        )?;
        unique("lecturer id", self.lecturers.iter().map(|l| l.id.as_str()))?;
        let section_ids = unique("section id", self.sections.iter().map(|s| s.id.as_str()))?;
        unique("review id", self.reviews.iter().map(|r| r.id.as_str()))?;

        for s in &self.sections {
            if !course_ids.contains(s.course_id.as_str()) {
                return Err(DomainError::Seed(format!(
                    "section {} references unknown course {}",
                    s.id, s.course_id
                )));
            }
        }
        for r in &self.reviews {
            if !section_ids.contains(r.section_id.as_str()) {
                return Err(DomainError::Seed(format!(
                    "review {} references unknown section {}",
                    r.id, r.section_id
                )));
            }
        }

        let reviews = self
            .reviews
            .into_iter()
            .map(|r| -> Result<Review, DomainError> {
                Ok(Review {
                    rating: Rating::new(r.rating)?,
                    id: r.id,
                    section_id: r.section_id,
                    body: r.body,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SeedCatalog {
            courses: self
                .courses
                .into_iter()
                .map(|c| Course {
                    id: c.id,
                    course_number: c.course_number,
                    name: c.name,
                })
                .collect(),
            lecturers: self
                .lecturers
                .into_iter()
                .map(|l| Lecturer {
                    id: l.id,
                    name: l.name,
                })
                .collect(),
            sections: self
                .sections
                .into_iter()
                .map(|s| Section {
                    id: s.id,
                    course_id: s.course_id,
                    lecturer_id: s.lecturer_id,
                })
                .collect(),
            reviews,
        })
    }
}

/// Collect keys into a set, failing on the first repeat.
fn unique<'a>(
    kind: &str,
    keys: impl Iterator<Item = &'a str>,
) -> Result<HashSet<&'a str>, DomainError> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(DomainError::Seed(format!("duplicate {} {}", kind, key)));
        }
    }
    Ok(seen)
}
