//! Section builder: one section's lecturer and reviews into a `SectionView`.

use crate::domain::{DomainError, Lecturer, Review, ReviewView, Section, SectionView, aggregate};
use crate::ports::CatalogPort;
use tracing::debug;

/// Combine a section with its lecturer and reviews.
///
/// Every review must belong to `section`; a stray review means the catalog
/// broke its contract and is reported as a lookup failure. Reviews keep the
/// order they were given in.
pub fn build_section(
    section: &Section,
    lecturer: &Lecturer,
    reviews: &[Review],
) -> Result<SectionView, DomainError> {
    if let Some(stray) = reviews.iter().find(|r| r.section_id != section.id) {
        return Err(DomainError::Lookup(format!(
            "review {} belongs to section {}, not {}",
            stray.id, stray.section_id, section.id
        )));
    }

    let stats = aggregate(reviews.iter().map(|r| r.rating));

    Ok(SectionView {
        lecturer_name: lecturer.name.clone(),
        rating_number_per_section: stats.count,
        average_rating: stats.average,
        review: reviews
            .iter()
            .map(|r| ReviewView {
                comment: r.body.clone(),
                rating: r.rating,
            })
            .collect(),
    })
}

/// Fetch a section's lecturer and reviews (concurrently) and build its view.
pub async fn load_section(
    catalog: &dyn CatalogPort,
    section: &Section,
) -> Result<SectionView, DomainError> {
    let (lecturer, reviews) = tokio::try_join!(
        catalog.find_lecturer_by_id(&section.lecturer_id),
        catalog.find_reviews_by_section_id(&section.id),
    )?;
    let lecturer =
        lecturer.ok_or_else(|| DomainError::LecturerNotFound(section.lecturer_id.clone()))?;

    debug!(
        section_id = %section.id,
        lecturer = %lecturer.name,
        reviews = reviews.len(),
        "section loaded"
    );

    build_section(section, &lecturer, &reviews)
}
