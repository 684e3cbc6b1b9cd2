//! Response views. Shape mirrors the course → section → review hierarchy.

use super::entities::Rating;
use serde::Serialize;

/// Full report for one course.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseReport {
    pub course_number: String,
    pub name: String,
    pub course_total_reviews: usize,
    pub average_rating: Option<f64>,
    pub sections: Vec<SectionView>,
}

/// One section: lecturer, its own review aggregate, and the raw reviews.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionView {
    pub lecturer_name: String,
    pub rating_number_per_section: usize,
    pub average_rating: Option<f64>,
    pub review: Vec<ReviewView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewView {
    pub comment: String,
    pub rating: Rating,
}
