//! Domain entities. Pure data structures for the catalog.
//!
//! No storage types here; adapters map their rows/documents into these.

use super::errors::DomainError;
use serde::Serialize;

/// Lowest rating a review may carry.
pub const MIN_RATING: i64 = 1;
/// Highest rating a review may carry.
pub const MAX_RATING: i64 = 5;

/// A course, e.g. KIEI-451 "Intro to Software Development".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    /// Opaque storage id.
    pub id: String,
    pub course_number: String,
    pub name: String,
}

/// A lecturer. Referenced by sections, never owned by them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lecturer {
    pub id: String,
    pub name: String,
}

/// One lecturer's offering of one course. Reviews attach here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub course_id: String,
    pub lecturer_id: String,
}

/// Anonymous review of a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id: String,
    pub section_id: String,
    pub body: String,
    pub rating: Rating,
}

/// Review rating in `[MIN_RATING, MAX_RATING]`.
///
/// The only way to build one from raw storage data is [`Rating::new`], so
/// out-of-range values are rejected at ingestion and never reach aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "i64")]
pub struct Rating(u8);

impl Rating {
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if (MIN_RATING..=MAX_RATING).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(DomainError::InvalidRating(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl From<Rating> for i64 {
    fn from(rating: Rating) -> Self {
        i64::from(rating.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_accepts_bounds() {
        assert_eq!(Rating::new(1).unwrap().value(), 1);
        assert_eq!(Rating::new(5).unwrap().value(), 5);
    }

    #[test]
    fn rating_rejects_out_of_range() {
        assert!(matches!(Rating::new(0), Err(DomainError::InvalidRating(0))));
        assert!(matches!(Rating::new(6), Err(DomainError::InvalidRating(6))));
        assert!(matches!(
            Rating::new(-3),
            Err(DomainError::InvalidRating(-3))
        ));
    }

    #[test]
    fn rating_serializes_as_integer() {
        let rating = Rating::new(4).unwrap();
        assert_eq!(serde_json::to_string(&rating).unwrap(), "4");
        assert_eq!(i64::from(rating), 4);
    }
}
