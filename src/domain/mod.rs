//! Core domain layer. No external I/O dependencies.
//!
//! Entities, the rating aggregate and the report views live here.

pub mod entities;
pub mod errors;
pub mod rating;
pub mod report;

pub use entities::{Course, Lecturer, MAX_RATING, MIN_RATING, Rating, Review, Section};
pub use errors::DomainError;
pub use rating::{RatingAggregate, aggregate};
pub use report::{CourseReport, ReviewView, SectionView};
