//! Application use cases. Orchestrate domain logic via ports.

pub mod course_report_service;
pub mod section_builder;

pub use course_report_service::CourseReportService;
pub use section_builder::{build_section, load_section};
