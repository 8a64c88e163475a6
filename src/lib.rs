//! Pure view-model core for a course-marketplace dashboard.
//!
//! The UI layers fetch course and enrollment snapshots from the backend,
//! hold the user's filter/sort selections, and call into this crate on
//! every change to get the exact ordered list to render plus the summary
//! numbers above it. The crate owns no network, file, or process boundary
//! and never mutates its inputs.

pub mod catalog;
pub mod error;
pub mod models;
pub mod params;

pub use catalog::{
    Aggregates, CatalogView, CompletionStats, EnrolledView, build_catalog,
    build_educator_dashboard, build_enrolled_view, completion_stats, compute_aggregates,
    enrollment_status, filter_courses, sort_courses,
};
pub use error::CatalogError;
pub use models::{
    Category, Course, Difficulty, EducatorRef, EnrolledCourse, Enrollment, EnrollmentStatus,
    IndustryRating, RatingSummary, course_rating_summary, upsert_rating,
};
pub use params::{CategoryFilter, DifficultyFilter, SortKey, StatusFilter, ViewParams};
