pub mod course;
pub mod rating;

pub use course::{
    Category, Course, Difficulty, EducatorRef, EnrolledCourse, Enrollment, EnrollmentStatus,
};
pub use rating::{IndustryRating, RatingSummary, course_rating_summary, upsert_rating};
