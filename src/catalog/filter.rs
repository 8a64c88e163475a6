use crate::models::Course;
use crate::params::ViewParams;

/// True when `course` passes every active predicate: category equality,
/// difficulty equality, and a case-insensitive substring match of the
/// search needle against title or description. `needle` must already be
/// trimmed and lowercased; empty means no text constraint.
pub(crate) fn course_matches(course: &Course, params: &ViewParams, needle: &str) -> bool {
    params.category.matches(course.category)
        && params.difficulty.matches(course.difficulty)
        && (needle.is_empty()
            || course.title.to_lowercase().contains(needle)
            || course.description.to_lowercase().contains(needle))
}

pub(crate) fn search_needle(params: &ViewParams) -> String {
    params.search_term.trim().to_lowercase()
}

/// Applies the catalog predicates to `courses`, preserving input order.
/// Never mutates the input; an empty result is a `Vec`, never an error.
pub fn filter_courses(courses: &[Course], params: &ViewParams) -> Vec<Course> {
    let needle = search_needle(params);
    courses
        .iter()
        .filter(|c| course_matches(c, params, &needle))
        .cloned()
        .collect()
}
