use crate::models::{EnrolledCourse, EnrollmentStatus};
use crate::params::SortKey;

/// Orders the enrolled-courses view. `Vec::sort_by` is stable, which the
/// contract requires: ties (many courses sit at 0% progress) must keep
/// their input order so the list does not reshuffle across re-renders.
pub fn sort_courses(entries: &[EnrolledCourse], sort: SortKey) -> Vec<EnrolledCourse> {
    let mut out = entries.to_vec();
    match sort {
        SortKey::Recent => out.sort_by(|a, b| b.recency().cmp(&a.recency())),
        SortKey::Progress => out.sort_by(|a, b| b.progress.cmp(&a.progress)),
        SortKey::Name => out.sort_by(|a, b| a.course.title.cmp(&b.course.title)),
    }
    out
}

/// Maps a progress value to the status used for filtering and badges.
pub fn enrollment_status(progress: u8) -> EnrollmentStatus {
    EnrollmentStatus::from_progress(progress)
}
