use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Course, EnrolledCourse, EnrollmentStatus};

/// Summary numbers for the dashboard cards above a course list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Aggregates {
    pub total_courses: usize,
    pub total_students: usize,
    /// Decimal-accumulated; rounding is a presentation concern.
    pub total_revenue: Decimal,
    pub published_count: usize,
    pub average_progress: f64,
}

/// Totals over a course collection. Revenue is price times seat count per
/// course, summed as `Decimal` so currency never drifts the way repeated
/// float addition does. An empty collection (or one with no enrollments)
/// yields `average_progress == 0.0`, never NaN.
pub fn compute_aggregates(courses: &[Course]) -> Aggregates {
    let mut total_students = 0usize;
    let mut total_revenue = Decimal::ZERO;
    let mut published_count = 0usize;
    let mut progress_sum = 0u64;

    for course in courses {
        let seats = course.enrolled_students.len();
        total_students += seats;
        total_revenue += course.price * Decimal::from(seats);
        if course.is_published {
            published_count += 1;
        }
        progress_sum += course
            .enrolled_students
            .iter()
            .map(|e| u64::from(e.progress))
            .sum::<u64>();
    }

    let average_progress = if total_students > 0 {
        progress_sum as f64 / total_students as f64
    } else {
        0.0
    };

    Aggregates {
        total_courses: courses.len(),
        total_students,
        total_revenue,
        published_count,
        average_progress,
    }
}

/// Completion breakdown for the student's enrolled-courses header.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub not_started: usize,
    pub average_progress: f64,
}

pub fn completion_stats(entries: &[EnrolledCourse]) -> CompletionStats {
    let mut stats = CompletionStats {
        total: entries.len(),
        completed: 0,
        in_progress: 0,
        not_started: 0,
        average_progress: 0.0,
    };

    let mut progress_sum = 0u64;
    for entry in entries {
        progress_sum += u64::from(entry.progress);
        match entry.status() {
            EnrollmentStatus::Completed => stats.completed += 1,
            EnrollmentStatus::InProgress => stats.in_progress += 1,
            EnrollmentStatus::NotStarted => stats.not_started += 1,
        }
    }

    if !entries.is_empty() {
        stats.average_progress = progress_sum as f64 / entries.len() as f64;
    }
    stats
}
