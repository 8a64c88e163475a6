//! The catalog view-model builder.
//!
//! One pure module replaces the filter/sort/aggregate logic that the
//! student, educator, and industry-expert course lists each used to carry
//! inline. Every entry point takes borrowed snapshots plus the current
//! `ViewParams` and returns freshly allocated view-models; nothing here
//! performs I/O or mutates its inputs, so calls are safe to repeat on
//! every keystroke and from any rendering context.

mod aggregates;
mod filter;
mod sort;

pub use aggregates::{Aggregates, CompletionStats, completion_stats, compute_aggregates};
pub use filter::filter_courses;
pub use sort::{enrollment_status, sort_courses};

use serde::Serialize;
use tracing::debug;

use crate::models::{Course, EnrolledCourse};
use crate::params::ViewParams;

/// What a course-list view renders: the ordered visible rows plus the
/// summary cards above them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView {
    pub visible: Vec<Course>,
    pub aggregates: Aggregates,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrolledView {
    pub visible: Vec<EnrolledCourse>,
    pub stats: CompletionStats,
}

/// Public/student catalog browsing: drafts are invisible, and the summary
/// cards cover the published set regardless of the active filter.
pub fn build_catalog(courses: &[Course], params: &ViewParams) -> CatalogView {
    let published: Vec<Course> = courses.iter().filter(|c| c.is_published).cloned().collect();
    let visible = filter_courses(&published, params);
    let aggregates = compute_aggregates(&published);
    debug!("catalog view: {} of {} published courses visible", visible.len(), published.len());
    CatalogView { visible, aggregates }
}

/// An educator's own course list: drafts stay visible, and the revenue /
/// enrollment / published cards always cover the full list so they do not
/// jump around as filters change.
pub fn build_educator_dashboard(courses: &[Course], params: &ViewParams) -> CatalogView {
    let visible = filter_courses(courses, params);
    let aggregates = compute_aggregates(courses);
    debug!("educator dashboard: {} of {} courses visible", visible.len(), courses.len());
    CatalogView { visible, aggregates }
}

/// The student's enrolled-courses view: the catalog predicates plus the
/// status tab select the rows, the sort key orders them, and the
/// completion header summarizes every enrollment the student has.
pub fn build_enrolled_view(entries: &[EnrolledCourse], params: &ViewParams) -> EnrolledView {
    let needle = filter::search_needle(params);
    let matching: Vec<EnrolledCourse> = entries
        .iter()
        .filter(|e| filter::course_matches(&e.course, params, &needle))
        .filter(|e| params.status.matches(e.status()))
        .cloned()
        .collect();
    let visible = sort_courses(&matching, params.sort);
    let stats = completion_stats(entries);
    debug!("enrolled view: {} of {} enrollments visible", visible.len(), entries.len());
    EnrolledView { visible, stats }
}
