use chrono::{DateTime, TimeZone, Utc};
use course_catalog::{
    Category, CategoryFilter, Course, Difficulty, DifficultyFilter, EducatorRef, EnrolledCourse,
    Enrollment, SortKey, ViewParams, compute_aggregates, filter_courses, sort_courses,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn ts(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

fn arb_category() -> impl Strategy<Value = Category> {
    prop::sample::select(vec![
        Category::Programming,
        Category::Design,
        Category::Business,
        Category::Marketing,
        Category::DataScience,
        Category::Photography,
        Category::Music,
    ])
}

fn arb_difficulty() -> impl Strategy<Value = Difficulty> {
    prop::sample::select(vec![
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ])
}

fn arb_enrollment() -> impl Strategy<Value = Enrollment> {
    ("[a-z]{1,6}", 0i64..1_000_000, 0u8..=100, prop::option::of(0i64..1_000_000)).prop_map(
        |(student_id, secs, progress, accessed)| Enrollment {
            student_id,
            enrolled_at: ts(secs),
            progress,
            last_accessed: accessed.map(ts),
        },
    )
}

prop_compose! {
    fn arb_course()(
        id in "[a-z0-9]{1,8}",
        title in "[A-Za-z ]{0,16}",
        description in "[A-Za-z ]{0,24}",
        category in arb_category(),
        difficulty in arb_difficulty(),
        cents in 0i64..100_000,
        is_published in any::<bool>(),
        enrolled_students in prop::collection::vec(arb_enrollment(), 0..5),
    ) -> Course {
        Course {
            id,
            title,
            description,
            category,
            difficulty,
            price: Decimal::new(cents, 2),
            thumbnail: None,
            is_published,
            enrolled_students,
            created_at: ts(0),
            updated_at: ts(0),
            educator: EducatorRef { id: "e1".into(), name: "Ada".into() },
        }
    }
}

fn arb_params() -> impl Strategy<Value = ViewParams> {
    (
        "[a-zA-Z ]{0,6}",
        prop::option::of(arb_category()),
        prop::option::of(arb_difficulty()),
    )
        .prop_map(|(search_term, category, difficulty)| ViewParams {
            search_term,
            category: category.map_or(CategoryFilter::All, CategoryFilter::Only),
            difficulty: difficulty.map_or(DifficultyFilter::All, DifficultyFilter::Only),
            ..Default::default()
        })
}

fn arb_enrolled() -> impl Strategy<Value = EnrolledCourse> {
    (arb_course(), 0i64..1_000_000, 0u8..=100, prop::option::of(0i64..1_000_000)).prop_map(
        |(course, secs, progress, accessed)| EnrolledCourse {
            course,
            enrolled_at: ts(secs),
            progress,
            last_accessed: accessed.map(ts),
        },
    )
}

proptest! {
    // Filtering twice with the same params is a no-op the second time.
    #[test]
    fn filter_is_idempotent(
        courses in prop::collection::vec(arb_course(), 0..12),
        params in arb_params(),
    ) {
        let once = filter_courses(&courses, &params);
        let twice = filter_courses(&once, &params);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn filter_never_grows_the_list(
        courses in prop::collection::vec(arb_course(), 0..12),
        params in arb_params(),
    ) {
        prop_assert!(filter_courses(&courses, &params).len() <= courses.len());
    }

    #[test]
    fn filter_output_is_an_ordered_subsequence(
        courses in prop::collection::vec(arb_course(), 0..12),
        params in arb_params(),
    ) {
        let visible = filter_courses(&courses, &params);
        let mut cursor = courses.iter();
        for kept in &visible {
            prop_assert!(cursor.any(|c| c == kept));
        }
    }

    #[test]
    fn filter_and_sort_leave_inputs_untouched(
        courses in prop::collection::vec(arb_course(), 0..8),
        entries in prop::collection::vec(arb_enrolled(), 0..8),
        params in arb_params(),
    ) {
        let course_snapshot = courses.clone();
        let entry_snapshot = entries.clone();

        let _ = filter_courses(&courses, &params);
        let _ = sort_courses(&entries, SortKey::Progress);
        let _ = sort_courses(&entries, SortKey::Recent);
        let _ = compute_aggregates(&courses);

        prop_assert_eq!(courses, course_snapshot);
        prop_assert_eq!(entries, entry_snapshot);
    }

    // Equal-progress entries must keep their input order across the sort.
    #[test]
    fn progress_sort_is_stable(entries in prop::collection::vec(arb_enrolled(), 0..16)) {
        let sorted = sort_courses(&entries, SortKey::Progress);

        for pair in sorted.windows(2) {
            prop_assert!(pair[0].progress >= pair[1].progress);
            if pair[0].progress == pair[1].progress {
                let pos = |e: &EnrolledCourse| entries.iter().position(|x| x == e);
                // position() can only tie for identical entries
                if let (Some(a), Some(b)) = (pos(&pair[0]), pos(&pair[1])) {
                    prop_assert!(a <= b);
                }
            }
        }
    }

    #[test]
    fn aggregates_match_independent_sums(courses in prop::collection::vec(arb_course(), 0..12)) {
        let agg = compute_aggregates(&courses);

        let students: usize = courses.iter().map(|c| c.enrolled_students.len()).sum();
        let revenue: Decimal = courses
            .iter()
            .map(|c| c.price * Decimal::from(c.enrolled_students.len()))
            .sum();
        let published = courses.iter().filter(|c| c.is_published).count();

        prop_assert_eq!(agg.total_courses, courses.len());
        prop_assert_eq!(agg.total_students, students);
        prop_assert_eq!(agg.total_revenue, revenue);
        prop_assert_eq!(agg.published_count, published);
        prop_assert!(agg.average_progress >= 0.0 && agg.average_progress <= 100.0);
        prop_assert!(!agg.average_progress.is_nan());
    }
}

#[test]
fn aggregates_of_nothing_are_zero() {
    let agg = compute_aggregates(&[]);
    assert_eq!(agg.average_progress, 0.0);
    assert_eq!(agg.total_revenue, Decimal::ZERO);
}
