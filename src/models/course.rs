use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Course categories exposed by the marketplace backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Programming,
    Design,
    Business,
    Marketing,
    #[serde(rename = "Data Science")]
    DataScience,
    Photography,
    Music,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Programming => "Programming",
            Category::Design => "Design",
            Category::Business => "Business",
            Category::Marketing => "Marketing",
            Category::DataScience => "Data Science",
            Category::Photography => "Photography",
            Category::Music => "Music",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Programming" => Ok(Category::Programming),
            "Design" => Ok(Category::Design),
            "Business" => Ok(Category::Business),
            "Marketing" => Ok(Category::Marketing),
            "Data Science" => Ok(Category::DataScience),
            "Photography" => Ok(Category::Photography),
            "Music" => Ok(Category::Music),
            other => Err(CatalogError::InvalidCategory(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        };
        f.write_str(s)
    }
}

impl FromStr for Difficulty {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            other => Err(CatalogError::InvalidDifficulty(other.to_string())),
        }
    }
}

/// A student's membership in a course, as the backend serializes it.
///
/// `progress` and `lastAccessed` are optional on the wire; absence means a
/// freshly enrolled student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub student_id: String,
    pub enrolled_at: DateTime<Utc>,
    #[serde(default)]
    pub progress: u8,
    #[serde(default)]
    pub last_accessed: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducatorRef {
    pub id: String,
    pub name: String,
}

/// A course snapshot fetched from the backend. Read-only input to the
/// catalog builder; nothing in this crate mutates one after normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub price: Decimal,
    #[serde(default)]
    pub thumbnail: Option<String>,
    pub is_published: bool,
    #[serde(default)]
    pub enrolled_students: Vec<Enrollment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub educator: EducatorRef,
}

impl Course {
    /// Default-fill pass applied once at the input boundary, so the
    /// filter/sort/aggregate logic never branches on field presence:
    /// - progress past 100 is clamped (progress only moves forward in the
    ///   backend, so anything past the cap means completed)
    /// - duplicate student ids keep the earliest enrollment
    pub fn normalize(mut self) -> Self {
        let mut seen = HashSet::new();
        self.enrolled_students.retain(|e| seen.insert(e.student_id.clone()));
        for enrollment in &mut self.enrolled_students {
            if enrollment.progress > 100 {
                enrollment.progress = 100;
            }
        }
        self
    }
}

/// Where a student stands in a course. Drives both the status filter and
/// the badge shown on each card, so the mapping lives in exactly one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnrollmentStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl EnrollmentStatus {
    pub fn from_progress(progress: u8) -> Self {
        match progress {
            0 => EnrollmentStatus::NotStarted,
            100.. => EnrollmentStatus::Completed,
            _ => EnrollmentStatus::InProgress,
        }
    }
}

impl fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EnrollmentStatus::NotStarted => "not-started",
            EnrollmentStatus::InProgress => "in-progress",
            EnrollmentStatus::Completed => "completed",
        };
        f.write_str(s)
    }
}

/// One row of the student's enrolled-courses view: the course plus that
/// student's own enrollment state, as returned by the enrolled-courses
/// endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrolledCourse {
    pub course: Course,
    pub enrolled_at: DateTime<Utc>,
    #[serde(default)]
    pub progress: u8,
    #[serde(default)]
    pub last_accessed: Option<DateTime<Utc>>,
}

impl EnrolledCourse {
    pub fn status(&self) -> EnrollmentStatus {
        EnrollmentStatus::from_progress(self.progress)
    }

    /// Timestamp the `recent` sort orders by. Courses never opened fall
    /// back to their enrollment time.
    pub fn recency(&self) -> DateTime<Utc> {
        self.last_accessed.unwrap_or(self.enrolled_at)
    }
}
