use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::models::{Category, Difficulty, EnrollmentStatus};

/// Sort order for the enrolled-courses view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Recent,
    Progress,
    Name,
}

impl FromStr for SortKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recent" => Ok(SortKey::Recent),
            "progress" => Ok(SortKey::Progress),
            "name" => Ok(SortKey::Name),
            other => Err(CatalogError::InvalidSortKey(other.to_string())),
        }
    }
}

/// Category constraint; `all` imposes none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DifficultyFilter {
    #[default]
    All,
    Only(Difficulty),
}

impl DifficultyFilter {
    pub fn matches(&self, difficulty: Difficulty) -> bool {
        match self {
            DifficultyFilter::All => true,
            DifficultyFilter::Only(wanted) => *wanted == difficulty,
        }
    }
}

impl FromStr for DifficultyFilter {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(DifficultyFilter::All)
        } else {
            s.parse().map(DifficultyFilter::Only)
        }
    }
}

/// Status tab in the enrolled-courses view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    NotStarted,
    InProgress,
    Completed,
}

impl StatusFilter {
    pub fn matches(&self, status: EnrollmentStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::NotStarted => status == EnrollmentStatus::NotStarted,
            StatusFilter::InProgress => status == EnrollmentStatus::InProgress,
            StatusFilter::Completed => status == EnrollmentStatus::Completed,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StatusFilter::All),
            "not-started" => Ok(StatusFilter::NotStarted),
            "in-progress" => Ok(StatusFilter::InProgress),
            "completed" => Ok(StatusFilter::Completed),
            other => Err(CatalogError::InvalidStatusFilter(other.to_string())),
        }
    }
}

/// The user-controlled filter/sort state of one catalog listing. Ephemeral
/// UI state; a fresh value is passed to the builder on every change.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewParams {
    pub search_term: String,
    pub category: CategoryFilter,
    pub difficulty: DifficultyFilter,
    pub sort: SortKey,
    pub status: StatusFilter,
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            category: CategoryFilter::All,
            difficulty: DifficultyFilter::All,
            sort: SortKey::Recent,
            status: StatusFilter::All,
        }
    }
}

impl ViewParams {
    /// Parses the raw string state the UI widgets hold. Any token outside
    /// the allowed sets is an error; the caller decides whether to fall
    /// back to a default view or surface a broken-filter warning.
    pub fn parse(
        search_term: &str,
        category: &str,
        difficulty: &str,
        sort: &str,
        status: &str,
    ) -> Result<Self, CatalogError> {
        Ok(Self {
            search_term: search_term.to_string(),
            category: category.parse()?,
            difficulty: difficulty.parse()?,
            sort: sort.parse()?,
            status: status.parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_allowed_tokens() {
        let params = ViewParams::parse("rust", "Programming", "beginner", "progress", "in-progress")
            .expect("Failed to parse params");
        assert_eq!(params.search_term, "rust");
        assert_eq!(params.category, CategoryFilter::Only(Category::Programming));
        assert_eq!(params.difficulty, DifficultyFilter::Only(Difficulty::Beginner));
        assert_eq!(params.sort, SortKey::Progress);
        assert_eq!(params.status, StatusFilter::InProgress);
    }

    #[test]
    fn parse_all_means_no_constraint() {
        let params =
            ViewParams::parse("", "all", "all", "recent", "all").expect("Failed to parse params");
        assert_eq!(params, ViewParams::default());
        assert!(params.category.matches(Category::Music));
        assert!(params.difficulty.matches(Difficulty::Advanced));
        assert!(params.status.matches(EnrollmentStatus::Completed));
    }

    #[test]
    fn unknown_tokens_fail_loudly() {
        assert_eq!(
            ViewParams::parse("", "all", "all", "alphabetical", "all"),
            Err(CatalogError::InvalidSortKey("alphabetical".to_string()))
        );
        assert_eq!(
            ViewParams::parse("", "Cooking", "all", "recent", "all"),
            Err(CatalogError::InvalidCategory("Cooking".to_string()))
        );
        assert_eq!(
            ViewParams::parse("", "all", "expert", "recent", "all"),
            Err(CatalogError::InvalidDifficulty("expert".to_string()))
        );
        assert_eq!(
            ViewParams::parse("", "all", "all", "recent", "done"),
            Err(CatalogError::InvalidStatusFilter("done".to_string()))
        );
        // no silent case-folding: tokens are exact
        assert!(ViewParams::parse("", "all", "Beginner", "recent", "all").is_err());
    }

    #[test]
    fn status_filter_matches_each_status() {
        assert!(StatusFilter::NotStarted.matches(EnrollmentStatus::NotStarted));
        assert!(!StatusFilter::NotStarted.matches(EnrollmentStatus::InProgress));
        assert!(StatusFilter::Completed.matches(EnrollmentStatus::Completed));
        assert!(!StatusFilter::Completed.matches(EnrollmentStatus::InProgress));
    }
}
