use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// A structured review an industry expert submits against a course.
/// The backend keeps at most one per (expert, course) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryRating {
    pub course_id: String,
    pub expert_id: String,
    pub relevance: u8,
    pub practicality: u8,
    pub industry_alignment: u8,
    pub skill_development: u8,
    pub overall_quality: u8,
    #[serde(default)]
    pub feedback: String,
    pub submitted_at: DateTime<Utc>,
}

impl IndustryRating {
    fn scores(&self) -> [(&'static str, u8); 5] {
        [
            ("relevance", self.relevance),
            ("practicality", self.practicality),
            ("industryAlignment", self.industry_alignment),
            ("skillDevelopment", self.skill_development),
            ("overallQuality", self.overall_quality),
        ]
    }

    /// Every sub-score must sit in 1-5. Reports the first offending
    /// criterion so the form layer can point at the field.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (criterion, value) in self.scores() {
            if !(1..=5).contains(&value) {
                return Err(CatalogError::InvalidRatingScore { criterion, value });
            }
        }
        Ok(())
    }
}

/// Upsert into an in-memory rating list: an existing (expert, course)
/// rating is replaced in place, keeping its position; otherwise the new
/// rating is appended. The rating is validated first.
pub fn upsert_rating(
    ratings: &mut Vec<IndustryRating>,
    rating: IndustryRating,
) -> Result<(), CatalogError> {
    rating.validate()?;
    match ratings
        .iter_mut()
        .find(|r| r.course_id == rating.course_id && r.expert_id == rating.expert_id)
    {
        Some(slot) => *slot = rating,
        None => ratings.push(rating),
    }
    Ok(())
}

/// Per-criterion and overall means over the expert ratings of one course.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSummary {
    pub count: usize,
    pub relevance: Decimal,
    pub practicality: Decimal,
    pub industry_alignment: Decimal,
    pub skill_development: Decimal,
    pub overall_quality: Decimal,
    pub overall: Decimal,
}

/// Averages the ratings submitted for `course_id`. Returns `None` when no
/// expert has rated the course yet; the UI shows a "not yet rated" state
/// instead of a fabricated number.
pub fn course_rating_summary(
    ratings: &[IndustryRating],
    course_id: &str,
) -> Option<RatingSummary> {
    let mut count = 0u32;
    let mut sums = [0u32; 5];

    for rating in ratings.iter().filter(|r| r.course_id == course_id) {
        count += 1;
        for (slot, (_, value)) in sums.iter_mut().zip(rating.scores()) {
            *slot += u32::from(value);
        }
    }

    if count == 0 {
        return None;
    }

    let mean = |sum: u32| Decimal::from(sum) / Decimal::from(count);
    let criteria: Vec<Decimal> = sums.iter().map(|&s| mean(s)).collect();
    let overall = criteria.iter().copied().sum::<Decimal>() / Decimal::from(5);

    Some(RatingSummary {
        count: count as usize,
        relevance: criteria[0],
        practicality: criteria[1],
        industry_alignment: criteria[2],
        skill_development: criteria[3],
        overall_quality: criteria[4],
        overall,
    })
}
