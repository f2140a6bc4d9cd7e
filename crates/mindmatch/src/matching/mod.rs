//! Therapist recommendation engine.
//!
//! Pure scoring and ranking over caller-resolved inputs: one patient
//! assessment plus a candidate set of therapist profiles. The engine owns no
//! persistence, authentication, or scheduling; collaborators resolve and
//! validate inputs before invoking it, and results are produced fresh per
//! request because ratings and availability change between requests.

pub mod domain;
pub mod keywords;
pub mod ranking;
mod reasons;
pub mod router;
mod scoring;

#[cfg(test)]
mod tests;

pub use domain::{
    ActivityLevel, AgeGroup, Assessment, AssessmentSummary, Concern, ConcernDuration, Lifestyle,
    MatchFactor, MatchResult, Occupation, Qualification, ScoreComponent, TherapistId,
    TherapistProfile, TimeSlot, VerificationStatus, Weekday,
};
pub use keywords::{ConcernKeywordTable, KeywordTableError};
pub use ranking::{RecommendationOptions, Recommendations, DEFAULT_LIMIT, MAX_LIMIT};
pub use router::recommendation_router;

/// Stateless engine applying the keyword vocabulary and scoring rubric to a
/// candidate pool. Safe to share across requests and invoke concurrently.
pub struct RecommendationEngine {
    keywords: ConcernKeywordTable,
}

impl RecommendationEngine {
    pub fn new(keywords: ConcernKeywordTable) -> Self {
        Self { keywords }
    }

    /// Engine backed by the built-in concern vocabulary.
    pub fn with_default_vocabulary() -> Self {
        Self::new(ConcernKeywordTable::default())
    }

    pub fn keyword_table(&self) -> &ConcernKeywordTable {
        &self.keywords
    }

    /// Weighted match score for one candidate. Deterministic, never fails,
    /// never negative; bonuses may push it past 100.
    pub fn score(&self, assessment: &Assessment, therapist: &TherapistProfile) -> f64 {
        let (_, score) = scoring::score_candidate(assessment, therapist, &self.keywords);
        score
    }

    /// Score plus the per-factor contribution trail behind it.
    pub fn score_breakdown(
        &self,
        assessment: &Assessment,
        therapist: &TherapistProfile,
    ) -> (Vec<ScoreComponent>, f64) {
        scoring::score_candidate(assessment, therapist, &self.keywords)
    }

    /// Display-ordered reasons for surfacing one candidate.
    pub fn match_reasons(
        &self,
        assessment: &Assessment,
        therapist: &TherapistProfile,
    ) -> Vec<String> {
        reasons::match_reasons(assessment, therapist)
    }

    /// Filter, score, rank, and explain a candidate pool. An empty pool (or
    /// one fully removed by filters) yields an empty result, not an error.
    pub fn recommend(
        &self,
        assessment: &Assessment,
        candidates: &[TherapistProfile],
        options: &RecommendationOptions,
    ) -> Recommendations {
        ranking::rank(assessment, candidates, options, &self.keywords)
    }
}
