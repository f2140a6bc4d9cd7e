use serde::{Deserialize, Serialize};

use super::domain::{
    Assessment, AssessmentSummary, MatchResult, TherapistProfile, VerificationStatus,
};
use super::keywords::ConcernKeywordTable;
use super::{reasons, scoring};

/// Default number of recommendations when the caller does not ask for one.
pub const DEFAULT_LIMIT: usize = 10;
/// Hard ceiling on response size regardless of the requested limit.
pub const MAX_LIMIT: usize = 20;

/// Caller-supplied knobs for one ranking pass. All filters run before
/// scoring; excluded candidates are never scored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rate: Option<f64>,
    #[serde(default)]
    pub verified_only: bool,
}

impl RecommendationOptions {
    pub fn effective_limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT)
    }
}

/// Ranked output of one recommendation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    pub recommendations: Vec<MatchResult>,
    /// Candidates that survived the pre-filters and were scored, before
    /// truncation to the limit.
    pub total_found: usize,
    pub assessment_summary: AssessmentSummary,
}

pub(crate) fn rank(
    assessment: &Assessment,
    candidates: &[TherapistProfile],
    options: &RecommendationOptions,
    keywords: &ConcernKeywordTable,
) -> Recommendations {
    let mut scored: Vec<MatchResult> = candidates
        .iter()
        .filter(|candidate| passes_filters(candidate, options))
        .map(|candidate| {
            let (components, score) = scoring::score_candidate(assessment, candidate, keywords);
            MatchResult {
                therapist: candidate.clone(),
                match_score: score,
                // Display rounding of the unclamped score; may read above 100.
                match_percentage: score.round() as u32,
                match_reasons: Vec::new(),
                score_components: components,
            }
        })
        .collect();

    let total_found = scored.len();

    // Stable sort: exact ties keep their original candidate order.
    scored.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
    scored.truncate(options.effective_limit());

    // Reasons only for the survivors, to bound per-request work.
    for result in &mut scored {
        result.match_reasons = reasons::match_reasons(assessment, &result.therapist);
    }

    Recommendations {
        recommendations: scored,
        total_found,
        assessment_summary: AssessmentSummary::of(assessment),
    }
}

fn passes_filters(candidate: &TherapistProfile, options: &RecommendationOptions) -> bool {
    let verification_ok = if options.verified_only {
        candidate.verification_status == VerificationStatus::Verified
    } else {
        candidate.verification_status != VerificationStatus::Rejected
    };
    if !verification_ok {
        return false;
    }

    if let Some(min_rating) = options.min_rating {
        if candidate.average_rating < min_rating {
            return false;
        }
    }

    if let Some(max_rate) = options.max_rate {
        // Candidates without a published rate fail an affordability filter.
        match candidate.session_rate {
            Some(rate) if rate <= max_rate => {}
            _ => return false,
        }
    }

    true
}
