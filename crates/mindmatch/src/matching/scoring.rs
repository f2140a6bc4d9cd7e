use super::domain::{
    Assessment, ConcernDuration, Lifestyle, MatchFactor, ScoreComponent, TherapistProfile,
    VerificationStatus,
};
use super::keywords::ConcernKeywordTable;

pub(crate) const SPECIALIZATION_POINTS: f64 = 40.0;
pub(crate) const EXPERIENCE_POINTS: f64 = 20.0;
pub(crate) const RATING_POINTS: f64 = 20.0;
pub(crate) const VERIFICATION_POINTS: f64 = 10.0;
pub(crate) const AVAILABILITY_POINTS: f64 = 10.0;

const MULTI_MATCH_BONUS: f64 = 5.0;
const TOP_RATING_BONUS: f64 = 3.0;
const HIGH_STRESS_BONUS: f64 = 3.0;
const STUDENT_FIT_BONUS: f64 = 2.0;
const CHRONICITY_BONUS: f64 = 5.0;

/// Score one candidate against one assessment.
///
/// Pure and infallible: absent or degenerate fields contribute zero rather
/// than failing, and the six factors are additive so a gap in one dimension
/// never zeroes out an otherwise strong match. The total is rounded
/// half-away-from-zero to 2 decimals and is deliberately not clamped; bonus
/// factors can push it past the nominal 100-point scale.
pub(crate) fn score_candidate(
    assessment: &Assessment,
    therapist: &TherapistProfile,
    keywords: &ConcernKeywordTable,
) -> (Vec<ScoreComponent>, f64) {
    let mut components = Vec::new();
    let mut total = 0.0;

    // Specialization match against the keyword vocabulary.
    if !therapist.specializations.is_empty() {
        let specs_lower: Vec<String> = therapist
            .specializations
            .iter()
            .map(|spec| spec.trim().to_lowercase())
            .filter(|spec| !spec.is_empty())
            .collect();

        let total_concerns = assessment.concerns.len();
        let matched = assessment
            .concerns
            .iter()
            .filter(|concern| {
                keywords.keywords_for(**concern).iter().any(|keyword| {
                    specs_lower
                        .iter()
                        .any(|spec| spec.contains(keyword.as_str()) || keyword.contains(spec.as_str()))
                })
            })
            .count();

        if total_concerns > 0 && matched > 0 {
            let points = (matched as f64 / total_concerns as f64) * SPECIALIZATION_POINTS;
            components.push(ScoreComponent {
                factor: MatchFactor::Specialization,
                points,
                note: format!("matched {matched} of {total_concerns} reported concern(s)"),
            });
            total += points;
        }

        if matched > 1 {
            components.push(ScoreComponent {
                factor: MatchFactor::Specialization,
                points: MULTI_MATCH_BONUS,
                note: "covers multiple reported concerns".to_string(),
            });
            total += MULTI_MATCH_BONUS;
        }
    }

    // Experience tiers shift upward for high-impact patients.
    let years = therapist.years_of_experience;
    let tier = if assessment.impact_level >= 4 {
        match years {
            y if y >= 10 => 1.0,
            y if y >= 5 => 0.7,
            y if y >= 2 => 0.4,
            _ => 0.0,
        }
    } else {
        match years {
            y if y >= 5 => 1.0,
            y if y >= 2 => 0.7,
            y if y >= 1 => 0.4,
            _ => 0.0,
        }
    };
    if tier > 0.0 {
        let points = EXPERIENCE_POINTS * tier;
        components.push(ScoreComponent {
            factor: MatchFactor::Experience,
            points,
            note: format!(
                "{years} year(s) of experience against impact level {}",
                assessment.impact_level
            ),
        });
        total += points;
    }

    let rating = f64::from(therapist.average_rating);
    if rating > 0.0 {
        let points = (rating / 5.0) * RATING_POINTS;
        components.push(ScoreComponent {
            factor: MatchFactor::Rating,
            points,
            note: format!("average rating {} of 5", therapist.average_rating),
        });
        total += points;

        if rating >= 4.5 {
            components.push(ScoreComponent {
                factor: MatchFactor::Rating,
                points: TOP_RATING_BONUS,
                note: "consistently top-rated".to_string(),
            });
            total += TOP_RATING_BONUS;
        }
    }

    let verification_points = match therapist.verification_status {
        VerificationStatus::Verified => VERIFICATION_POINTS,
        VerificationStatus::Pending => VERIFICATION_POINTS * 0.5,
        VerificationStatus::Rejected => 0.0,
    };
    if verification_points > 0.0 {
        components.push(ScoreComponent {
            factor: MatchFactor::Verification,
            points: verification_points,
            note: match therapist.verification_status {
                VerificationStatus::Verified => "verified profile".to_string(),
                _ => "verification pending".to_string(),
            },
        });
        total += verification_points;
    }

    let available_days = therapist.available_day_count();
    let availability_points = match available_days {
        d if d >= 5 => AVAILABILITY_POINTS,
        d if d >= 3 => AVAILABILITY_POINTS * 0.7,
        d if d >= 1 => AVAILABILITY_POINTS * 0.4,
        _ => 0.0,
    };
    if availability_points > 0.0 {
        components.push(ScoreComponent {
            factor: MatchFactor::Availability,
            points: availability_points,
            note: format!("bookable on {available_days} weekday(s)"),
        });
        total += availability_points;
    }

    match assessment.lifestyle {
        Lifestyle::HighStressFastPaced if years >= 5 => {
            components.push(ScoreComponent {
                factor: MatchFactor::LifestyleFit,
                points: HIGH_STRESS_BONUS,
                note: "experienced support for a high-stress lifestyle".to_string(),
            });
            total += HIGH_STRESS_BONUS;
        }
        Lifestyle::RelaxedLowStress if therapist.is_student => {
            components.push(ScoreComponent {
                factor: MatchFactor::LifestyleFit,
                points: STUDENT_FIT_BONUS,
                note: "student therapist suits a low-pressure cadence".to_string(),
            });
            total += STUDENT_FIT_BONUS;
        }
        _ => {}
    }

    if assessment.duration == ConcernDuration::MoreThanAYear && years >= 7 {
        components.push(ScoreComponent {
            factor: MatchFactor::Chronicity,
            points: CHRONICITY_BONUS,
            note: "long-standing concerns favor senior clinicians".to_string(),
        });
        total += CHRONICITY_BONUS;
    }

    (components, round_to_cents(total))
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
