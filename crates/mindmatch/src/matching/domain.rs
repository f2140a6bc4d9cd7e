use std::collections::BTreeMap;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for therapist profiles handed in by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TherapistId(pub String);

/// Mental-health concerns a patient can select on the intake questionnaire.
///
/// The serde names are the questionnaire vocabulary; `NoneOfTheAbove` has no
/// keyword-table entry and therefore never contributes specialization score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Concern {
    Anxiety,
    Depression,
    Overthinking,
    Stress,
    #[serde(rename = "Low self-esteem")]
    LowSelfEsteem,
    #[serde(rename = "Self-improvement")]
    SelfImprovement,
    #[serde(rename = "Anger issues")]
    AngerIssues,
    #[serde(rename = "Grief/loss")]
    GriefLoss,
    #[serde(rename = "Sleep disturbances")]
    SleepDisturbances,
    #[serde(rename = "OCD")]
    Ocd,
    #[serde(rename = "Sexual dysfunction")]
    SexualDysfunction,
    #[serde(rename = "Bipolar disorder")]
    BipolarDisorder,
    Addiction,
    #[serde(rename = "Autism spectrum disorder")]
    AutismSpectrumDisorder,
    #[serde(rename = "None of the above")]
    NoneOfTheAbove,
}

impl Concern {
    pub const fn label(self) -> &'static str {
        match self {
            Concern::Anxiety => "Anxiety",
            Concern::Depression => "Depression",
            Concern::Overthinking => "Overthinking",
            Concern::Stress => "Stress",
            Concern::LowSelfEsteem => "Low self-esteem",
            Concern::SelfImprovement => "Self-improvement",
            Concern::AngerIssues => "Anger issues",
            Concern::GriefLoss => "Grief/loss",
            Concern::SleepDisturbances => "Sleep disturbances",
            Concern::Ocd => "OCD",
            Concern::SexualDysfunction => "Sexual dysfunction",
            Concern::BipolarDisorder => "Bipolar disorder",
            Concern::Addiction => "Addiction",
            Concern::AutismSpectrumDisorder => "Autism spectrum disorder",
            Concern::NoneOfTheAbove => "None of the above",
        }
    }
}

/// Self-described pace of the patient's day-to-day life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lifestyle {
    #[serde(rename = "High-stress, fast-paced")]
    HighStressFastPaced,
    #[serde(rename = "Moderately busy, some downtime")]
    ModeratelyBusy,
    #[serde(rename = "Balanced between work and personal life")]
    Balanced,
    #[serde(rename = "Relaxed, low-stress")]
    RelaxedLowStress,
}

/// How long the selected concerns have persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConcernDuration {
    #[serde(rename = "Less than a month")]
    LessThanAMonth,
    #[serde(rename = "1-6 months")]
    OneToSixMonths,
    #[serde(rename = "6 months - 1 year")]
    SixMonthsToAYear,
    #[serde(rename = "More than 1 year")]
    MoreThanAYear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "18-24")]
    From18To24,
    #[serde(rename = "25-34")]
    From25To34,
    #[serde(rename = "35-44")]
    From35To44,
    #[serde(rename = "45-54")]
    From45To54,
    #[serde(rename = "55-64")]
    From55To64,
    #[serde(rename = "65+")]
    Over65,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Occupation {
    Student,
    #[serde(rename = "Employed (Full-time)")]
    EmployedFullTime,
    #[serde(rename = "Employed (Part-time)")]
    EmployedPartTime,
    #[serde(rename = "Self-employed")]
    SelfEmployed,
    Unemployed,
    Retired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityLevel {
    #[serde(rename = "Sedentary (little to no exercise)")]
    Sedentary,
    #[serde(rename = "Lightly active (walking, yoga, stretching)")]
    LightlyActive,
    #[serde(rename = "Moderately active (exercise 3-4 days a week)")]
    ModeratelyActive,
    #[serde(rename = "Very active (intense workouts, sports, daily exercise)")]
    VeryActive,
}

/// Latest intake snapshot for one patient. Replaced wholesale on each
/// submission; the engine only ever sees the current answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub concerns: Vec<Concern>,
    /// Severity self-rating, expected in 1..=5. Out-of-range values fall
    /// into the nearest tier branch rather than failing.
    pub impact_level: u8,
    pub lifestyle: Lifestyle,
    pub duration: ConcernDuration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_group: Option<AgeGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<Occupation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_concern: Option<String>,
}

/// Review state assigned by the supervisor/verification workflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    #[default]
    Pending,
    Verified,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// One bookable window on a given weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Qualification {
    pub degree: String,
    pub institution: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
}

/// Candidate profile as resolved by the caller. `average_rating` is a
/// snapshot maintained by the feedback subsystem; it can change between
/// requests, which is why scores are never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TherapistProfile {
    pub id: TherapistId,
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default)]
    pub is_student: bool,
    #[serde(default)]
    pub qualifications: Vec<Qualification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_number: Option<String>,
    #[serde(default)]
    pub specializations: Vec<String>,
    #[serde(default)]
    pub years_of_experience: u32,
    /// Per-session fee. Candidates without a rate fail the `max_rate`
    /// pre-filter when one is requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_rate: Option<f64>,
    #[serde(default)]
    pub availability: BTreeMap<Weekday, Vec<TimeSlot>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supervisor_id: Option<String>,
    #[serde(default)]
    pub verification_status: VerificationStatus,
    #[serde(default)]
    pub average_rating: f32,
}

impl TherapistProfile {
    /// Number of weekdays carrying at least one bookable slot.
    pub fn available_day_count(&self) -> usize {
        self.availability
            .values()
            .filter(|slots| !slots.is_empty())
            .count()
    }
}

/// Factors permitted in the scoring rubric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchFactor {
    Specialization,
    Experience,
    Rating,
    Verification,
    Availability,
    LifestyleFit,
    Chronicity,
}

/// Discrete contribution to a match score, kept for transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: MatchFactor,
    pub points: f64,
    pub note: String,
}

/// One ranked recommendation. Ephemeral: produced fresh per request and
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub therapist: TherapistProfile,
    pub match_score: f64,
    /// Display rounding of the score. Deliberately unclamped: bonus factors
    /// can push it past 100 and callers must not assume an upper bound.
    pub match_percentage: u32,
    pub match_reasons: Vec<String>,
    pub score_components: Vec<ScoreComponent>,
}

/// Echo of the assessment fields that drove a ranking, for response envelopes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSummary {
    pub concerns: Vec<Concern>,
    pub impact_level: u8,
    pub duration: ConcernDuration,
    pub lifestyle: Lifestyle,
}

impl AssessmentSummary {
    pub fn of(assessment: &Assessment) -> Self {
        Self {
            concerns: assessment.concerns.clone(),
            impact_level: assessment.impact_level,
            duration: assessment.duration,
            lifestyle: assessment.lifestyle,
        }
    }
}
