use std::collections::BTreeMap;

use chrono::NaiveTime;

use crate::matching::domain::{
    Assessment, Concern, ConcernDuration, Lifestyle, TherapistId, TherapistProfile, TimeSlot,
    VerificationStatus, Weekday,
};
use crate::matching::RecommendationEngine;

pub(super) fn engine() -> RecommendationEngine {
    RecommendationEngine::with_default_vocabulary()
}

pub(super) fn assessment(concerns: Vec<Concern>, impact_level: u8) -> Assessment {
    Assessment {
        concerns,
        impact_level,
        lifestyle: Lifestyle::Balanced,
        duration: ConcernDuration::OneToSixMonths,
        age_group: None,
        occupation: None,
        activity_level: None,
        other_concern: None,
    }
}

/// Blank-slate candidate: no specializations, no experience, no rating, no
/// availability, verification pending.
pub(super) fn therapist(id: &str) -> TherapistProfile {
    TherapistProfile {
        id: TherapistId(id.to_string()),
        full_name: format!("Dr. {id}"),
        email: None,
        bio: None,
        is_student: false,
        qualifications: Vec::new(),
        license_number: None,
        specializations: Vec::new(),
        years_of_experience: 0,
        session_rate: None,
        availability: BTreeMap::new(),
        supervisor_id: None,
        verification_status: VerificationStatus::Pending,
        average_rating: 0.0,
    }
}

pub(super) fn weekday_slots(days: &[Weekday]) -> BTreeMap<Weekday, Vec<TimeSlot>> {
    let slot = TimeSlot {
        start: NaiveTime::from_hms_opt(9, 0, 0).expect("valid time"),
        end: NaiveTime::from_hms_opt(10, 0, 0).expect("valid time"),
    };
    days.iter().map(|day| (*day, vec![slot])).collect()
}

pub(super) const SIX_DAYS: [Weekday; 6] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];
