//! End-to-end scenarios for the recommendation engine driven through its
//! public facade: filtering, scoring, ranking, and reason generation over a
//! realistic candidate pool.

mod common {
    use std::collections::BTreeMap;

    use chrono::NaiveTime;

    use mindmatch::matching::{
        Assessment, Concern, ConcernDuration, Lifestyle, TherapistId, TherapistProfile, TimeSlot,
        VerificationStatus, Weekday,
    };

    pub fn intake(concerns: Vec<Concern>, impact_level: u8) -> Assessment {
        Assessment {
            concerns,
            impact_level,
            lifestyle: Lifestyle::HighStressFastPaced,
            duration: ConcernDuration::MoreThanAYear,
            age_group: None,
            occupation: None,
            activity_level: None,
            other_concern: None,
        }
    }

    pub fn availability(days: usize) -> BTreeMap<Weekday, Vec<TimeSlot>> {
        const WEEK: [Weekday; 7] = [
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
            Weekday::Saturday,
            Weekday::Sunday,
        ];
        let slot = TimeSlot {
            start: NaiveTime::from_hms_opt(10, 0, 0).expect("valid time"),
            end: NaiveTime::from_hms_opt(11, 0, 0).expect("valid time"),
        };
        WEEK.iter()
            .take(days)
            .map(|day| (*day, vec![slot]))
            .collect()
    }

    pub fn profile(id: &str, name: &str) -> TherapistProfile {
        TherapistProfile {
            id: TherapistId(id.to_string()),
            full_name: name.to_string(),
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

    pub fn pool() -> Vec<TherapistProfile> {
        let mut senior = profile("t-senior", "Ama Mensah");
        senior.specializations = vec![
            "Anxiety and panic disorders".to_string(),
            "Cognitive Behavioral Therapy".to_string(),
        ];
        senior.years_of_experience = 14;
        senior.session_rate = Some(150.0);
        senior.average_rating = 4.9;
        senior.verification_status = VerificationStatus::Verified;
        senior.availability = availability(6);

        let mut mid = profile("t-mid", "Kwame Boateng");
        mid.specializations = vec!["Stress and burnout".to_string()];
        mid.years_of_experience = 6;
        mid.session_rate = Some(90.0);
        mid.average_rating = 4.2;
        mid.verification_status = VerificationStatus::Verified;
        mid.availability = availability(3);

        let mut student = profile("t-student", "Efua Owusu");
        student.is_student = true;
        student.specializations = vec!["Anxiety".to_string()];
        student.years_of_experience = 1;
        student.session_rate = Some(40.0);
        student.average_rating = 4.0;
        student.availability = availability(2);

        let mut rejected = profile("t-rejected", "Yaw Darko");
        rejected.specializations = vec!["Anxiety".to_string()];
        rejected.years_of_experience = 9;
        rejected.verification_status = VerificationStatus::Rejected;

        vec![senior, mid, student, rejected]
    }
}

use common::{intake, pool};
use mindmatch::matching::{Concern, RecommendationEngine, RecommendationOptions};

#[test]
fn ranks_the_strongest_candidate_first_and_drops_rejected_profiles() {
    let engine = RecommendationEngine::with_default_vocabulary();
    let assessment = intake(vec![Concern::Anxiety, Concern::Stress], 5);

    let ranked = engine.recommend(&assessment, &pool(), &RecommendationOptions::default());

    assert_eq!(ranked.total_found, 3);
    let ids: Vec<_> = ranked
        .recommendations
        .iter()
        .map(|result| result.therapist.id.0.as_str())
        .collect();
    assert_eq!(ids[0], "t-senior");
    assert!(!ids.contains(&"t-rejected"));

    let scores: Vec<_> = ranked
        .recommendations
        .iter()
        .map(|result| result.match_score)
        .collect();
    assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test]
fn top_result_carries_ordered_reasons() {
    let engine = RecommendationEngine::with_default_vocabulary();
    let assessment = intake(vec![Concern::Anxiety], 4);

    let ranked = engine.recommend(&assessment, &pool(), &RecommendationOptions::default());
    let top = &ranked.recommendations[0];

    assert_eq!(top.therapist.id.0, "t-senior");
    assert_eq!(
        top.match_reasons,
        vec![
            "Specializes in: Anxiety".to_string(),
            "Highly experienced (14+ years)".to_string(),
            "Excellent rating (4.9/5)".to_string(),
            "Verified therapist".to_string(),
            "Highly available".to_string(),
        ]
    );
}

#[test]
fn affordability_and_verification_filters_compose() {
    let engine = RecommendationEngine::with_default_vocabulary();
    let assessment = intake(vec![Concern::Anxiety], 3);

    let options = RecommendationOptions {
        max_rate: Some(100.0),
        verified_only: true,
        ..Default::default()
    };
    let ranked = engine.recommend(&assessment, &pool(), &options);

    assert_eq!(ranked.total_found, 1);
    assert_eq!(ranked.recommendations[0].therapist.id.0, "t-mid");
}

#[test]
fn summary_echoes_the_assessment() {
    let engine = RecommendationEngine::with_default_vocabulary();
    let assessment = intake(vec![Concern::Anxiety, Concern::Ocd], 5);

    let ranked = engine.recommend(&assessment, &pool(), &RecommendationOptions::default());

    assert_eq!(ranked.assessment_summary.concerns, assessment.concerns);
    assert_eq!(ranked.assessment_summary.impact_level, 5);
    assert_eq!(ranked.assessment_summary.duration, assessment.duration);
    assert_eq!(ranked.assessment_summary.lifestyle, assessment.lifestyle);
}

#[test]
fn swapped_vocabulary_changes_what_scores() {
    use mindmatch::matching::ConcernKeywordTable;

    let table = ConcernKeywordTable::from_reader(
        r#"{ "Anxiety": ["Somatic Experiencing"] }"#.as_bytes(),
    )
    .expect("table parses");
    let engine = RecommendationEngine::new(table);
    let assessment = intake(vec![Concern::Anxiety], 3);

    let mut somatic = common::profile("t-somatic", "Adjoa Asante");
    somatic.specializations = vec!["Somatic experiencing practitioner".to_string()];
    somatic.verification_status = mindmatch::matching::VerificationStatus::Rejected;

    // Keywords are lowercased on load, so the mixed-case entry still matches.
    let (components, score) = engine.score_breakdown(&assessment, &somatic);
    assert_eq!(score, 40.0);
    assert_eq!(components.len(), 1);
}
