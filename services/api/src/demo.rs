use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use mindmatch::error::AppError;
use mindmatch::matching::{
    Assessment, Concern, ConcernDuration, ConcernKeywordTable, Lifestyle, RecommendationEngine,
    RecommendationOptions, TherapistId, TherapistProfile, TimeSlot, VerificationStatus, Weekday,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Maximum number of recommendations to print
    #[arg(long)]
    pub(crate) limit: Option<usize>,
    /// Only consider verified therapists
    #[arg(long)]
    pub(crate) verified_only: bool,
    /// Exclude therapists charging more than this per session
    #[arg(long)]
    pub(crate) max_rate: Option<f64>,
    /// Exclude therapists rated below this average
    #[arg(long)]
    pub(crate) min_rating: Option<f32>,
    /// Optional replacement keyword vocabulary (JSON)
    #[arg(long)]
    pub(crate) keywords: Option<PathBuf>,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let table = match &args.keywords {
        Some(path) => ConcernKeywordTable::from_path(path)?,
        None => ConcernKeywordTable::default(),
    };
    let engine = Arc::new(RecommendationEngine::new(table));

    let assessment = sample_assessment();
    let options = RecommendationOptions {
        limit: args.limit,
        min_rating: args.min_rating,
        max_rate: args.max_rate,
        verified_only: args.verified_only,
    };

    println!("Therapist recommendation demo");
    println!(
        "Assessment: {} concern(s), impact level {}, duration {:?}",
        assessment.concerns.len(),
        assessment.impact_level,
        assessment.duration
    );

    let ranked = engine.recommend(&assessment, &sample_pool(), &options);
    println!(
        "\nScored {} candidate(s); showing top {}",
        ranked.total_found,
        ranked.recommendations.len()
    );

    if ranked.recommendations.is_empty() {
        println!("No therapists matched the requested filters");
        return Ok(());
    }

    for (rank, result) in ranked.recommendations.iter().enumerate() {
        println!(
            "\n{}. {} — score {:.2} ({}%)",
            rank + 1,
            result.therapist.full_name,
            result.match_score,
            result.match_percentage
        );
        for reason in &result.match_reasons {
            println!("   - {reason}");
        }
        println!("   Score components:");
        for component in &result.score_components {
            println!(
                "     {:?}: {:+.2} ({})",
                component.factor, component.points, component.note
            );
        }
    }

    Ok(())
}

fn sample_assessment() -> Assessment {
    Assessment {
        concerns: vec![Concern::Anxiety, Concern::SleepDisturbances],
        impact_level: 4,
        lifestyle: Lifestyle::HighStressFastPaced,
        duration: ConcernDuration::MoreThanAYear,
        age_group: None,
        occupation: None,
        activity_level: None,
        other_concern: None,
    }
}

fn sample_pool() -> Vec<TherapistProfile> {
    vec![
        profile(
            "demo-senior",
            "Dr. Abena Sarpong",
            &["Anxiety and panic disorders", "Insomnia and sleep disorders"],
            15,
            Some(160.0),
            4.9,
            VerificationStatus::Verified,
            6,
            false,
        ),
        profile(
            "demo-mid",
            "Kofi Adjei",
            &["Cognitive Behavioral Therapy"],
            6,
            Some(95.0),
            4.3,
            VerificationStatus::Verified,
            3,
            false,
        ),
        profile(
            "demo-student",
            "Akosua Frimpong",
            &["Stress management"],
            1,
            Some(35.0),
            4.0,
            VerificationStatus::Pending,
            2,
            true,
        ),
        profile(
            "demo-unverified",
            "Yaw Antwi",
            &["Grief"],
            9,
            Some(120.0),
            3.4,
            VerificationStatus::Rejected,
            5,
            false,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn profile(
    id: &str,
    name: &str,
    specializations: &[&str],
    years: u32,
    rate: Option<f64>,
    rating: f32,
    status: VerificationStatus,
    days: usize,
    is_student: bool,
) -> TherapistProfile {
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
        start: chrono_time(9, 0),
        end: chrono_time(17, 0),
    };
    let availability: BTreeMap<Weekday, Vec<TimeSlot>> = WEEK
        .iter()
        .take(days)
        .map(|day| (*day, vec![slot]))
        .collect();

    TherapistProfile {
        id: TherapistId(id.to_string()),
        full_name: name.to_string(),
        email: None,
        bio: None,
        is_student,
        qualifications: Vec::new(),
        license_number: None,
        specializations: specializations.iter().map(|s| s.to_string()).collect(),
        years_of_experience: years,
        session_rate: rate,
        availability,
        supervisor_id: None,
        verification_status: status,
        average_rating: rating,
    }
}

fn chrono_time(hour: u32, minute: u32) -> chrono::NaiveTime {
    chrono::NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time")
}
