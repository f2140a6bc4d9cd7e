use super::domain::{Assessment, TherapistProfile, VerificationStatus};

/// Human-readable reasons for a recommendation, in fixed display order.
///
/// This pass intentionally matches the concern label itself against the
/// specialization text (substring, both directions) instead of reusing the
/// keyword table from scoring. The two passes disagree on purpose: the
/// keyword table decides what contributes score, while the reasons only
/// surface overlaps a patient would recognize by name.
pub(crate) fn match_reasons(assessment: &Assessment, therapist: &TherapistProfile) -> Vec<String> {
    let mut reasons = Vec::new();

    let specs_lower: Vec<String> = therapist
        .specializations
        .iter()
        .map(|spec| spec.trim().to_lowercase())
        .filter(|spec| !spec.is_empty())
        .collect();

    let matched_labels: Vec<&str> = assessment
        .concerns
        .iter()
        .filter(|concern| {
            let label = concern.label().to_lowercase();
            specs_lower
                .iter()
                .any(|spec| spec.contains(label.as_str()) || label.contains(spec.as_str()))
        })
        .map(|concern| concern.label())
        .collect();

    if !matched_labels.is_empty() {
        reasons.push(format!("Specializes in: {}", matched_labels.join(", ")));
    }

    let years = therapist.years_of_experience;
    if years >= 10 {
        reasons.push(format!("Highly experienced ({years}+ years)"));
    } else if years >= 5 {
        reasons.push(format!("Experienced ({years} years)"));
    }

    let rating = therapist.average_rating;
    if rating >= 4.5 {
        reasons.push(format!("Excellent rating ({rating}/5)"));
    } else if rating >= 4.0 {
        reasons.push(format!("High rating ({rating}/5)"));
    }

    if therapist.verification_status == VerificationStatus::Verified {
        reasons.push("Verified therapist".to_string());
    }

    if therapist.available_day_count() >= 5 {
        reasons.push("Highly available".to_string());
    }

    reasons
}
