use skyguard_core::{AssessmentSource, HazardAssessment};

use crate::types::DiseaseSnapshot;

/// New cases per million at or above which an advisory is raised.
pub const ALERT_RATE_PER_MILLION: u64 = 50;

pub const ELEVATED_COVID: &str = "Elevated COVID-19 activity";

const ELEVATED_COVID_PRECAUTIONS: [&str; 3] = [
    "Wear a mask in crowded indoor spaces",
    "Stay home if unwell",
    "Consider testing if symptomatic",
];

/// Today's new cases per million population, rounded half up.
pub fn incidence_rate(snapshot: &DiseaseSnapshot) -> u64 {
    let population = snapshot.population.max(1) as f64;
    let rate = snapshot.today_cases as f64 / population * 1_000_000.0;
    rate.round() as u64
}

/// An advisory when the incidence rate reaches the threshold, otherwise
/// nothing at all.
pub fn evaluate_health(snapshot: &DiseaseSnapshot) -> Option<HazardAssessment> {
    let rate = incidence_rate(snapshot);
    if rate < ALERT_RATE_PER_MILLION {
        tracing::debug!(rate, country = %snapshot.country, "Incidence below alert threshold");
        return None;
    }

    tracing::info!(rate, country = %snapshot.country, "Elevated COVID-19 activity");
    Some(
        HazardAssessment::builder(AssessmentSource::Health)
            .hazard(ELEVATED_COVID)
            .precautions(ELEVATED_COVID_PRECAUTIONS)
            .build(),
    )
}
