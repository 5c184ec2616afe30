//! Per-patient overview assembly.
//!
//! The overview bundles everything the dashboard renders for one patient
//! into a single response: the patient record, the recent sample series,
//! the latest snapshot with its derived indicators, the risk split, the
//! analysis and recommendation lists, and the agent status.
//!
//! Resources degrade to their fallback values independently. The
//! assembled view carries no marker of which ones did; degradation is
//! observable only in the logs.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::{
    ActivityIndicator, AgentsStatus, Analysis, HealthSample, HeartRateIndicator, MoodBand,
    Patient, Recommendation, RiskStats, SleepIndicator,
};
use crate::upstream::{DEFAULT_PATIENT_ID, HealthApiClient};

/// Snapshot classifications for the most recent sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Indicators {
    pub sleep: SleepIndicator,
    pub mood: MoodBand,
    pub activity: ActivityIndicator,
    pub heart_rate: HeartRateIndicator,
}

impl Indicators {
    pub fn from_sample(sample: &HealthSample) -> Self {
        Self {
            sleep: sample.sleep_indicator(),
            mood: sample.mood_band(),
            activity: sample.activity_indicator(),
            heart_rate: sample.heart_rate_indicator(),
        }
    }
}

/// Everything the dashboard renders for one patient, resolved in one pass.
#[derive(Debug, Clone, Serialize)]
pub struct PatientOverview {
    /// When this overview was assembled.
    pub generated_at: DateTime<Utc>,

    /// The selected patient's record, when the patient list contains it.
    pub patient: Option<Patient>,

    /// The most recent sample.
    pub latest: HealthSample,

    /// Classifications derived from the latest sample.
    pub indicators: Indicators,

    /// Recent sample series, oldest first.
    pub series: Vec<HealthSample>,

    /// Risk distribution.
    pub risk_stats: RiskStats,

    /// Recent emotional analyses.
    pub analyses: Vec<Analysis>,

    /// Recent recommendations.
    pub recommendations: Vec<Recommendation>,

    /// Background agent status.
    pub agents: AgentsStatus,
}

impl PatientOverview {
    /// Resolve all resources for `patient` concurrently and assemble the
    /// view. Like every accessor, this always produces a renderable value.
    pub async fn fetch(client: &HealthApiClient, patient: Option<i64>) -> Self {
        let (patients, series, latest, risk_stats, analyses, recommendations, agents) = tokio::join!(
            client.patients(),
            client.health_data(patient),
            client.latest_data(patient),
            client.risk_stats(patient),
            client.analyses(patient),
            client.recommendations(patient),
            client.agents_status(),
        );

        let id = patient.unwrap_or(DEFAULT_PATIENT_ID);
        let latest = latest.into_value();

        Self {
            generated_at: Utc::now(),
            patient: patients.into_value().into_iter().find(|p| p.id == id),
            indicators: Indicators::from_sample(&latest),
            latest,
            series: series.into_value(),
            risk_stats: risk_stats.into_value(),
            analyses: analyses.into_value(),
            recommendations: recommendations.into_value(),
            agents: agents.into_value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback;

    #[test]
    fn test_indicators_for_the_fallback_latest_sample() {
        let indicators = Indicators::from_sample(&fallback::latest_sample());

        assert_eq!(indicators.sleep, SleepIndicator::Insuficiente);
        assert_eq!(indicators.mood, MoodBand::Neutro);
        assert_eq!(indicators.activity, ActivityIndicator::Sedentario);
        assert_eq!(indicators.heart_rate, HeartRateIndicator::Normal);
    }

    #[test]
    fn test_indicators_for_a_good_day() {
        let sample = HealthSample {
            date: "2024-01-03".to_string(),
            sleep_hours: 8.2,
            mood: 9,
            activity_minutes: 60,
            heart_rate: 70,
        };

        let indicators = Indicators::from_sample(&sample);

        assert_eq!(indicators.sleep, SleepIndicator::Adequado);
        assert_eq!(indicators.mood, MoodBand::Positivo);
        assert_eq!(indicators.activity, ActivityIndicator::Ativo);
        assert_eq!(indicators.heart_rate, HeartRateIndicator::Normal);
    }
}
