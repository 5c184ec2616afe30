//! Data models for Vigia.
//!
//! Every type here mirrors one payload of the upstream monitoring API.
//! Field names on the wire are the Portuguese names of the upstream
//! contract (`nome`, `sono`, `risco`, ...); Rust field names are English
//! with serde renames.
//!
//! # Canonical sample shape
//!
//! The upstream has shipped two encodings of a health sample:
//!
//! - the current numeric form: `{date, sono, humor: 0-10, atividade: minutes, fc}`
//! - a legacy form with `sono_horas`/`atividade_fisica`/`frequencia_cardiaca`
//!   keys, `humor` as a category (`positivo`/`neutro`/`negativo`) and
//!   `atividade_fisica` as a category (`nenhuma`/`sedentaria`/`leve`/
//!   `moderada`/`intensa`)
//!
//! [`HealthSample`] is the canonical numeric shape. Legacy payloads are
//! translated once, during deserialization, by the [`RawHealthSample`]
//! adapter; nothing downstream ever sees a categorical value.

use serde::{Deserialize, Serialize};

/// A monitored patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// Stable numeric identifier.
    pub id: i64,

    /// Full name.
    #[serde(rename = "nome")]
    pub name: String,

    /// Age in years.
    #[serde(rename = "idade")]
    pub age: u32,

    /// Sex as registered upstream.
    #[serde(rename = "sexo")]
    pub sex: Sex,
}

/// Patient sex, `M`/`F` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

/// One point-in-time health observation, keyed by calendar date.
///
/// This is the canonical shape: mood on a 0-10 scale, activity in minutes.
/// Deserialization accepts both upstream encodings (see the module docs);
/// serialization always produces the numeric form the charts consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawHealthSample")]
pub struct HealthSample {
    /// Calendar date of the observation, `YYYY-MM-DD`.
    ///
    /// Empty when the upstream omits it (the legacy latest-snapshot
    /// payload carries no date key).
    pub date: String,

    /// Hours slept.
    #[serde(rename = "sono")]
    pub sleep_hours: f64,

    /// Mood on a 0-10 scale.
    #[serde(rename = "humor")]
    pub mood: u8,

    /// Minutes of physical activity.
    #[serde(rename = "atividade")]
    pub activity_minutes: u32,

    /// Heart rate in beats per minute.
    #[serde(rename = "fc")]
    pub heart_rate: u32,
}

impl HealthSample {
    /// Sleep classification: adequate at 7 hours or more.
    pub fn sleep_indicator(&self) -> SleepIndicator {
        if self.sleep_hours >= 7.0 {
            SleepIndicator::Adequado
        } else {
            SleepIndicator::Insuficiente
        }
    }

    /// Mood band for the 0-10 value.
    pub fn mood_band(&self) -> MoodBand {
        MoodBand::from_scale(self.mood)
    }

    /// Activity classification: active at 30 minutes or more.
    pub fn activity_indicator(&self) -> ActivityIndicator {
        if self.activity_minutes >= 30 {
            ActivityIndicator::Ativo
        } else {
            ActivityIndicator::Sedentario
        }
    }

    /// Heart-rate classification: normal within 60-90 bpm.
    pub fn heart_rate_indicator(&self) -> HeartRateIndicator {
        if (60..=90).contains(&self.heart_rate) {
            HeartRateIndicator::Normal
        } else {
            HeartRateIndicator::Anormal
        }
    }
}

/// Wire-format adapter for [`HealthSample`].
///
/// Accepts the canonical numeric keys plus the legacy aliases, and either
/// encoding of mood and activity. An unrecognized category is a payload
/// failure: the whole deserialization errors and the fetch falls back.
#[derive(Debug, Deserialize)]
struct RawHealthSample {
    #[serde(default, alias = "data")]
    date: String,

    #[serde(rename = "sono", alias = "sono_horas")]
    sleep_hours: f64,

    #[serde(rename = "humor")]
    mood: RawMood,

    #[serde(rename = "atividade", alias = "atividade_fisica")]
    activity: RawActivity,

    #[serde(rename = "fc", alias = "frequencia_cardiaca")]
    heart_rate: u32,
}

impl From<RawHealthSample> for HealthSample {
    fn from(raw: RawHealthSample) -> Self {
        Self {
            date: raw.date,
            sleep_hours: raw.sleep_hours,
            mood: match raw.mood {
                RawMood::Scale(value) => value,
                RawMood::Category(band) => band.representative_scale(),
            },
            activity_minutes: match raw.activity {
                RawActivity::Minutes(value) => value,
                RawActivity::Category(category) => category.minutes(),
            },
            heart_rate: raw.heart_rate,
        }
    }
}

/// Mood in either encoding.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawMood {
    Scale(u8),
    Category(MoodBand),
}

/// Activity in either encoding.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawActivity {
    Minutes(u32),
    Category(ActivityCategory),
}

/// Categorical activity values of the legacy encoding.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ActivityCategory {
    Nenhuma,
    Sedentaria,
    Leve,
    Moderada,
    Intensa,
}

impl ActivityCategory {
    /// Canonical minutes for a categorical report.
    fn minutes(&self) -> u32 {
        match self {
            ActivityCategory::Nenhuma => 0,
            ActivityCategory::Sedentaria => 10,
            ActivityCategory::Leve => 20,
            ActivityCategory::Moderada => 40,
            ActivityCategory::Intensa => 60,
        }
    }
}

/// Mood band, doubling as the legacy categorical encoding on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodBand {
    Positivo,
    Neutro,
    Negativo,
}

impl MoodBand {
    /// Band for a 0-10 mood value.
    ///
    /// # Thresholds
    ///
    /// - `positivo`: mood >= 7
    /// - `neutro`: 5 <= mood < 7
    /// - `negativo`: mood < 5
    pub fn from_scale(mood: u8) -> Self {
        if mood >= 7 {
            MoodBand::Positivo
        } else if mood >= 5 {
            MoodBand::Neutro
        } else {
            MoodBand::Negativo
        }
    }

    /// Canonical 0-10 value for a categorical report.
    ///
    /// Each value maps back to its own band through [`MoodBand::from_scale`].
    pub fn representative_scale(&self) -> u8 {
        match self {
            MoodBand::Positivo => 8,
            MoodBand::Neutro => 5,
            MoodBand::Negativo => 2,
        }
    }
}

/// Sleep classification for the latest sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SleepIndicator {
    Adequado,
    Insuficiente,
}

/// Activity classification for the latest sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityIndicator {
    Ativo,
    Sedentario,
}

/// Heart-rate classification for the latest sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeartRateIndicator {
    Normal,
    Anormal,
}

/// Risk level attached to analyses and recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Baixo,
    Moderado,
    Alto,
}

/// Distribution of analyses over risk levels.
///
/// Plain non-negative weights. The upstream does not guarantee they sum
/// to 100, so callers must not assume normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskStats {
    #[serde(rename = "baixo")]
    pub low: f64,

    #[serde(rename = "moderado")]
    pub moderate: f64,

    #[serde(rename = "alto")]
    pub high: f64,
}

/// One emotional-analysis result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub id: i64,

    #[serde(rename = "data")]
    pub date: String,

    #[serde(rename = "risco")]
    pub risk: RiskLevel,

    #[serde(rename = "descricao")]
    pub description: String,
}

/// One generated recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: i64,

    #[serde(rename = "recomendacao")]
    pub text: String,

    #[serde(rename = "tipo")]
    pub risk: RiskLevel,
}

/// Lifecycle state of a background monitoring agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentState {
    Ativo,
    Inativo,
}

/// One background monitoring agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentStatus {
    /// Display name of the agent.
    pub name: String,

    /// Current lifecycle state.
    pub status: AgentState,

    /// Free-text description of the agent's cadence.
    pub description: String,
}

/// Payload of the agent-status resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentsStatus {
    pub agents: Vec<AgentStatus>,

    /// Unix timestamp in milliseconds.
    pub timestamp: i64,
}
