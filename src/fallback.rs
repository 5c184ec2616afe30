//! Fixed example dataset served when the upstream API is unavailable.
//!
//! All records in this module are hardcoded and fictional. They stand in
//! for live monitoring data whenever a fetch fails, so the presentation
//! layer always has something renderable. The values are deterministic:
//! tests compare accessor results against these constructors directly.

use crate::model::{
    AgentState, AgentStatus, AgentsStatus, Analysis, HealthSample, Patient, Recommendation,
    RiskLevel, RiskStats, Sex,
};

/// The two example patients.
pub fn patients() -> Vec<Patient> {
    vec![
        Patient {
            id: 1,
            name: "João Silva".to_string(),
            age: 70,
            sex: Sex::Male,
        },
        Patient {
            id: 2,
            name: "Maria Oliveira".to_string(),
            age: 75,
            sex: Sex::Female,
        },
    ]
}

/// Seven days of example samples, 2024-01-01 through 2024-01-07.
pub fn health_series() -> Vec<HealthSample> {
    fn sample(date: &str, sleep: f64, mood: u8, activity: u32, heart_rate: u32) -> HealthSample {
        HealthSample {
            date: date.to_string(),
            sleep_hours: sleep,
            mood,
            activity_minutes: activity,
            heart_rate,
        }
    }

    vec![
        sample("2024-01-01", 7.5, 8, 45, 72),
        sample("2024-01-02", 6.8, 6, 30, 78),
        sample("2024-01-03", 8.2, 9, 60, 70),
        sample("2024-01-04", 5.5, 4, 15, 85),
        sample("2024-01-05", 7.0, 7, 40, 75),
        sample("2024-01-06", 8.5, 9, 55, 68),
        sample("2024-01-07", 6.2, 5, 25, 82),
    ]
}

/// The most recent sample of the example series.
pub fn latest_sample() -> HealthSample {
    HealthSample {
        date: "2024-01-07".to_string(),
        sleep_hours: 6.2,
        mood: 5,
        activity_minutes: 25,
        heart_rate: 82,
    }
}

/// Example risk split.
pub fn risk_stats() -> RiskStats {
    RiskStats {
        low: 60.0,
        moderate: 30.0,
        high: 10.0,
    }
}

/// Four example analyses covering every risk level.
pub fn analyses() -> Vec<Analysis> {
    vec![
        Analysis {
            id: 1,
            date: "2024-01-07".to_string(),
            risk: RiskLevel::Moderado,
            description: "Sono insuficiente e humor baixo detectados".to_string(),
        },
        Analysis {
            id: 2,
            date: "2024-01-06".to_string(),
            risk: RiskLevel::Baixo,
            description: "Indicadores dentro da normalidade".to_string(),
        },
        Analysis {
            id: 3,
            date: "2024-01-05".to_string(),
            risk: RiskLevel::Baixo,
            description: "Bom padrão de sono e atividade".to_string(),
        },
        Analysis {
            id: 4,
            date: "2024-01-04".to_string(),
            risk: RiskLevel::Alto,
            description: "Múltiplos indicadores de risco detectados".to_string(),
        },
    ]
}

/// Four example recommendations covering every risk level.
pub fn recommendations() -> Vec<Recommendation> {
    vec![
        Recommendation {
            id: 1,
            text: "Pratique exercícios de respiração por 10 minutos".to_string(),
            risk: RiskLevel::Moderado,
        },
        Recommendation {
            id: 2,
            text: "Faça uma caminhada de 15-20 minutos".to_string(),
            risk: RiskLevel::Moderado,
        },
        Recommendation {
            id: 3,
            text: "Continue mantendo sua rotina saudável".to_string(),
            risk: RiskLevel::Baixo,
        },
        Recommendation {
            id: 4,
            text: "Entre em contato com um familiar ou cuidador".to_string(),
            risk: RiskLevel::Alto,
        },
    ]
}

/// The three monitoring agents, all active.
///
/// Takes the timestamp as an argument so the fallback stays deterministic
/// under test; the accessor stamps the current time at resolution.
pub fn agents_status(timestamp: i64) -> AgentsStatus {
    fn agent(name: &str, description: &str) -> AgentStatus {
        AgentStatus {
            name: name.to_string(),
            status: AgentState::Ativo,
            description: description.to_string(),
        }
    }

    AgentsStatus {
        agents: vec![
            agent("Agente de Coleta", "Coletando dados a cada 10s"),
            agent("Agente Analisador", "Analisando a cada 15s"),
            agent("Agente de Recomendação", "Gerando sugestões a cada 20s"),
        ],
        timestamp,
    }
}
