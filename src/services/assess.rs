use crate::domain::models::{AssessReport, RiskFactor};
use crate::services::config::{simulate_delay, Config};
use crate::services::rating;
use crate::services::storage::now_secs;

pub fn run_assessment(config: &Config) -> AssessReport {
    simulate_delay(config.simulation.assess_delay_ms);

    let threat_level = rating::random_threat_level();
    AssessReport {
        threat_level,
        status: rating::threat_status(threat_level).to_string(),
        last_updated: now_secs(),
        factors: risk_factors(),
    }
}

fn risk_factors() -> Vec<RiskFactor> {
    [
        ("time", "Time of Day", "Daytime (Lower Risk)", 15u8),
        ("location", "Location", "Residential Area", 25),
        ("environment", "Environment", "Well-lit Area", 10),
    ]
    .into_iter()
    .map(|(id, label, value, score)| RiskFactor {
        id: id.to_string(),
        label: label.to_string(),
        value: value.to_string(),
        score,
    })
    .collect()
}
