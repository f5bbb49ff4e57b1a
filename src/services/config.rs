use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub map: MapConfig,
    pub simulation: SimulationConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub default_lat: f64,
    pub default_lon: f64,
    pub default_zoom: u8,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_lat: 37.7749,
            default_lon: -122.4194,
            default_zoom: 13,
        }
    }
}

/// Durations for the delays that stand in for network calls.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub search_delay_ms: u64,
    pub login_delay_ms: u64,
    pub assess_delay_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            search_delay_ms: 1000,
            login_delay_ms: 1500,
            assess_delay_ms: 3000,
        }
    }
}

fn config_file_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/safepath/config.toml"))
}

pub fn load_config() -> anyhow::Result<Config> {
    let path = config_file_path()?;
    if !path.exists() {
        return Ok(Config::default());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

pub fn simulate_delay(ms: u64) {
    if ms > 0 {
        std::thread::sleep(std::time::Duration::from_millis(ms));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_demo_timings() {
        let cfg = Config::default();
        assert_eq!(cfg.simulation.search_delay_ms, 1000);
        assert_eq!(cfg.simulation.login_delay_ms, 1500);
        assert_eq!(cfg.simulation.assess_delay_ms, 3000);
        assert_eq!(cfg.map.default_zoom, 13);
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let cfg: Config = toml::from_str("[simulation]\nsearch_delay_ms = 0\n").expect("parse");
        assert_eq!(cfg.simulation.search_delay_ms, 0);
        assert_eq!(cfg.simulation.login_delay_ms, 1500);
        assert_eq!(cfg.map.default_lat, 37.7749);
    }
}
