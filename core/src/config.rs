use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Upper bound on the requested week count.
    #[serde(default = "default_max_weeks")]
    pub max_weeks: u32,
    /// Minimum post-absence headcount on a weekday: enough to cover chat,
    /// on-call and appointments.
    #[serde(default = "default_weekday_min")]
    pub weekday_min_headcount: usize,
    /// Minimum post-absence headcount on a weekend day.
    #[serde(default = "default_weekend_min")]
    pub weekend_min_headcount: usize,
}

fn default_max_weeks() -> u32 { 52 }
fn default_weekday_min() -> usize { 3 }
fn default_weekend_min() -> usize { 1 }

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_weeks:             default_max_weeks(),
            weekday_min_headcount: default_weekday_min(),
            weekend_min_headcount: default_weekend_min(),
        }
    }
}

impl EngineConfig {
    /// Load overrides from a JSON file. Missing keys fall back to defaults.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read engine config {path}: {e}"))?;
        let config: EngineConfig = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse engine config {path}: {e}"))?;
        Ok(config)
    }
}
