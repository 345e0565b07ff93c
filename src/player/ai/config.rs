use anyhow::Context;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "ai_config.json";

static CONFIG: OnceCell<AIConfig> = OnceCell::new();

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AIConfig {
    pub version: String,
    pub evaluation: HeuristicWeights,
    pub search: SearchConfig,
}

/// Multipliers applied to the five heuristic signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeuristicWeights {
    pub tiles: i64,
    pub corners: i64,
    pub proximity: i64,
    pub mobility: i64,
    pub positional: i64,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        HeuristicWeights {
            tiles: 10,
            corners: 801_724,
            proximity: 382_026,
            mobility: 78_922,
            positional: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SearchConfig {
    pub depth: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig { depth: 3 }
    }
}

impl Default for AIConfig {
    fn default() -> Self {
        AIConfig {
            version: "1.0".to_string(),
            evaluation: HeuristicWeights::default(),
            search: SearchConfig::default(),
        }
    }
}

impl AIConfig {
    pub fn load_from<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("reading AI config {}", path.display()))?;
        let config: AIConfig = serde_json::from_str(&config_str)
            .with_context(|| format!("parsing AI config {}", path.display()))?;
        anyhow::ensure!(config.search.depth > 0, "search depth must be positive");
        Ok(config)
    }

    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                tracing::debug!("using default AI config: {:#}", e);
                Self::default()
            }
        }
    }

    /// Installs the process-wide config. Only the first call wins.
    pub fn init(config: AIConfig) -> bool {
        CONFIG.set(config).is_ok()
    }

    /// The installed config, falling back to `ai_config.json` or the defaults.
    pub fn get() -> &'static AIConfig {
        CONFIG.get_or_init(Self::load_or_default)
    }
}
