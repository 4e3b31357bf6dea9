use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoutError};
use crate::pipeline::SortKey;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig::default(),
            search: SearchConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration in precedence order: an explicit `--config` path,
    /// then `$SCOUT_CONFIG`, then the global config file, then defaults.
    /// `SCOUT_*` environment overrides are applied last.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("SCOUT_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else if let Some(global) = Self::load_global()? {
            config.merge_patch(global);
        }

        config.apply_env_overrides()?;

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        match dirs::config_dir() {
            Some(base) => Self::load_patch(&base.join("scout/config.toml")),
            None => Ok(None),
        }
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| ScoutError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| ScoutError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.extraction {
            self.extraction.merge(patch);
        }
        if let Some(patch) = patch.search {
            self.search.merge(patch);
        }
        if let Some(patch) = patch.ui {
            self.ui.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(value) = env_u64("SCOUT_EXTRACTION_LATENCY_MS")? {
            self.extraction.latency_ms = value;
        }
        if let Some(value) = env_usize("SCOUT_EXTRACTION_MAX_KEYWORDS")? {
            self.extraction.max_keywords = value;
        }
        if let Some(value) = env_u64("SCOUT_SEARCH_POPULATE_LATENCY_MS")? {
            self.search.populate_latency_ms = value;
        }
        if let Some(value) = env_string("SCOUT_UI_DEFAULT_SORT") {
            self.ui.default_sort = value;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    pub latency_ms: u64,
    pub max_keywords: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            latency_ms: 1500,
            max_keywords: 12,
        }
    }
}

impl ExtractionConfig {
    pub const fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    fn merge(&mut self, patch: ExtractionPatch) {
        if let Some(value) = patch.latency_ms {
            self.latency_ms = value;
        }
        if let Some(value) = patch.max_keywords {
            self.max_keywords = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    pub populate_latency_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            populate_latency_ms: 1000,
        }
    }
}

impl SearchConfig {
    pub const fn populate_latency(&self) -> Duration {
        Duration::from_millis(self.populate_latency_ms)
    }

    fn merge(&mut self, patch: SearchPatch) {
        if let Some(value) = patch.populate_latency_ms {
            self.populate_latency_ms = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    pub default_sort: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_sort: "match_score".to_string(),
        }
    }
}

impl UiConfig {
    pub fn sort_key(&self) -> SortKey {
        SortKey::from(self.default_sort.as_str())
    }

    fn merge(&mut self, patch: UiPatch) {
        if let Some(value) = patch.default_sort {
            self.default_sort = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub extraction: Option<ExtractionPatch>,
    pub search: Option<SearchPatch>,
    pub ui: Option<UiPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ExtractionPatch {
    pub latency_ms: Option<u64>,
    pub max_keywords: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SearchPatch {
    pub populate_latency_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct UiPatch {
    pub default_sort: Option<String>,
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn env_u64(key: &str) -> Result<Option<u64>> {
    match std::env::var(key) {
        Ok(value) => value
            .parse::<u64>()
            .map(Some)
            .map_err(|err| ScoutError::Config(format!("invalid {key} value {value}: {err}"))),
        Err(_) => Ok(None),
    }
}

fn env_usize(key: &str) -> Result<Option<usize>> {
    match std::env::var(key) {
        Ok(value) => value
            .parse::<usize>()
            .map(Some)
            .map_err(|err| ScoutError::Config(format!("invalid {key} value {value}: {err}"))),
        Err(_) => Ok(None),
    }
}
