use crate::error::{CropAdvisorError, Result};
use crate::models::{
    CropEconomics, EconomicsEntry, ReferenceData, DEFAULT_ECONOMICS, DEFAULT_FALLBACK_COUNT,
    DEFAULT_FALLBACK_CROPS, DEFAULT_FALLBACK_SCORE, DEFAULT_TOP_K, DEFAULT_WATER_EFFICIENT_CROPS,
    MAX_RECOMMENDATIONS,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub economics: EconomicsConfig,
    #[serde(default)]
    pub sustainability: SustainabilityConfig,
    #[serde(default)]
    pub recommendations: RecommendationsConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EconomicsConfig {
    /// Used for crops missing from the table
    #[serde(default = "default_economics")]
    pub default: EconomicsEntry,
    /// Merged over the built-in table; a listed crop replaces its built-in entry
    #[serde(default)]
    pub crops: BTreeMap<String, EconomicsEntry>,
}

fn default_economics() -> EconomicsEntry {
    DEFAULT_ECONOMICS
}

impl Default for EconomicsConfig {
    fn default() -> Self {
        Self {
            default: DEFAULT_ECONOMICS,
            crops: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SustainabilityConfig {
    #[serde(default = "default_water_efficient_crops")]
    pub water_efficient_crops: Vec<String>,
}

fn default_water_efficient_crops() -> Vec<String> {
    DEFAULT_WATER_EFFICIENT_CROPS
        .iter()
        .map(|c| c.to_string())
        .collect()
}

impl Default for SustainabilityConfig {
    fn default() -> Self {
        Self {
            water_efficient_crops: default_water_efficient_crops(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RecommendationsConfig {
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    #[serde(default = "default_fallback_crops")]
    pub fallback_crops: Vec<String>,
    #[serde(default = "default_fallback_count")]
    pub fallback_count: usize,
    #[serde(default = "default_fallback_score")]
    pub fallback_score: f64,
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

fn default_fallback_crops() -> Vec<String> {
    DEFAULT_FALLBACK_CROPS.iter().map(|c| c.to_string()).collect()
}

fn default_fallback_count() -> usize {
    DEFAULT_FALLBACK_COUNT
}

fn default_fallback_score() -> f64 {
    DEFAULT_FALLBACK_SCORE
}

impl Default for RecommendationsConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            fallback_crops: default_fallback_crops(),
            fallback_count: DEFAULT_FALLBACK_COUNT,
            fallback_score: DEFAULT_FALLBACK_SCORE,
        }
    }
}

impl Config {
    /// Load configuration from an explicit path or the standard locations.
    ///
    /// An explicit path must exist. Without one, a missing file means the
    /// built-in defaults.
    pub fn load(config_override: Option<&Path>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => {
                if !p.exists() {
                    return Err(CropAdvisorError::Config(format!(
                        "Config file not found at {:?}",
                        p
                    )));
                }
                p.to_path_buf()
            }
            None => match Self::find_config_path() {
                Some(p) => p,
                None => {
                    tracing::debug!("No config file found - using built-in reference data");
                    return Ok(Self::default());
                }
            },
        };

        tracing::info!("Loading configuration from {}", config_path.display());

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| CropAdvisorError::Config(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&config_str)
    }

    /// Parse YAML after substituting `${VAR}` references from the environment.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content)?;

        serde_yaml::from_str(&content)
            .map_err(|e| CropAdvisorError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Search for a config file in standard locations.
    fn find_config_path() -> Option<PathBuf> {
        // Try current directory first
        let local_config = PathBuf::from("config/cropadvisor.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        dirs::config_dir()
            .map(|dir| dir.join("cropadvisor").join("config.yaml"))
            .filter(|p| p.exists())
    }

    /// Default path for writing new config files (~/.config/cropadvisor/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CropAdvisorError::Config("Cannot determine config directory".into()))?
            .join("cropadvisor");
        Ok(config_dir.join("config.yaml"))
    }

    /// Write this configuration as YAML, creating parent directories.
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(self)
            .map_err(|e| CropAdvisorError::Config(format!("Failed to serialize config: {}", e)))?;

        let content = format!(
            "# cropadvisor configuration\n# Generated by `cropadvisor init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(path, content)?;
        Ok(())
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        let mut result = content.to_string();

        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| CropAdvisorError::Config(format!("Invalid substitution pattern: {}", e)))?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        Ok(result)
    }

    /// Validate and build the immutable reference data shared by the engine.
    pub fn reference_data(&self) -> Result<ReferenceData> {
        let rec = &self.recommendations;

        if !(1..=MAX_RECOMMENDATIONS).contains(&rec.top_k) {
            return Err(CropAdvisorError::Config(format!(
                "recommendations.top_k must be between 1 and {}, got {}",
                MAX_RECOMMENDATIONS, rec.top_k
            )));
        }
        if !(1..=MAX_RECOMMENDATIONS).contains(&rec.fallback_count) {
            return Err(CropAdvisorError::Config(format!(
                "recommendations.fallback_count must be between 1 and {}, got {}",
                MAX_RECOMMENDATIONS, rec.fallback_count
            )));
        }
        if rec.fallback_crops.is_empty() {
            return Err(CropAdvisorError::Config(
                "recommendations.fallback_crops must not be empty".into(),
            ));
        }
        if !(0.0..=1.0).contains(&rec.fallback_score) {
            return Err(CropAdvisorError::Config(format!(
                "recommendations.fallback_score must be within [0, 1], got {}",
                rec.fallback_score
            )));
        }
        if !self.economics.default.is_valid() {
            return Err(CropAdvisorError::Config(
                "economics.default must be finite and non-negative".into(),
            ));
        }

        let mut economics = CropEconomics::new(self.economics.default);
        for (crop, entry) in CropEconomics::builtin().iter() {
            economics.insert(crop, *entry);
        }
        for (crop, entry) in &self.economics.crops {
            if !entry.is_valid() {
                return Err(CropAdvisorError::Config(format!(
                    "economics for '{}' must be finite and non-negative",
                    crop
                )));
            }
            economics.insert(crop, *entry);
        }

        let mut reference = ReferenceData::new(
            economics,
            &self.sustainability.water_efficient_crops,
            &rec.fallback_crops,
        );
        reference.top_k = rec.top_k;
        reference.fallback_count = rec.fallback_count;
        reference.fallback_score = rec.fallback_score;

        Ok(reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_builtin_reference() {
        let reference = Config::default().reference_data().unwrap();
        assert_eq!(reference, ReferenceData::default());
    }

    #[test]
    fn empty_yaml_uses_defaults() {
        let config = Config::from_yaml("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_yaml_merges_crops() {
        let yaml = r#"
economics:
  crops:
    Barley:
      base_yield_t_per_ha: 3.2
      price_per_ton: 17000
      cost_per_ha: 38000
    wheat:
      base_yield_t_per_ha: 3.8
      price_per_ton: 21000
      cost_per_ha: 41000
recommendations:
  fallback_score: 0.6
"#;
        let config = Config::from_yaml(yaml).unwrap();
        let reference = config.reference_data().unwrap();

        assert_eq!(reference.economics.len(), 9);
        assert_eq!(
            *reference.economics.lookup("barley"),
            EconomicsEntry::new(3.2, 17000.0, 38000.0)
        );
        assert_eq!(reference.economics.lookup("wheat").price_per_ton, 21000.0);
        assert_eq!(reference.economics.lookup("rice").price_per_ton, 18000.0);
        assert_eq!(reference.fallback_score, 0.6);
        assert_eq!(reference.top_k, DEFAULT_TOP_K);
    }

    #[test]
    fn custom_default_entry_applies_to_unknown_crops() {
        let yaml = r#"
economics:
  default:
    base_yield_t_per_ha: 2.0
    price_per_ton: 10000
    cost_per_ha: 30000
"#;
        let reference = Config::from_yaml(yaml).unwrap().reference_data().unwrap();
        assert_eq!(
            *reference.economics.lookup("quinoa"),
            EconomicsEntry::new(2.0, 10000.0, 30000.0)
        );
        assert_eq!(reference.economics.len(), 8);
    }

    #[test]
    fn invalid_values_rejected() {
        let mut config = Config::default();
        config.recommendations.fallback_score = 1.5;
        assert!(matches!(
            config.reference_data(),
            Err(CropAdvisorError::Config(_))
        ));

        let mut config = Config::default();
        config.recommendations.top_k = 0;
        assert!(config.reference_data().is_err());

        let mut config = Config::default();
        config.recommendations.fallback_crops.clear();
        assert!(config.reference_data().is_err());

        let mut config = Config::default();
        config
            .economics
            .crops
            .insert("rice".into(), EconomicsEntry::new(4.0, -1.0, 50000.0));
        assert!(config.reference_data().is_err());
    }

    #[test]
    fn counts_above_three_rejected() {
        let mut config = Config::default();
        config.recommendations.top_k = 10;
        assert!(matches!(
            config.reference_data(),
            Err(CropAdvisorError::Config(_))
        ));

        let mut config = Config::default();
        config.recommendations.fallback_count = 5;
        assert!(matches!(
            config.reference_data(),
            Err(CropAdvisorError::Config(_))
        ));

        let mut config = Config::default();
        config.recommendations.top_k = 2;
        config.recommendations.fallback_count = 1;
        let reference = config.reference_data().unwrap();
        assert_eq!(reference.top_k, 2);
        assert_eq!(reference.fallback_candidates(), ["wheat"]);
    }

    #[test]
    fn malformed_yaml_is_config_error() {
        assert!(matches!(
            Config::from_yaml("recommendations: [1, 2"),
            Err(CropAdvisorError::Config(_))
        ));
    }

    #[test]
    fn env_vars_substituted() {
        std::env::set_var("CROPADVISOR_TEST_FALLBACK_SCORE", "0.55");
        let config =
            Config::from_yaml("recommendations:\n  fallback_score: ${CROPADVISOR_TEST_FALLBACK_SCORE}\n")
                .unwrap();
        assert_eq!(config.recommendations.fallback_score, 0.55);
    }

    #[test]
    fn missing_explicit_path_is_error() {
        let missing = Path::new("/nonexistent/cropadvisor/config.yaml");
        assert!(matches!(
            Config::load(Some(missing)),
            Err(CropAdvisorError::Config(_))
        ));
    }

    #[test]
    fn write_then_load() {
        let dir = std::env::temp_dir().join(format!("cropadvisor-test-{}", std::process::id()));
        let path = dir.join("config.yaml");

        let mut config = Config::default();
        config.recommendations.fallback_count = 2;
        config.write(&path).unwrap();

        let loaded = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(loaded, config);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
