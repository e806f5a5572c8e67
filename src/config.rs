use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::{FactorWeights, MatchOptions};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    #[serde(default = "default_min_score")]
    pub default_min_score: f64,
    #[serde(default)]
    pub include_inactive: bool,
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            default_min_score: default_min_score(),
            include_inactive: false,
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

fn default_limit() -> usize { 50 }
fn default_min_score() -> f64 { 20.0 }
fn default_parallel_threshold() -> usize { 256 }

impl From<&MatchingSettings> for MatchOptions {
    fn from(settings: &MatchingSettings) -> Self {
        Self {
            limit: settings.default_limit,
            include_inactive_providers: settings.include_inactive,
            min_score: settings.default_min_score,
            as_of: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_semantic_weight")]
    pub semantic: f64,
    #[serde(default = "default_stage_weight")]
    pub stage: f64,
    #[serde(default = "default_economic_weight")]
    pub economic: f64,
    #[serde(default = "default_geographic_weight")]
    pub geographic: f64,
    #[serde(default = "default_behavior_weight")]
    pub behavior: f64,
    #[serde(default = "default_investor_type_weight")]
    pub investor_type: f64,
    #[serde(default = "default_network_weight")]
    pub network: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            semantic: default_semantic_weight(),
            stage: default_stage_weight(),
            economic: default_economic_weight(),
            geographic: default_geographic_weight(),
            behavior: default_behavior_weight(),
            investor_type: default_investor_type_weight(),
            network: default_network_weight(),
        }
    }
}

fn default_semantic_weight() -> f64 { 0.35 }
fn default_stage_weight() -> f64 { 0.20 }
fn default_economic_weight() -> f64 { 0.15 }
fn default_geographic_weight() -> f64 { 0.10 }
fn default_behavior_weight() -> f64 { 0.10 }
fn default_investor_type_weight() -> f64 { 0.05 }
fn default_network_weight() -> f64 { 0.05 }

impl From<&WeightsConfig> for FactorWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            semantic: config.semantic,
            stage: config.stage,
            economic: config.economic,
            geographic: config.geographic,
            behavior: config.behavior,
            investor_type: config.investor_type,
            network: config.network,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

fn environment() -> Environment {
    // e.g., CAPMATCH__MATCHING__DEFAULT_LIMIT -> matching.default_limit
    Environment::with_prefix("CAPMATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration files (config/default, config/local)
    /// 3. Environment variables (prefixed with CAPMATCH__), after `.env`
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            // Local overrides for development
            .add_source(File::with_name("config/local").required(false))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    pub fn factor_weights(&self) -> FactorWeights {
        FactorWeights::from(&self.scoring.weights)
    }

    /// Run options used when a caller does not pass its own
    pub fn default_options(&self) -> MatchOptions {
        MatchOptions::from(&self.matching)
    }
}
