//! Layered configuration: TOML file, environment overrides, serde defaults
//!
//! Every field has a default so an empty config file (or none at all) yields
//! a runnable configuration; only the API key has to come from somewhere
//! (`[youtube] api_key` or the `YOUTUBE_API_KEY` environment variable).

use crate::error::Result;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub youtube: YouTubeConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct YouTubeConfig {
    /// API key; falls back to the `YOUTUBE_API_KEY` env var when empty
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Fixed delay between paginated API requests
    #[serde(default = "default_page_delay_ms")]
    pub page_delay_ms: u64,
    #[serde(default = "default_query")]
    pub default_query: String,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    /// Where the trained artifact lives; `~` expands
    #[serde(default = "default_artifact_path")]
    pub artifact_path: String,
    #[serde(default = "default_test_fraction")]
    pub test_fraction: f64,
    #[serde(default = "default_split_seed")]
    pub split_seed: u64,
}

fn default_base_url() -> String {
    "https://www.googleapis.com/youtube/v3".to_string()
}

fn default_page_delay_ms() -> u64 {
    1000
}

fn default_query() -> String {
    "coding tutorial".to_string()
}

fn default_max_results() -> usize {
    50
}

fn default_artifact_path() -> String {
    "outputs/models/best_model.json".to_string()
}

fn default_test_fraction() -> f64 {
    crate::cleaner::DEFAULT_TEST_FRACTION
}

fn default_split_seed() -> u64 {
    crate::cleaner::DEFAULT_SPLIT_SEED
}

impl Default for YouTubeConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            page_delay_ms: default_page_delay_ms(),
            default_query: default_query(),
            max_results: default_max_results(),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            artifact_path: default_artifact_path(),
            test_fraction: default_test_fraction(),
            split_seed: default_split_seed(),
        }
    }
}

impl Config {
    /// Load from a TOML file (optional) with `YT_PREDICTOR_*` environment
    /// overrides layered on top.
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("YT_PREDICTOR")
                    .separator("__"),
            )
            .build()?;

        let mut cfg: Config = settings.try_deserialize()?;
        if cfg.youtube.api_key.is_empty() {
            if let Ok(key) = std::env::var("YOUTUBE_API_KEY") {
                cfg.youtube.api_key = key;
            }
        }
        Ok(cfg)
    }

    /// Artifact path with `~` expanded
    pub fn artifact_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.pipeline.artifact_path).into_owned())
    }
}
