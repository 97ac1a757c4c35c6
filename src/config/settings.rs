use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub wizard: WizardConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WizardConfig {
    /// Number of title suggestions shown
    #[serde(default = "default_suggestion_count")]
    pub suggestion_count: usize,
    /// Simulated suggestion latency in milliseconds
    #[serde(default = "default_delay_ms")]
    pub generation_delay_ms: u64,
    /// Simulated enhancement latency in milliseconds
    #[serde(default = "default_delay_ms")]
    pub enhance_delay_ms: u64,
    /// Fixed seed for fallback ordering (random when unset)
    #[serde(default)]
    pub rng_seed: Option<u64>,
    /// Suggestion backend name
    #[serde(default = "default_backend")]
    pub backend: String,
    /// Category name the wizard opens with
    #[serde(default = "default_category")]
    pub default_category: String,
}

fn default_suggestion_count() -> usize {
    3
}

fn default_delay_ms() -> u64 {
    1500 // 1.5 seconds
}

fn default_backend() -> String {
    "mock".to_string()
}

fn default_category() -> String {
    "Vacation".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Default filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,
    /// "pretty" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            // Start with default values
            .set_default("wizard.suggestion_count", 3)?
            .set_default("wizard.generation_delay_ms", 1500)?
            .set_default("wizard.enhance_delay_ms", 1500)?
            .set_default("wizard.backend", "mock")?
            .set_default("wizard.default_category", "Vacation")?
            .set_default("log.level", "info")?
            .set_default("log.format", "pretty")?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Load from environment variables
            // WIZARD__SUGGESTION_COUNT, WIZARD__RNG_SEED, LOG__LEVEL, etc.
            .add_source(
                Environment::default()
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            suggestion_count: default_suggestion_count(),
            generation_delay_ms: default_delay_ms(),
            enhance_delay_ms: default_delay_ms(),
            rng_seed: None,
            backend: default_backend(),
            default_category: default_category(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}
