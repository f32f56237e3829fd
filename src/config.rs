use crate::error::DemoError;
use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides, e.g. `SQLI_DEMO_INJECTION_SEED=7`.
pub const ENV_PREFIX: &str = "SQLI_DEMO_";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub loglevel: String,
    pub database_url: String,
    pub injection_attempts: usize,
    pub injection_seed: Option<u64>,
    pub report_format: ReportFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            loglevel: "info".to_string(),
            database_url: "sqlite::memory:".to_string(),
            injection_attempts: 5,
            injection_seed: None,
            report_format: ReportFormat::Text,
        }
    }
}

impl Config {
    /// Defaults overlaid with `SQLI_DEMO_*` environment variables.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn from_env() -> Result<Self, DemoError> {
        Self::from_figment(Self::figment())
    }

    pub fn from_figment(figment: Figment) -> Result<Self, DemoError> {
        Ok(figment.extract()?)
    }
}
