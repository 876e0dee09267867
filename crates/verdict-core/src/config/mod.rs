//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `VERDICT_*` environment
//! variables; the CLI layers its flags on top of these.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::time::Duration;

use crate::dispatch::MAX_CONCURRENCY;

/// Default judge model handed to the genai client. Provider credentials are
/// resolved by genai's own environment conventions (e.g. `OPENAI_API_KEY`).
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default worker-pool size.
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Default per-request guard timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 600;

/// Default judge system prompt.
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a meticulous grader of retrieval-augmented answers.";

/// Toolkit configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `VERDICT_*` overrides on top of defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Judge model name. Default: `gpt-4o-mini`.
    pub model: String,

    /// Worker-pool size for scoring runs. Default: `8`.
    pub concurrency: usize,

    /// System prompt sent with every judge request.
    pub system_prompt: String,

    /// Per-request guard timeout. Default: 600 seconds.
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            concurrency: DEFAULT_CONCURRENCY,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    const ENV_MODEL: &'static str = "VERDICT_MODEL";
    const ENV_CONCURRENCY: &'static str = "VERDICT_CONCURRENCY";
    const ENV_SYSTEM_PROMPT: &'static str = "VERDICT_SYSTEM_PROMPT";
    const ENV_TIMEOUT_SECS: &'static str = "VERDICT_TIMEOUT_SECS";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let model = Self::parse_string_from_env(Self::ENV_MODEL, defaults.model);
        let concurrency = Self::parse_concurrency_from_env(defaults.concurrency)?;
        let system_prompt =
            Self::parse_string_from_env(Self::ENV_SYSTEM_PROMPT, defaults.system_prompt);
        let timeout = Self::parse_timeout_from_env(defaults.timeout)?;

        Ok(Self {
            model,
            concurrency,
            system_prompt,
            timeout,
        })
    }

    /// Validates basic invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.concurrency == 0 || self.concurrency > MAX_CONCURRENCY {
            return Err(ConfigError::InvalidConcurrency {
                value: self.concurrency.to_string(),
            });
        }

        if self.timeout < Duration::from_secs(1) {
            return Err(ConfigError::InvalidTimeout {
                value: self.timeout.as_secs().to_string(),
            });
        }

        Ok(())
    }

    fn parse_concurrency_from_env(default: usize) -> Result<usize, ConfigError> {
        match env::var(Self::ENV_CONCURRENCY) {
            Ok(value) => {
                let concurrency: usize =
                    value
                        .parse()
                        .map_err(|e| ConfigError::ConcurrencyParseError {
                            value: value.clone(),
                            source: e,
                        })?;

                if concurrency == 0 || concurrency > MAX_CONCURRENCY {
                    return Err(ConfigError::InvalidConcurrency { value });
                }

                Ok(concurrency)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_timeout_from_env(default: Duration) -> Result<Duration, ConfigError> {
        match env::var(Self::ENV_TIMEOUT_SECS) {
            Ok(value) => {
                let secs: u64 = value.parse().map_err(|e| ConfigError::TimeoutParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if secs == 0 {
                    return Err(ConfigError::InvalidTimeout { value });
                }

                Ok(Duration::from_secs(secs))
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(default)
    }
}
