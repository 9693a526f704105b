//! Configuration loading and validation for the CLI.
//!
//! Values are read from `PETUNIA_*` environment variables. Command-line flags
//! take precedence where both exist.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Validated CLI configuration.
#[derive(Clone, Deserialize)]
pub struct Config {
    /// Tracing log level (e.g. `"info"`, `"debug"`).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Base64 key used when `--key` is not given.
    #[serde(default)]
    pub key: Option<String>,
}

fn default_log_level() -> String {
    "info".into()
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("log_level", &self.log_level)
            .field("key", &self.key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Config {
    /// Load and validate configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or fails validation.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::with_prefix("PETUNIA"))
            .build()
            .context("failed to build configuration from environment")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise configuration")?;

        c.validate()?;
        Ok(c)
    }

    fn validate(&self) -> Result<()> {
        if self.log_level.trim().is_empty() {
            anyhow::bail!("PETUNIA_LOG_LEVEL must not be empty");
        }
        if let Some(key) = &self.key {
            if key.trim().is_empty() {
                anyhow::bail!("PETUNIA_KEY must not be empty when set");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(key: Option<&str>) -> Config {
        Config {
            log_level: default_log_level(),
            key: key.map(str::to_owned),
        }
    }

    #[test]
    fn defaults() {
        assert_eq!(default_log_level(), "info");
    }

    #[test]
    fn validate_accepts_missing_key() {
        assert!(cfg(None).validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_key() {
        assert!(cfg(Some("  ")).validate().is_err());
    }

    #[test]
    fn validate_rejects_blank_log_level() {
        let mut c = cfg(None);
        c.log_level = String::new();
        assert!(c.validate().is_err());
    }

    #[test]
    fn debug_redacts_key() {
        let out = format!("{:?}", cfg(Some("X1IJ2SFW0oJVcGmmXqTt6Bh1NfD+uf40bkmWW/G8VLs=")));
        assert!(out.contains("REDACTED"));
        assert!(!out.contains("X1IJ"));
    }
}
