//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the pay
//! policy from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{PayPolicy, PolicyConfig, PolicyMetadata};

/// Name of the policy file inside a configuration directory.
pub const POLICY_FILE: &str = "policy.yaml";

/// Loads and provides access to the pay policy.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── policy.yaml   # Policy metadata, tax rate and overtime multiplier
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Tax rate: {}", loader.policy().tax_rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PolicyConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `policy.yaml` is missing, is not valid YAML, lacks
    /// a required field, or carries out-of-range rates.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let policy_path = path.as_ref().join(POLICY_FILE);
        let config = Self::load_yaml::<PolicyConfig>(&policy_path)?;
        config.rates.validate()?;

        info!(
            policy = %config.metadata.code,
            version = %config.metadata.version,
            tax_rate = %config.rates.tax_rate,
            overtime_multiplier = %config.rates.overtime_multiplier,
            "Loaded pay policy"
        );

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the policy metadata.
    pub fn metadata(&self) -> &PolicyMetadata {
        &self.config.metadata
    }

    /// Returns the rates in force.
    pub fn policy(&self) -> &PayPolicy {
        &self.config.rates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::path::PathBuf;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/default"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn write_policy(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "payroll-engine-{}-{}",
            name,
            uuid::Uuid::new_v4()
        ));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(POLICY_FILE), content).unwrap();
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.metadata().code, "default");
        assert_eq!(loader.policy().tax_rate, dec("0.25"));
        assert_eq!(loader.policy().overtime_multiplier, dec("1.5"));
    }

    #[test]
    fn test_shipped_policy_matches_defaults() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(*loader.policy(), PayPolicy::default());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains(POLICY_FILE));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let dir = write_policy("bad-yaml", "metadata: [unclosed");

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains(POLICY_FILE));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_rates_returns_parse_error() {
        let dir = write_policy(
            "no-rates",
            "metadata:\n  code: x\n  name: X\n  version: \"1\"\n",
        );

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("rates"), "unexpected message: {}", message);
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_out_of_range_tax_rate_returns_invalid_policy() {
        let dir = write_policy(
            "bad-rate",
            r#"
metadata:
  code: x
  name: X
  version: "1"
rates:
  tax_rate: "1.5"
  overtime_multiplier: "1.5"
"#,
        );

        match ConfigLoader::load(&dir) {
            Err(EngineError::InvalidPolicy { field, .. }) => assert_eq!(field, "tax_rate"),
            other => panic!("Expected InvalidPolicy, got {:?}", other),
        }
    }

    #[test]
    fn test_load_overridden_rates() {
        let dir = write_policy(
            "override",
            r#"
metadata:
  code: double-time
  name: Double Time
  version: "2026-07-01"
  jurisdiction: Example State
rates:
  tax_rate: "0.3"
  overtime_multiplier: "2.0"
"#,
        );

        let loader = ConfigLoader::load(&dir).unwrap();
        assert_eq!(loader.metadata().jurisdiction.as_deref(), Some("Example State"));
        assert_eq!(loader.policy().tax_rate, dec("0.3"));
        assert_eq!(loader.policy().overtime_multiplier, dec("2"));
    }
}
