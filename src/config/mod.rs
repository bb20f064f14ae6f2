//! Application configuration module
//!
//! Type-safe configuration loaded with the `config` and `dotenvy` crates.
//! Environment variables use the `HYDRO_DECISIO` prefix and `__` between
//! nested keys. Every value has a default, so an empty environment is valid.
//!
//! # Example
//!
//! ```no_run
//! use hydro_decisio::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("CR threshold {}", config.engine.consistency_threshold);
//! ```

mod engine;
mod error;
mod logging;
mod report;

pub use engine::EngineConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use report::ReportConfig;

use serde::Deserialize;
use std::path::Path;

const ENV_PREFIX: &str = "HYDRO_DECISIO";

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// AHP engine tunables
    #[serde(default)]
    pub engine: EngineConfig,

    /// Report rendering and zone catalog
    #[serde(default)]
    pub report: ReportConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Environment Variable Format
    ///
    /// - `HYDRO_DECISIO__ENGINE__CONSISTENCY_THRESHOLD=0.1` -> `engine.consistency_threshold`
    /// - `HYDRO_DECISIO__REPORT__ZONE_CATALOG_PATH=zones.yaml` -> `report.zone_catalog_path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration from an optional file, then environment variables.
    ///
    /// The file format follows its extension (YAML, TOML or JSON).
    /// Environment variables override file values.
    pub fn load_from(file: Option<&Path>) -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path));
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.engine.validate()?;
        self.report.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ahp::WeightMethod;
    use std::env;
    use std::io::Write;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("HYDRO_DECISIO__ENGINE__CONSISTENCY_THRESHOLD");
        env::remove_var("HYDRO_DECISIO__ENGINE__WEIGHT_METHOD");
        env::remove_var("HYDRO_DECISIO__REPORT__INCLUDE_COST_CURVES");
        env::remove_var("HYDRO_DECISIO__LOGGING__JSON");
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.engine.consistency_threshold, 0.1);
        assert_eq!(config.engine.weight_method, WeightMethod::ColumnNormalization);
        assert!(!config.logging.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_environment_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("HYDRO_DECISIO__ENGINE__CONSISTENCY_THRESHOLD", "0.08");
        env::set_var("HYDRO_DECISIO__ENGINE__WEIGHT_METHOD", "principal_eigenvector");
        env::set_var("HYDRO_DECISIO__REPORT__INCLUDE_COST_CURVES", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.engine.consistency_threshold, 0.08);
        assert_eq!(config.engine.weight_method, WeightMethod::PrincipalEigenvector);
        assert!(config.report.include_cost_curves);
    }

    #[test]
    fn test_file_values_under_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(
            file,
            "engine:\n  consistency_threshold: 0.05\nreport:\n  title: Field Report"
        )
        .unwrap();

        env::set_var("HYDRO_DECISIO__LOGGING__JSON", "true");
        let result = AppConfig::load_from(Some(file.path()));
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.engine.consistency_threshold, 0.05);
        assert_eq!(config.report.title, "Field Report");
        assert!(config.logging.json);
    }

    #[test]
    fn test_validate_rejects_bad_threshold() {
        let config = AppConfig {
            engine: EngineConfig {
                consistency_threshold: 2.0,
                ..EngineConfig::default()
            },
            ..AppConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidThreshold(_))
        ));
    }
}
