//! Configuration for the report exercises
//!
//! Every numeric parameter an exercise uses lives here, so a TOML file can
//! re-run the reports with different thresholds or price boundaries.

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error with path context
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Parsed values are inconsistent
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Price boundaries used to bucket products
///
/// A price below `cheap_below` is cheap, a price below `expensive_from` is
/// average, anything else is expensive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceBands {
    pub cheap_below: Decimal,
    pub expensive_from: Decimal,
}

impl Default for PriceBands {
    fn default() -> Self {
        Self {
            cheap_below: Decimal::from(20),
            expensive_from: Decimal::from(50),
        }
    }
}

/// Parameters for the report exercises
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ReportConfig {
    /// Starting threshold for the customer total report
    pub total_threshold: Decimal,

    /// Factor applied to the threshold after each iteration
    pub threshold_multiplier: Decimal,

    /// Number of thresholds to report
    pub threshold_iterations: usize,

    /// Minimum single-order total for the large order report
    pub order_threshold: Decimal,

    /// Product price buckets
    pub price_bands: PriceBands,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            total_threshold: Decimal::from(3000),
            threshold_multiplier: Decimal::from(5),
            threshold_iterations: 3,
            order_threshold: Decimal::from(10000),
            price_bands: PriceBands::default(),
        }
    }
}

impl ReportConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> ReportConfigBuilder {
        ReportConfigBuilder::default()
    }

    /// Parse and validate a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.threshold_iterations == 0 {
            return Err(ConfigError::Invalid(
                "threshold_iterations must be at least 1".to_string(),
            ));
        }
        if self.threshold_multiplier < Decimal::ONE {
            return Err(ConfigError::Invalid(format!(
                "threshold_multiplier must be at least 1, got {}",
                self.threshold_multiplier
            )));
        }
        if self.last_threshold().is_none() {
            return Err(ConfigError::Invalid(format!(
                "total_threshold {} overflows after {} iterations with multiplier {}",
                self.total_threshold, self.threshold_iterations, self.threshold_multiplier
            )));
        }
        if self.price_bands.cheap_below > self.price_bands.expensive_from {
            return Err(ConfigError::Invalid(format!(
                "price_bands.cheap_below ({}) exceeds price_bands.expensive_from ({})",
                self.price_bands.cheap_below, self.price_bands.expensive_from
            )));
        }
        if self.total_threshold < Decimal::ZERO || self.order_threshold < Decimal::ZERO {
            return Err(ConfigError::Invalid(
                "thresholds must not be negative".to_string(),
            ));
        }
        Ok(())
    }

    /// The thresholds the customer total report runs with, in order.
    ///
    /// Always yields `threshold_iterations` values; a product past
    /// `Decimal::MAX` saturates there.
    pub fn total_thresholds(&self) -> Vec<Decimal> {
        std::iter::successors(Some(self.total_threshold), |x| {
            Some(x.saturating_mul(self.threshold_multiplier))
        })
        .take(self.threshold_iterations)
        .collect()
    }

    /// Final threshold, or `None` if computing it overflows.
    fn last_threshold(&self) -> Option<Decimal> {
        (1..self.threshold_iterations).try_fold(self.total_threshold, |x, _| {
            x.checked_mul(self.threshold_multiplier)
        })
    }
}

/// Builder for ReportConfig
#[derive(Debug, Default)]
pub struct ReportConfigBuilder {
    config: ReportConfig,
}

impl ReportConfigBuilder {
    pub fn total_threshold(mut self, threshold: impl Into<Decimal>) -> Self {
        self.config.total_threshold = threshold.into();
        self
    }

    pub fn threshold_multiplier(mut self, multiplier: impl Into<Decimal>) -> Self {
        self.config.threshold_multiplier = multiplier.into();
        self
    }

    pub fn threshold_iterations(mut self, iterations: usize) -> Self {
        self.config.threshold_iterations = iterations;
        self
    }

    pub fn order_threshold(mut self, threshold: impl Into<Decimal>) -> Self {
        self.config.order_threshold = threshold.into();
        self
    }

    pub fn price_bands(mut self, cheap_below: impl Into<Decimal>, expensive_from: impl Into<Decimal>) -> Self {
        self.config.price_bands = PriceBands {
            cheap_below: cheap_below.into(),
            expensive_from: expensive_from.into(),
        };
        self
    }

    /// Build the configuration
    pub fn build(self) -> ReportConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReportConfig::default();
        assert_eq!(config.total_threshold, Decimal::from(3000));
        assert_eq!(config.threshold_iterations, 3);
        assert_eq!(config.order_threshold, Decimal::from(10000));
        assert_eq!(config.price_bands.cheap_below, Decimal::from(20));
        assert_eq!(config.price_bands.expensive_from, Decimal::from(50));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_thresholds_grow_by_five() {
        let thresholds = ReportConfig::default().total_thresholds();
        assert_eq!(
            thresholds,
            vec![Decimal::from(3000), Decimal::from(15000), Decimal::from(75000)]
        );
    }

    #[test]
    fn test_builder() {
        let config = ReportConfig::builder()
            .total_threshold(100)
            .threshold_multiplier(2)
            .threshold_iterations(4)
            .order_threshold(500)
            .price_bands(10, 30)
            .build();

        assert_eq!(
            config.total_thresholds(),
            vec![
                Decimal::from(100),
                Decimal::from(200),
                Decimal::from(400),
                Decimal::from(800)
            ]
        );
        assert_eq!(config.order_threshold, Decimal::from(500));
        assert_eq!(config.price_bands.expensive_from, Decimal::from(30));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ReportConfig::from_toml_str(
            r#"
            order_threshold = 5000

            [price_bands]
            cheap_below = 15
            "#,
        )
        .unwrap();

        assert_eq!(config.order_threshold, Decimal::from(5000));
        assert_eq!(config.price_bands.cheap_below, Decimal::from(15));
        assert_eq!(config.price_bands.expensive_from, Decimal::from(50));
        assert_eq!(config.total_threshold, Decimal::from(3000));
    }

    #[test]
    fn test_inverted_price_bands_rejected() {
        let err = ReportConfig::from_toml_str(
            r#"
            [price_bands]
            cheap_below = 60
            expensive_from = 50
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_multiplier_below_one_rejected() {
        for multiplier in [-1, 0] {
            let config = ReportConfig::builder().threshold_multiplier(multiplier).build();
            assert!(
                matches!(config.validate(), Err(ConfigError::Invalid(msg)) if msg.contains("threshold_multiplier")),
                "multiplier {multiplier} should be rejected"
            );
        }

        let err = ReportConfig::from_toml_str("threshold_multiplier = \"0.5\"").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_multiplier_of_one_repeats_threshold() {
        let config = ReportConfig::builder().threshold_multiplier(1).build();
        assert!(config.validate().is_ok());
        assert_eq!(config.total_thresholds(), vec![Decimal::from(3000); 3]);
    }

    #[test]
    fn test_overflowing_thresholds_rejected() {
        let config = ReportConfig::builder()
            .total_threshold(Decimal::MAX / Decimal::from(2))
            .build();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(msg)) if msg.contains("overflows")));
    }

    #[test]
    fn test_thresholds_saturate_and_keep_iteration_count() {
        let config = ReportConfig::builder()
            .total_threshold(Decimal::MAX / Decimal::from(2))
            .build();
        let thresholds = config.total_thresholds();
        assert_eq!(thresholds.len(), 3);
        assert_eq!(thresholds[1], Decimal::MAX);
        assert_eq!(thresholds[2], Decimal::MAX);
        assert!(thresholds.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let config = ReportConfig::builder().threshold_iterations(0).build();
        assert!(config.validate().is_err());
    }
}
