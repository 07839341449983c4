//! Run configuration and its precedence: CLI > Env > File > Defaults
//!
//! The file layer is read by [`crate::adapters::TomlConfigAdapter`]; the
//! environment and CLI layers both arrive through clap and are applied with
//! [`TrimConfig::apply_overrides`].

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::errors::DomainError;
use crate::domain::model::{IntervalRules, ParseStrategy};
use crate::engine::EncoderSettings;

/// Environment variable naming the configuration file
pub const CONFIG_ENV: &str = "MPDECIMATE_TRIM_CONFIG";

/// Files tried, in order, when no configuration file is named
pub const DEFAULT_CONFIG_PATHS: &[&str] = &["mpdecimate_trim.toml", "config/mpdecimate_trim.toml"];

/// Decimation pass settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecimateSettings {
    /// Filter expression passed to `-vf`
    pub filter: String,
    /// Log dialect the filter writes
    pub strategy: ParseStrategy,
}

impl Default for DecimateSettings {
    fn default() -> Self {
        Self {
            filter: "mpdecimate=hi=576".to_string(),
            strategy: ParseStrategy::KeepDrop,
        }
    }
}

/// Complete configuration of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrimConfig {
    /// ffmpeg executable
    pub ffmpeg: String,
    pub decimate: DecimateSettings,
    pub intervals: IntervalRules,
    pub encoder: EncoderSettings,
}

impl Default for TrimConfig {
    fn default() -> Self {
        Self {
            ffmpeg: "ffmpeg".to_string(),
            decimate: DecimateSettings::default(),
            intervals: IntervalRules::default(),
            encoder: EncoderSettings::default(),
        }
    }
}

/// Values given on the command line or through the environment
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub ffmpeg: Option<String>,
    pub decimate_filter: Option<String>,
    pub strategy: Option<ParseStrategy>,
    pub min_duration: Option<f64>,
    pub merge_distance: Option<f64>,
    pub codec: Option<String>,
    pub preset: Option<String>,
    pub crf: Option<u8>,
}

impl TrimConfig {
    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml(content: &str) -> Result<Self, DomainError> {
        toml::from_str(content)
            .map_err(|e| DomainError::ConfigFail(format!("Failed to parse TOML config: {}", e)))
    }

    /// Apply the CLI/environment layer on top of this configuration
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        let mut applied = 0;

        if let Some(ffmpeg) = &overrides.ffmpeg {
            self.ffmpeg = ffmpeg.clone();
            applied += 1;
        }
        if let Some(filter) = &overrides.decimate_filter {
            self.decimate.filter = filter.clone();
            applied += 1;
        }
        if let Some(strategy) = overrides.strategy {
            self.decimate.strategy = strategy;
            applied += 1;
        }
        if let Some(min_duration) = overrides.min_duration {
            self.intervals.min_duration = min_duration;
            applied += 1;
        }
        if let Some(merge_distance) = overrides.merge_distance {
            self.intervals.merge_distance = merge_distance;
            applied += 1;
        }
        if let Some(codec) = &overrides.codec {
            self.encoder.codec = codec.clone();
            applied += 1;
        }
        if let Some(preset) = &overrides.preset {
            self.encoder.preset = preset.clone();
            applied += 1;
        }
        if let Some(crf) = overrides.crf {
            self.encoder.crf = crf;
            applied += 1;
        }

        if applied > 0 {
            info!("Applied {} CLI configuration overrides", applied);
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.ffmpeg.trim().is_empty() {
            return Err(DomainError::ConfigFail("ffmpeg executable cannot be empty".to_string()));
        }
        if self.decimate.filter.trim().is_empty() {
            return Err(DomainError::ConfigFail("Decimate filter cannot be empty".to_string()));
        }
        if !(self.intervals.min_duration >= 0.0) {
            return Err(DomainError::ConfigFail(format!(
                "min_duration must be a non-negative number of seconds, got {}",
                self.intervals.min_duration
            )));
        }
        if !(self.intervals.merge_distance >= 0.0) {
            return Err(DomainError::ConfigFail(format!(
                "merge_distance must be a non-negative number of seconds, got {}",
                self.intervals.merge_distance
            )));
        }
        if self.encoder.crf > 51 {
            return Err(DomainError::ConfigFail("CRF value cannot exceed 51".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TrimConfig::default();
        assert_eq!(config.ffmpeg, "ffmpeg");
        assert_eq!(config.decimate.filter, "mpdecimate=hi=576");
        assert_eq!(config.decimate.strategy, ParseStrategy::KeepDrop);
        assert_eq!(config.intervals, IntervalRules::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = TrimConfig::from_toml(
            r#"
[decimate]
strategy = "drop-count"

[intervals]
merge_distance = 4.5

[encoder]
crf = 24
"#,
        )
        .unwrap();

        assert_eq!(config.decimate.strategy, ParseStrategy::DropCount);
        assert_eq!(config.decimate.filter, "mpdecimate=hi=576");
        assert_eq!(config.intervals.merge_distance, 4.5);
        assert_eq!(config.intervals.min_duration, 1.0);
        assert_eq!(config.encoder.crf, 24);
        assert_eq!(config.encoder.codec, "libx265");
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            TrimConfig::from_toml("[decimate]\nstrategy = \"sometimes\""),
            Err(DomainError::ConfigFail(_))
        ));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let mut config = TrimConfig::default();
        config.apply_overrides(&ConfigOverrides {
            strategy: Some(ParseStrategy::DropCount),
            min_duration: Some(2.0),
            crf: Some(20),
            ..ConfigOverrides::default()
        });

        assert_eq!(config.decimate.strategy, ParseStrategy::DropCount);
        assert_eq!(config.intervals.min_duration, 2.0);
        assert_eq!(config.intervals.merge_distance, 10.0);
        assert_eq!(config.encoder.crf, 20);
    }

    #[test]
    fn test_validation_failures() {
        let mut config = TrimConfig::default();
        config.encoder.crf = 52;
        assert!(config.validate().is_err());

        let mut config = TrimConfig::default();
        config.intervals.min_duration = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = TrimConfig::default();
        config.decimate.filter = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
