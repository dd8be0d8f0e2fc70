// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Engine configuration.
//!
//! An engine is configured with a tuning, a set of generator constraints and
//! the number of fingerings to keep per chord. Every field has a default, so
//! an empty file is a valid configuration. Files may be YAML or TOML,
//! chosen by extension:
//!
//! ```yaml
//! max_voicings: 3
//! tuning: [D, A, D, G, B, E]
//! constraints:
//!   max_fret: 7
//!   require_third: false
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::fretboard::{Tuning, MAX_FRET, STRING_COUNT};
use crate::scoring::DEFAULT_RANK_LIMIT;
use crate::voicing::GeneratorConstraints;

/// Root engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fingerings kept per chord
    pub max_voicings: usize,
    /// Open-string notes, low string first
    pub tuning: Tuning,
    /// Voicing search limits
    pub constraints: GeneratorConstraints,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_voicings: DEFAULT_RANK_LIMIT,
            tuning: Tuning::STANDARD,
            constraints: GeneratorConstraints::default(),
        }
    }
}

impl EngineConfig {
    /// Load a configuration file, YAML (`.yaml`, `.yml`) or TOML (`.toml`)
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let config = match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml(&contents)?,
            "toml" => Self::from_toml(&contents)?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string()).into()),
        };

        config
            .validate()
            .with_context(|| format!("Invalid config file: {:?}", path))?;
        Ok(config)
    }

    /// Parse a configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Parse a configuration from a TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML configuration")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))
    }

    /// Check every setting is within range
    pub fn validate(&self) -> Result<(), ConfigError> {
        let c = &self.constraints;
        if self.max_voicings == 0 {
            return Err(invalid("max_voicings", "must be at least 1".to_string()));
        }
        if c.max_fret > MAX_FRET {
            return Err(invalid("max_fret", format!("must be at most {}", MAX_FRET)));
        }
        if c.max_fret_span == 0 {
            return Err(invalid("max_fret_span", "must be at least 1".to_string()));
        }
        if c.min_strings > STRING_COUNT {
            return Err(invalid("min_strings", format!("must be at most {}", STRING_COUNT)));
        }
        if c.max_muted_strings > STRING_COUNT {
            return Err(invalid(
                "max_muted_strings",
                format!("must be at most {}", STRING_COUNT),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, message: String) -> ConfigError {
    ConfigError::InvalidConstraint { field, message }
}
