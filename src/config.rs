//! Runtime configuration.
//!
//! The defaults ship embedded in the binary; a JSON file named by the
//! `SHOWCASE_CONFIG` environment variable overrides any field it sets.

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ShowcaseError, ShowcaseResult};

const DEFAULT_CONFIG_JSON: &str = include_str!("../assets/showcase.json");

/// Largest scatter half-width whose sampling range is still finite
pub const MAX_SCATTER_EXTENT: f32 = f32::MAX / 4.0;

/// Environment variable naming an override config file
pub const CONFIG_ENV_VAR: &str = "SHOWCASE_CONFIG";

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// Published CSV the records are fetched from
    pub source_url: String,
    /// Local CSV file used instead of `source_url` when set
    pub source_file: Option<String>,
    /// Duration of every layout switch, in milliseconds
    pub transition_ms: u64,
    pub fetch_timeout_secs: u64,
    /// Half-width of the cube panels are scattered in before the first transition
    pub scatter_extent: f32,
    pub window_title: String,
    pub camera_distance: f32,
    /// Hold initialization until the sign-in gate is opened
    pub require_sign_in: bool,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            source_url: String::new(),
            source_file: None,
            transition_ms: 2000,
            fetch_timeout_secs: 15,
            scatter_extent: 2000.0,
            window_title: "Panel Showcase".into(),
            camera_distance: 3000.0,
            require_sign_in: false,
        }
    }
}

impl ShowcaseConfig {
    /// Embedded defaults, then the override file from `SHOWCASE_CONFIG` if set
    pub fn load() -> ShowcaseResult<Self> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) => Self::from_file(path),
            Err(_) => Self::from_json(DEFAULT_CONFIG_JSON),
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> ShowcaseResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| ShowcaseError::Config(format!("{}: {}", path.display(), e)))?;
        let mut config = Self::from_json(DEFAULT_CONFIG_JSON)?;
        config.merge_json(&json)?;
        Ok(config)
    }

    pub fn from_json(json: &str) -> ShowcaseResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ShowcaseError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Overlay the fields present in `json` onto this config
    fn merge_json(&mut self, json: &str) -> ShowcaseResult<()> {
        let overrides: serde_json::Value =
            serde_json::from_str(json).map_err(|e| ShowcaseError::Config(e.to_string()))?;
        let serde_json::Value::Object(overrides) = overrides else {
            return Err(ShowcaseError::Config("expected a JSON object".into()));
        };

        let mut merged = serde_json::to_value(&*self)
            .map_err(|e| ShowcaseError::Config(e.to_string()))?;
        if let serde_json::Value::Object(fields) = &mut merged {
            fields.extend(overrides);
        }

        *self = serde_json::from_value(merged).map_err(|e| ShowcaseError::Config(e.to_string()))?;
        self.validate()
    }

    fn validate(&self) -> ShowcaseResult<()> {
        if self.transition_ms == 0 {
            return Err(ShowcaseError::Config("transition_ms must be positive".into()));
        }
        if self.source_url.is_empty() && self.source_file.is_none() {
            return Err(ShowcaseError::Config(
                "one of source_url or source_file is required".into(),
            ));
        }
        // The scatter range spans 2x the extent and must stay finite in f32
        if !self.scatter_extent.is_finite()
            || self.scatter_extent <= 0.0
            || self.scatter_extent > MAX_SCATTER_EXTENT
        {
            return Err(ShowcaseError::Config(format!(
                "scatter_extent must be in (0, {:e}], got {}",
                MAX_SCATTER_EXTENT, self.scatter_extent
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_defaults_parse() {
        let config = ShowcaseConfig::from_json(DEFAULT_CONFIG_JSON).unwrap();
        assert_eq!(config.transition_ms, 2000);
        assert_eq!(config.camera_distance, 3000.0);
        assert!(config.source_url.starts_with("https://"));
        assert!(!config.require_sign_in);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let mut config = ShowcaseConfig::from_json(DEFAULT_CONFIG_JSON).unwrap();
        config
            .merge_json(r#"{ "transition_ms": 500, "source_file": "people.csv" }"#)
            .unwrap();

        assert_eq!(config.transition_ms, 500);
        assert_eq!(config.source_file.as_deref(), Some("people.csv"));
        assert_eq!(config.fetch_timeout_secs, 15);
    }

    #[test]
    fn test_zero_duration_rejected() {
        let result = ShowcaseConfig::from_json(r#"{ "source_url": "x", "transition_ms": 0 }"#);
        assert!(matches!(result, Err(ShowcaseError::Config(_))));
    }

    #[test]
    fn test_scatter_extent_must_be_finite_and_bounded() {
        for extent in ["0", "-5", "1e39", "3e38"] {
            let json = format!(r#"{{ "source_url": "x", "scatter_extent": {} }}"#, extent);
            assert!(
                matches!(ShowcaseConfig::from_json(&json), Err(ShowcaseError::Config(_))),
                "scatter_extent {} should be rejected",
                extent
            );
        }

        let config =
            ShowcaseConfig::from_json(r#"{ "source_url": "x", "scatter_extent": 5e37 }"#).unwrap();
        assert!((config.scatter_extent / 5e37 - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_missing_source_rejected() {
        assert!(ShowcaseConfig::from_json("{}").is_err());
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(ShowcaseConfig::from_json("{ not json").is_err());
    }
}
