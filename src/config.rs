//! Configuration management
//!
//! Loads synthesis settings from a TOML file and validates them. Every
//! field has a default, so an empty file (or no file at all) yields a
//! working configuration.

use crate::error::{Result, SynthError};
use crate::keys::VariantPolicy;
use crate::record::WHEEL_DELTA;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level synthesis configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthConfig {
    /// Keyboard settings
    pub keyboard: KeyboardConfig,
    /// Mouse settings
    pub mouse: MouseConfig,
}

/// Keyboard synthesis settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyboardConfig {
    /// Which concrete key a generic modifier resolves to
    pub variant_policy: VariantPolicy,
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            variant_policy: VariantPolicy::Left,
        }
    }
}

/// Mouse synthesis settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MouseConfig {
    /// Wheel units per scroll tick
    pub wheel_delta: i32,
    /// Whether positional clicks move the cursor back afterwards
    pub restore_cursor: bool,
}

impl Default for MouseConfig {
    fn default() -> Self {
        Self {
            wheel_delta: WHEEL_DELTA,
            restore_cursor: false,
        }
    }
}

impl SynthConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SynthError::Config(format!("failed to read {}: {e}", path.display()))
        })?;

        let config: SynthConfig = toml::from_str(&content)
            .map_err(|e| SynthError::Config(format!("failed to parse {}: {e}", path.display())))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.mouse.wheel_delta <= 0 {
            return Err(SynthError::Config(format!(
                "mouse.wheel_delta must be positive (was {})",
                self.mouse.wheel_delta
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = SynthConfig::default();
        assert_eq!(config.keyboard.variant_policy, VariantPolicy::Left);
        assert_eq!(config.mouse.wheel_delta, WHEEL_DELTA);
        assert!(!config.mouse.restore_cursor);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[keyboard]
variant_policy = "right"

[mouse]
wheel_delta = 60
restore_cursor = true
"#
        )
        .unwrap();

        let config = SynthConfig::load(file.path()).unwrap();
        assert_eq!(config.keyboard.variant_policy, VariantPolicy::Right);
        assert_eq!(config.mouse.wheel_delta, 60);
        assert!(config.mouse.restore_cursor);
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[mouse]\nrestore_cursor = true").unwrap();

        let config = SynthConfig::load(file.path()).unwrap();
        assert_eq!(config.keyboard.variant_policy, VariantPolicy::Left);
        assert_eq!(config.mouse.wheel_delta, WHEEL_DELTA);
        assert!(config.mouse.restore_cursor);
    }

    #[test]
    fn test_invalid_wheel_delta_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[mouse]\nwheel_delta = 0").unwrap();

        let err = SynthConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, SynthError::Config(_)));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = SynthConfig::load("/nonexistent/synth.toml").unwrap_err();
        assert!(matches!(err, SynthError::Config(_)));
    }
}
