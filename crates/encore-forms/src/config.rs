// File: src/config.rs
// Purpose: Form behaviour and upload limits, parsed from forms.toml

use anyhow::{Context, Result};
use encore_validation_core::FileRules;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Forms configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FormsConfig {
    #[serde(default)]
    pub form: FormConfiguration,

    #[serde(default)]
    pub files: FileRules,
}

/// When fields are validated and how results are shown
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormConfiguration {
    /// Validate a field when it loses focus (default: true)
    #[serde(default = "default_true")]
    pub validate_on_blur: bool,

    /// Validate on every keystroke (default: false)
    #[serde(default = "default_false")]
    pub validate_on_input: bool,

    /// Mark passing fields with the success class (default: true)
    #[serde(default = "default_true")]
    pub show_success_indicator: bool,

    /// Keep entered values when submission is blocked (default: true)
    #[serde(default = "default_true")]
    pub preserve_data_on_error: bool,
}

fn default_true() -> bool {
    true
}

fn default_false() -> bool {
    false
}

impl Default for FormConfiguration {
    fn default() -> Self {
        Self {
            validate_on_blur: true,
            validate_on_input: false,
            show_success_indicator: true,
            preserve_data_on_error: true,
        }
    }
}

impl FormsConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read forms config: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: FormsConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse forms config: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from the default path (./forms.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("forms.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encore_validation_core::file::DEFAULT_MAX_SIZE;
    use encore_validation_core::{validate_file, FileInfo};

    #[test]
    fn test_default_config() {
        let config = FormsConfig::default();
        assert!(config.form.validate_on_blur);
        assert!(!config.form.validate_on_input);
        assert!(config.form.show_success_indicator);
        assert!(config.form.preserve_data_on_error);
        assert_eq!(config.files.max_size, DEFAULT_MAX_SIZE);
        assert!(config.files.allowed_types.contains("image/png"));
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<FormsConfig>("").unwrap_or_default();
        assert_eq!(config, FormsConfig::default());
    }

    #[test]
    fn test_partial_overrides() {
        let toml = r#"
            [form]
            validate_on_input = true
            show_success_indicator = false

            [files]
            max_size = 5242880
            allowed_extensions = ["mp3", "wav"]
        "#;
        let config: FormsConfig = toml::from_str(toml).unwrap();
        assert!(config.form.validate_on_input);
        assert!(!config.form.show_success_indicator);
        assert!(config.form.validate_on_blur);
        assert_eq!(config.files.max_size, 5 * 1024 * 1024);
        assert_eq!(config.files.allowed_extensions.len(), 2);
        // unspecified file keys keep their defaults
        assert!(config.files.allowed_types.contains("audio/mpeg"));
    }

    #[test]
    fn test_mixed_case_upload_rules() {
        let toml = r#"
            [files]
            allowed_types = ["Image/PNG", "AUDIO/MPEG"]
            allowed_extensions = [".MP3", "Png"]
        "#;
        let config: FormsConfig = toml::from_str(toml).unwrap();

        let types: Vec<&str> = config.files.allowed_types.iter().map(String::as_str).collect();
        assert_eq!(types, vec!["audio/mpeg", "image/png"]);
        assert!(config.files.allowed_extensions.contains("mp3"));
        assert!(config.files.allowed_extensions.contains("png"));

        let cover = FileInfo::new("cover.png", 2048, "image/png");
        assert!(validate_file(&cover, &config.files).is_valid());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = FormsConfig::load("does/not/exist/forms.toml").unwrap();
        assert_eq!(config, FormsConfig::default());
    }
}
