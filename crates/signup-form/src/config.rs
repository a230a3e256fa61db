// File: src/config.rs
// Purpose: Configuration parsing from signup.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "signup.toml";

/// Form configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub form: FormConfig,

    #[serde(default)]
    pub style: StyleConfig,
}

/// Form behaviour and copy
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_submit_label")]
    pub submit_label: String,

    /// Return to the initial values after a successful submit (default: true)
    #[serde(default = "default_true")]
    pub reset_on_submit: bool,
}

/// CSS classes applied from a field's (touched, error) state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StyleConfig {
    #[serde(default = "default_error_border")]
    pub error_border: String,

    #[serde(default = "default_normal_border")]
    pub normal_border: String,

    #[serde(default = "default_error_text")]
    pub error_text: String,
}

// Default values
fn default_title() -> String {
    "Formik Validation".to_string()
}

fn default_submit_label() -> String {
    "Submit".to_string()
}

fn default_error_border() -> String {
    "border-red-500".to_string()
}

fn default_normal_border() -> String {
    "border-gray-300".to_string()
}

fn default_error_text() -> String {
    "text-red-500 text-sm mt-1".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            submit_label: default_submit_label(),
            reset_on_submit: true,
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            error_border: default_error_border(),
            normal_border: default_normal_border(),
            error_text: default_error_text(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist, return default config
        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::parse(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load configuration from default path (./signup.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_FILE)
    }

    /// Parse configuration from TOML text; empty text gives the defaults
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.form.title, "Formik Validation");
        assert_eq!(config.form.submit_label, "Submit");
        assert!(config.form.reset_on_submit);
        assert_eq!(config.style.error_border, "border-red-500");
        assert_eq!(config.style.normal_border, "border-gray-300");
    }

    #[test]
    fn test_empty_config() {
        let config = Config::parse("  \n").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [form]
            title = "Join us"
            reset_on_submit = false

            [style]
            error_border = "border-rose-600"
        "#;
        let config = Config::parse(toml).unwrap();
        assert_eq!(config.form.title, "Join us");
        assert_eq!(config.form.submit_label, "Submit");
        assert!(!config.form.reset_on_submit);
        assert_eq!(config.style.error_border, "border-rose-600");
        assert_eq!(config.style.normal_border, "border-gray-300");
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        assert!(Config::parse("[form\ntitle = 1").is_err());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = Config::load("definitely/not/here/signup.toml").unwrap();
        assert_eq!(config, Config::default());
    }
}
