//! Configuration management for the login form
//!
//! Presentation settings layered from an optional `login_form` file and
//! `LOGIN_FORM_*` environment overrides.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::Deserialize;

use crate::error::LoginFormError;

/// Base name of the optional configuration file (any format `config` reads)
const CONFIG_FILE: &str = "login_form";

/// Prefix for environment overrides, e.g. `LOGIN_FORM_TRIM_WHITESPACE=true`
const ENV_PREFIX: &str = "LOGIN_FORM";

/// Login form settings
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoginFormConfig {
    /// Shown when the authentication service rejects a login without a message
    pub default_error_message: String,

    /// Treat whitespace-only fields as empty when gating the login button
    pub trim_whitespace: bool,
}

impl Default for LoginFormConfig {
    fn default() -> Self {
        Self {
            default_error_message: "Login failed.".to_string(),
            trim_whitespace: false,
        }
    }
}

impl LoginFormConfig {
    /// Load configuration from `login_form.*` with environment overrides.
    ///
    /// A missing file is not an error; defaults fill any absent key.
    pub fn load() -> Result<Self, LoginFormError> {
        let builder = Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            );

        Self::from_builder(builder)
    }

    /// Parse configuration from an inline TOML document
    pub fn from_toml_str(toml: &str) -> Result<Self, LoginFormError> {
        Self::from_builder(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, LoginFormError> {
        let config: LoginFormConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.default_error_message.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "default_error_message cannot be empty".into(),
            ));
        }

        Ok(())
    }

    /// Whether a form field counts as filled in for the login button
    pub fn is_filled(&self, text: &str) -> bool {
        if self.trim_whitespace {
            !text.trim().is_empty()
        } else {
            !text.is_empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoginFormConfig::default();
        assert_eq!(config.default_error_message, "Login failed.");
        assert!(!config.trim_whitespace);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = LoginFormConfig::from_toml_str("trim_whitespace = true").unwrap();
        assert!(config.trim_whitespace);
        assert_eq!(config.default_error_message, "Login failed.");
    }

    #[test]
    fn test_full_toml() {
        let config = LoginFormConfig::from_toml_str(
            r#"
            default_error_message = "Wrong user name or password."
            trim_whitespace = false
            "#,
        )
        .unwrap();

        assert_eq!(config.default_error_message, "Wrong user name or password.");
        assert!(!config.trim_whitespace);
    }

    #[test]
    fn test_rejects_empty_error_message() {
        let err = LoginFormConfig::from_toml_str(r#"default_error_message = "  ""#).unwrap_err();
        assert!(matches!(err, LoginFormError::Config(_)));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(LoginFormConfig::from_toml_str("trim_whitespace = ").is_err());
    }

    #[test]
    fn test_is_filled() {
        let strict = LoginFormConfig::default();
        assert!(!strict.is_filled(""));
        assert!(strict.is_filled(" "));
        assert!(strict.is_filled("user"));

        let trimming = LoginFormConfig {
            trim_whitespace: true,
            ..LoginFormConfig::default()
        };
        assert!(!trimming.is_filled(""));
        assert!(!trimming.is_filled(" \t"));
        assert!(trimming.is_filled(" user "));
    }
}
