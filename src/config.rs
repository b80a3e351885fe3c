//! Tuning knobs for the widget core, loadable from TOML.

use crate::simulator::{DEFAULT_BASE_DELAY, DEFAULT_JITTER, DEFAULT_TEMPLATE};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("reply_template must contain the {{input}} placeholder")]
    TemplateMissingPlaceholder,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChatConfig {
    /// Minimum reply latency in milliseconds.
    pub reply_delay_ms: u64,
    /// Additional uniform-random latency in milliseconds.
    pub reply_jitter_ms: u64,
    /// Bot reply body; `{input}` is substituted with the user's text.
    pub reply_template: String,
    /// Bot message seeded into every fresh conversation. None starts empty.
    pub greeting: Option<String>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: DEFAULT_BASE_DELAY.as_millis() as u64,
            reply_jitter_ms: DEFAULT_JITTER.as_millis() as u64,
            reply_template: DEFAULT_TEMPLATE.to_string(),
            greeting: None,
        }
    }
}

impl ChatConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: ChatConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    pub fn jitter(&self) -> Duration {
        Duration::from_millis(self.reply_jitter_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.reply_template.contains("{input}") {
            return Err(ConfigError::TemplateMissingPlaceholder);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_observed_widget_timing() {
        let config = ChatConfig::default();
        assert_eq!(config.base_delay(), Duration::from_millis(1000));
        assert_eq!(config.jitter(), Duration::from_millis(2000));
        assert!(config.reply_template.contains("{input}"));
        assert!(config.greeting.is_none());
    }

    #[test]
    fn partial_toml_overrides_keep_remaining_defaults() {
        let config = ChatConfig::from_toml_str(
            r#"
            reply_delay_ms = 50
            greeting = "How can i help you today?"
            "#,
        )
        .unwrap();
        assert_eq!(config.reply_delay_ms, 50);
        assert_eq!(config.reply_jitter_ms, 2000);
        assert_eq!(config.greeting.as_deref(), Some("How can i help you today?"));
    }

    #[test]
    fn template_without_placeholder_is_rejected() {
        let err = ChatConfig::from_toml_str(r#"reply_template = "static reply""#).unwrap_err();
        assert!(matches!(err, ConfigError::TemplateMissingPlaceholder));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(ChatConfig::from_toml_str("reply_delay = 10").is_err());
    }
}
