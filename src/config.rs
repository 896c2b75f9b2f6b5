//! Configuration management for the forwarder
//!
//! This module defines the `Config` struct holding the function's settings.
//! It uses the `figment` crate to merge built-in defaults with the Lambda
//! function's environment variables (`DESCRIPTION`, `SNS_TOPIC_ARN`).

use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Used when `DESCRIPTION` is not set.
pub const DEFAULT_DESCRIPTION: &str =
    "Some log messages were detected in CloudWatchLogs(subscription filter).";

/// Free-text variable, taken verbatim rather than parsed by figment's `Env`.
const DESCRIPTION_VAR: &str = "DESCRIPTION";
const TOPIC_ARN_VAR: &str = "SNS_TOPIC_ARN";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("required environment variable SNS_TOPIC_ARN is not set")]
    MissingTopicArn,

    #[error("failed to load configuration: {0}")]
    Extract(#[from] Box<figment::Error>),
}

/// The function's configuration, loaded once per process.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Free text placed under `Description:` in every notification.
    pub description: String,
    /// ARN of the destination topic. Checked per invocation so that a
    /// missing value fails the invocation rather than the cold start. A
    /// blank value counts as missing.
    pub sns_topic_arn: Option<String>,
}

impl Config {
    /// Loads the configuration from defaults and the process environment.
    ///
    /// `DESCRIPTION` is used exactly as set, so values such as `404`, `true`
    /// or ones with surrounding spaces stay plain text.
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Env::raw().only(&[TOPIC_ARN_VAR]));
        if let Ok(description) = std::env::var(DESCRIPTION_VAR) {
            figment = figment.merge(Serialized::default("description", description));
        }
        Self::from_figment(figment)
    }

    /// Extracts the configuration from an arbitrary figment. Useful for
    /// injecting providers in tests.
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        figment.extract().map_err(|e| ConfigError::Extract(Box::new(e)))
    }

    /// Creates a configuration targeting `topic_arn` with the default
    /// description.
    pub fn with_topic_arn(topic_arn: impl Into<String>) -> Self {
        Self {
            sns_topic_arn: Some(topic_arn.into()),
            ..Default::default()
        }
    }

    /// Returns the topic ARN, treating an unset or blank value as missing.
    pub fn topic_arn(&self) -> Result<&str, ConfigError> {
        match self.sns_topic_arn.as_deref().map(str::trim) {
            Some(arn) if !arn.is_empty() => Ok(arn),
            _ => Err(ConfigError::MissingTopicArn),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            description: DEFAULT_DESCRIPTION.to_string(),
            sns_topic_arn: None,
        }
    }
}
