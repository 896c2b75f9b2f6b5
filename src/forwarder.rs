//! The per-invocation pipeline: decode, format, publish.
//!
//! A `Forwarder` owns read-only state only, so one instance is built at cold
//! start and shared by every invocation the runtime hands to this process.

use crate::config::{Config, ConfigError};
use crate::core::{LogDecoder, NotificationPublisher, PublishReceipt};
use crate::decoder::DecodeError;
use crate::formatting::{PlainTextFormatter, TextFormatter};
use crate::notification::PublishError;
use crate::types::CloudWatchLogsEvent;
use thiserror::Error;
use tracing::{error, info};

/// The step at which an invocation stopped. Every variant is terminal: no
/// message is published once one of these is returned.
#[derive(Error, Debug)]
pub enum ForwardError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to decode log event: {0}")]
    Decode(#[from] DecodeError),

    #[error("failed to publish notification: {0}")]
    Publish(#[from] PublishError),
}

pub struct Forwarder<D: LogDecoder, P: NotificationPublisher> {
    config: Config,
    decoder: D,
    publisher: P,
    formatter: Box<dyn TextFormatter>,
}

impl<D: LogDecoder, P: NotificationPublisher> Forwarder<D, P> {
    /// Creates a new `Forwarder` using the plain-text layout.
    pub fn new(config: Config, decoder: D, publisher: P) -> Self {
        Self {
            config,
            decoder,
            publisher,
            formatter: Box::new(PlainTextFormatter),
        }
    }

    /// Handles one subscription event. Stops at the first failing step.
    pub async fn handle(&self, event: &CloudWatchLogsEvent) -> Result<PublishReceipt, ForwardError> {
        let topic_arn = self.config.topic_arn().inspect_err(|e| {
            error!(error = %e, "Failed to load configuration");
        })?;

        let logs = self.decoder.decode(event).inspect_err(|e| {
            error!(error = %e, "Failed to parse log event");
        })?;
        info!(count = logs.len(), "Decoded log messages.");

        let message = self.formatter.format_message(&self.config.description, &logs);

        let receipt = self
            .publisher
            .publish(topic_arn, &message)
            .await
            .inspect_err(|e| {
                error!(error = %e, topic_arn, "Failed to publish SNS message");
            })?;

        info!(
            topic_arn,
            message_id = receipt.message_id.as_deref().unwrap_or("<none>"),
            "Forwarded {} log messages.",
            logs.len()
        );
        Ok(receipt)
    }
}
