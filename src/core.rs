//! Core service traits for the forwarder.
//!
//! The forwarder only talks to its collaborators through these traits so the
//! invocation path can be exercised with fakes instead of AWS.

use crate::decoder::DecodeError;
use crate::notification::PublishError;
use crate::types::CloudWatchLogsEvent;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Turns a subscription event into its ordered log messages.
pub trait LogDecoder: Send + Sync {
    fn decode(&self, event: &CloudWatchLogsEvent) -> Result<Vec<String>, DecodeError>;
}

/// Submits a text message to a notification topic.
#[async_trait]
pub trait NotificationPublisher: Send + Sync {
    /// Publishes `message` to the topic identified by `topic_arn`.
    ///
    /// Errors are returned to the caller as-is; implementations must not
    /// retry on their own.
    async fn publish(&self, topic_arn: &str, message: &str) -> Result<PublishReceipt, PublishError>;
}

/// What the notification service handed back for an accepted publish.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PublishReceipt {
    pub message_id: Option<String>,
    /// Only set for FIFO topics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<String>,
}

impl PublishReceipt {
    pub fn new(message_id: impl Into<String>) -> Self {
        Self {
            message_id: Some(message_id.into()),
            sequence_number: None,
        }
    }
}
