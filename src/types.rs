//! Wire types for CloudWatch Logs subscription events.
//!
//! A subscription filter delivers its payload as `{"awslogs": {"data": ...}}`
//! where `data` is the base64 encoding of a gzip-compressed JSON document
//! described by [`LogsData`].

use serde::{Deserialize, Serialize};

/// The event handed to the function by the Lambda runtime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CloudWatchLogsEvent {
    pub awslogs: AwsLogs,
}

/// The still-encoded envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AwsLogs {
    /// Base64 of the gzip-compressed [`LogsData`] JSON.
    pub data: String,
}

impl CloudWatchLogsEvent {
    /// Wraps an already encoded envelope.
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            awslogs: AwsLogs { data: data.into() },
        }
    }
}

/// The decoded body of a subscription envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct LogsData {
    /// `DATA_MESSAGE` for regular batches, `CONTROL_MESSAGE` for the
    /// reachability probes CloudWatch sends when a filter is created.
    #[serde(default)]
    pub message_type: String,
    /// AWS account id of the originating log data.
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub log_group: String,
    #[serde(default)]
    pub log_stream: String,
    #[serde(default)]
    pub subscription_filters: Vec<String>,
    pub log_events: Vec<LogEvent>,
}

impl LogsData {
    /// Returns the message of every log event, in delivery order.
    pub fn messages(&self) -> Vec<String> {
        self.log_events.iter().map(|e| e.message.clone()).collect()
    }

    pub fn is_control_message(&self) -> bool {
        self.message_type == "CONTROL_MESSAGE"
    }
}

/// A single log line inside [`LogsData`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LogEvent {
    #[serde(default)]
    pub id: String,
    /// Milliseconds since the epoch.
    #[serde(default)]
    pub timestamp: i64,
    pub message: String,
}
