//! Builders for CloudWatch Logs subscription events.

use logs_to_sns::decoder::encode_envelope;
use logs_to_sns::types::{CloudWatchLogsEvent, LogEvent, LogsData};

/// Builds an encoded `DATA_MESSAGE` event carrying `messages` in order.
pub fn event_with_messages(messages: &[&str]) -> CloudWatchLogsEvent {
    let data = LogsData {
        message_type: "DATA_MESSAGE".to_string(),
        owner: "123456789012".to_string(),
        log_group: "/aws/lambda/orders".to_string(),
        log_stream: "2024/05/01/[$LATEST]0123456789abcdef".to_string(),
        subscription_filters: vec!["errors".to_string()],
        log_events: messages
            .iter()
            .enumerate()
            .map(|(i, message)| LogEvent {
                id: format!("3789{:04}", i),
                timestamp: 1_714_521_600_000 + i as i64,
                message: message.to_string(),
            })
            .collect(),
    };
    CloudWatchLogsEvent::new(encode_envelope(&data).unwrap())
}

/// An event whose envelope cannot be decoded.
pub fn malformed_event() -> CloudWatchLogsEvent {
    CloudWatchLogsEvent::new("%%% definitely not an envelope %%%")
}
