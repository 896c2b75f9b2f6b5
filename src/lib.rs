/// logs-to-sns - forwards CloudWatch Logs subscription batches to SNS
///
/// This library decodes the log lines delivered by a subscription filter,
/// renders them into a plain-text notification and publishes it to a topic.
pub mod notification;

pub mod config;
pub mod core;
pub mod decoder;
pub mod formatting;
pub mod forwarder;
pub mod types;

// Re-export core types for convenience
pub use crate::core::*;
pub use forwarder::{ForwardError, Forwarder};
