//! Delivery of formatted notifications to a pub/sub topic.
//!
//! The forwarder only depends on the `NotificationPublisher` trait from
//! `core`; this module holds the SNS implementation and the error it reports.
pub mod sns;

pub use sns::SnsPublisher;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PublishError {
    /// The service refused the request or could not be reached.
    #[error("publish was rejected{}: {message}", .code.as_deref().map(|c| format!(" ({c})")).unwrap_or_default())]
    Rejected {
        code: Option<String>,
        message: String,
    },
}

impl PublishError {
    /// The service error code, e.g. `NotFound` or `AuthorizationError`.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Rejected { code, .. } => code.as_deref(),
        }
    }
}
