//! A publisher that sends notifications to an Amazon SNS topic.

use crate::core::{NotificationPublisher, PublishReceipt};
use crate::notification::PublishError;
use async_trait::async_trait;
use aws_sdk_sns::error::{DisplayErrorContext, ProvideErrorMetadata};
use tracing::{error, info, instrument};

/// Publishes messages through an `aws_sdk_sns::Client`.
#[derive(Debug, Clone)]
pub struct SnsPublisher {
    client: aws_sdk_sns::Client,
}

impl SnsPublisher {
    /// Creates a new `SnsPublisher` around an existing client.
    pub fn new(client: aws_sdk_sns::Client) -> Self {
        Self { client }
    }

    /// Builds the client from the ambient AWS environment (region and
    /// credentials of the Lambda execution role).
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(aws_sdk_sns::Client::new(&config))
    }
}

#[async_trait]
impl NotificationPublisher for SnsPublisher {
    #[instrument(skip(self, message), fields(bytes = message.len()))]
    async fn publish(&self, topic_arn: &str, message: &str) -> Result<PublishReceipt, PublishError> {
        let result = self
            .client
            .publish()
            .topic_arn(topic_arn)
            .message(message)
            .send()
            .await;

        match result {
            Ok(output) => {
                let receipt = PublishReceipt {
                    message_id: output.message_id().map(str::to_string),
                    sequence_number: output.sequence_number().map(str::to_string),
                };
                info!(
                    message_id = receipt.message_id.as_deref().unwrap_or("<none>"),
                    "Published SNS message."
                );
                Ok(receipt)
            }
            Err(e) => {
                let code = e.code().map(str::to_string);
                let message = DisplayErrorContext(&e).to_string();
                error!(code = ?code, error = %message, "SNS publish failed");
                Err(PublishError::Rejected { code, message })
            }
        }
    }
}
