//! A fake publisher that records messages instead of calling SNS.

use async_trait::async_trait;
use logs_to_sns::core::{NotificationPublisher, PublishReceipt};
use logs_to_sns::notification::PublishError;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};

#[derive(Clone, Debug, Default)]
pub struct FakePublisher {
    /// `(topic_arn, message)` pairs, in publish order.
    pub published: Arc<Mutex<Vec<(String, String)>>>,
    fail_on_publish: Arc<AtomicBool>,
}

impl FakePublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// A publisher that rejects every call.
    pub fn failing() -> Self {
        let publisher = Self::default();
        publisher.set_fail_on_publish(true);
        publisher
    }

    pub fn set_fail_on_publish(&self, fail: bool) {
        self.fail_on_publish.store(fail, Ordering::SeqCst);
    }

    pub fn get_published(&self) -> Vec<(String, String)> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationPublisher for FakePublisher {
    async fn publish(&self, topic_arn: &str, message: &str) -> Result<PublishReceipt, PublishError> {
        if self.fail_on_publish.load(Ordering::SeqCst) {
            return Err(PublishError::Rejected {
                code: Some("InvalidParameter".to_string()),
                message: format!("Invalid parameter: TopicArn {}", topic_arn),
            });
        }
        let mut published = self.published.lock().unwrap();
        published.push((topic_arn.to_string(), message.to_string()));
        Ok(PublishReceipt::new(format!("msg-{}", published.len())))
    }
}
