//! A decoder wrapper that counts how often it was asked to decode.

use logs_to_sns::core::LogDecoder;
use logs_to_sns::decoder::{AwsLogsDecoder, DecodeError};
use logs_to_sns::types::CloudWatchLogsEvent;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

#[derive(Clone, Debug, Default)]
pub struct CountingDecoder {
    pub calls: Arc<AtomicUsize>,
}

impl CountingDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LogDecoder for CountingDecoder {
    fn decode(&self, event: &CloudWatchLogsEvent) -> Result<Vec<String>, DecodeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        AwsLogsDecoder::new().decode_data(event).map(|d| d.messages())
    }
}
