//! Decoding of CloudWatch Logs subscription envelopes.

use crate::core::LogDecoder;
use crate::types::{CloudWatchLogsEvent, LogsData};
use base64::{engine::general_purpose::STANDARD, Engine};
use flate2::read::MultiGzDecoder;
use std::io::Read;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("envelope is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("envelope is not valid gzip: {0}")]
    Gzip(#[source] std::io::Error),

    #[error("envelope does not contain valid log data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decodes the `awslogs.data` envelope: base64, then gzip, then JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct AwsLogsDecoder;

impl AwsLogsDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decodes the full [`LogsData`] document, including its log group and
    /// stream metadata.
    pub fn decode_data(&self, event: &CloudWatchLogsEvent) -> Result<LogsData, DecodeError> {
        let compressed = STANDARD.decode(event.awslogs.data.trim())?;

        let mut json = Vec::new();
        MultiGzDecoder::new(compressed.as_slice())
            .read_to_end(&mut json)
            .map_err(DecodeError::Gzip)?;

        Ok(serde_json::from_slice(&json)?)
    }
}

impl LogDecoder for AwsLogsDecoder {
    fn decode(&self, event: &CloudWatchLogsEvent) -> Result<Vec<String>, DecodeError> {
        let data = self.decode_data(event)?;
        debug!(
            log_group = %data.log_group,
            log_stream = %data.log_stream,
            message_type = %data.message_type,
            control = data.is_control_message(),
            count = data.log_events.len(),
            "Decoded log subscription envelope"
        );
        Ok(data.messages())
    }
}

/// Builds the `awslogs.data` envelope for `data`. This is the inverse of
/// [`AwsLogsDecoder::decode_data`] and is what CloudWatch itself produces.
pub fn encode_envelope(data: &LogsData) -> Result<String, std::io::Error> {
    use flate2::{write::GzEncoder, Compression};
    use std::io::Write;

    let json = serde_json::to_vec(data)?;
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&json)?;
    Ok(STANDARD.encode(encoder.finish()?))
}
