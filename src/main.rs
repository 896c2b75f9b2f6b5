//! logs-to-sns - Lambda entry point
//!
//! Receives CloudWatch Logs subscription events from the Lambda runtime and
//! forwards each batch to the configured SNS topic.

use anyhow::Result;
use lambda_runtime::{service_fn, LambdaEvent};
use logs_to_sns::{
    config::Config, decoder::AwsLogsDecoder, notification::SnsPublisher,
    types::CloudWatchLogsEvent, Forwarder,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // CloudWatch stamps every line, so no timestamps or colours here.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .init();

    let config = Config::load().inspect_err(|e| error!("Failed to load configuration: {}", e))?;
    info!(
        description = %config.description,
        sns_topic_arn = config.sns_topic_arn.as_deref().unwrap_or("<unset>"),
        "Configuration loaded."
    );

    let publisher = SnsPublisher::from_env().await;
    let forwarder = Arc::new(Forwarder::new(config, AwsLogsDecoder::new(), publisher));

    lambda_runtime::run(service_fn(move |event: LambdaEvent<CloudWatchLogsEvent>| {
        let forwarder = forwarder.clone();
        async move {
            info!(request_id = %event.context.request_id, "Received log subscription event.");
            forwarder.handle(&event.payload).await?;
            Ok::<(), lambda_runtime::Error>(())
        }
    }))
    .await
    .map_err(|e| anyhow::anyhow!(e))
}
