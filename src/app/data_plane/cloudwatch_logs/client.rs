//! CloudWatch Logs Client Wrapper
//!
//! Provides the two paginated calls the fetcher needs behind the [`LogsApi`] trait,
//! with an AWS SDK implementation authenticated through a named profile.

#![warn(clippy::all, rust_2018_idioms)]

use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_cloudwatchlogs as cloudwatchlogs;
use aws_types::region::Region;

use super::types::{EventCursor, EventPage, LogEvent, StreamPage};

/// The subset of the CloudWatch Logs API used to read a log group.
///
/// Every call is a single request; pagination is driven by the caller.
#[async_trait]
pub trait LogsApi: Send + Sync {
    /// `DescribeLogStreams` filtered by name prefix, in descending name order
    async fn describe_log_streams(
        &self,
        log_group_name: &str,
        log_stream_name_prefix: &str,
        next_token: Option<&str>,
    ) -> Result<StreamPage>;

    /// `GetLogEvents` for one stream
    async fn get_log_events(
        &self,
        log_group_name: &str,
        log_stream_name: &str,
        cursor: &EventCursor,
    ) -> Result<EventPage>;
}

/// CloudWatch Logs client wrapper
#[derive(Clone, Debug)]
pub struct CloudWatchLogsClient {
    client: cloudwatchlogs::Client,
}

impl CloudWatchLogsClient {
    /// Wrap an already configured SDK client
    pub fn new(client: cloudwatchlogs::Client) -> Self {
        Self { client }
    }

    /// Build a client from a named credential profile.
    ///
    /// The region comes from the profile unless `region` overrides it.
    pub async fn from_profile(profile: &str, region: Option<&str>) -> Self {
        log_debug!(
            "Loading AWS config for profile {} (region override: {:?})",
            profile,
            region
        );

        let mut loader = aws_config::defaults(BehaviorVersion::latest()).profile_name(profile);
        if let Some(region) = region {
            loader = loader.region(Region::new(region.to_string()));
        }
        let config = loader.load().await;

        log_debug!(
            "AWS config loaded for profile {}, region {:?}",
            profile,
            config.region().map(|r| r.as_ref().to_string())
        );

        Self::new(cloudwatchlogs::Client::new(&config))
    }
}

#[async_trait]
impl LogsApi for CloudWatchLogsClient {
    async fn describe_log_streams(
        &self,
        log_group_name: &str,
        log_stream_name_prefix: &str,
        next_token: Option<&str>,
    ) -> Result<StreamPage> {
        let response = self
            .client
            .describe_log_streams()
            .log_group_name(log_group_name)
            .log_stream_name_prefix(log_stream_name_prefix)
            .descending(true)
            .set_next_token(next_token.map(str::to_string))
            .send()
            .await
            .with_context(|| {
                format!(
                    "Failed to list log streams with prefix {} for log group: {}",
                    log_stream_name_prefix, log_group_name
                )
            })?;

        let stream_names = response
            .log_streams
            .unwrap_or_default()
            .into_iter()
            .filter_map(|stream| stream.log_stream_name)
            .collect();

        Ok(StreamPage::new(stream_names, response.next_token))
    }

    async fn get_log_events(
        &self,
        log_group_name: &str,
        log_stream_name: &str,
        cursor: &EventCursor,
    ) -> Result<EventPage> {
        let mut request = self
            .client
            .get_log_events()
            .log_group_name(log_group_name)
            .log_stream_name(log_stream_name);

        request = match cursor {
            EventCursor::FromHead => request.start_from_head(true),
            EventCursor::Forward(token) => request.next_token(token),
        };

        let response = request.send().await.with_context(|| {
            format!(
                "Failed to get log events from stream {} in log group: {}",
                log_stream_name, log_group_name
            )
        })?;

        let events = response
            .events
            .unwrap_or_default()
            .into_iter()
            .map(|event| {
                LogEvent::with_ingestion_time(
                    event.timestamp.unwrap_or(0),
                    event.message.unwrap_or_default(),
                    event.ingestion_time.unwrap_or(0),
                    log_stream_name.to_string(),
                )
            })
            .collect();

        Ok(EventPage::new(events, response.next_forward_token))
    }
}
