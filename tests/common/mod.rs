//! Scripted stand-in for the CloudWatch Logs API.
//!
//! Stream pages are queued per day prefix and event pages per stream name, so a
//! test can describe a whole log group up front and then inspect every call the
//! fetcher made.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use cwlogs_fetch::app::data_plane::cloudwatch_logs::{
    EventCursor, EventPage, LogEvent, LogsApi, StreamPage,
};

/// One recorded API call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    DescribeLogStreams {
        group: String,
        prefix: String,
        next_token: Option<String>,
    },
    GetLogEvents {
        group: String,
        stream: String,
        cursor: EventCursor,
    },
}

#[derive(Default)]
pub struct MockLogs {
    stream_pages: Mutex<HashMap<String, VecDeque<StreamPage>>>,
    event_pages: Mutex<HashMap<String, VecDeque<EventPage>>>,
    missing_groups: Mutex<Vec<String>>,
    calls: Mutex<Vec<Call>>,
}

impl MockLogs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a `DescribeLogStreams` page for a day prefix
    pub fn with_stream_page(self, prefix: &str, page: StreamPage) -> Self {
        self.stream_pages
            .lock()
            .unwrap()
            .entry(prefix.to_string())
            .or_default()
            .push_back(page);
        self
    }

    /// Queue a `GetLogEvents` page for a stream
    pub fn with_event_page(self, stream: &str, page: EventPage) -> Self {
        self.event_pages
            .lock()
            .unwrap()
            .entry(stream.to_string())
            .or_default()
            .push_back(page);
        self
    }

    /// Make every call against `group` fail like a nonexistent log group
    pub fn with_missing_group(self, group: &str) -> Self {
        self.missing_groups.lock().unwrap().push(group.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn describe_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| matches!(call, Call::DescribeLogStreams { .. }))
            .collect()
    }

    pub fn get_events_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| matches!(call, Call::GetLogEvents { .. }))
            .collect()
    }

    /// Distinct prefixes passed to `DescribeLogStreams`, in first-seen order
    pub fn prefixes(&self) -> Vec<String> {
        let mut prefixes: Vec<String> = Vec::new();
        for call in self.calls() {
            if let Call::DescribeLogStreams { prefix, .. } = call {
                if !prefixes.contains(&prefix) {
                    prefixes.push(prefix);
                }
            }
        }
        prefixes
    }

    fn check_group(&self, group: &str) -> Result<()> {
        if self.missing_groups.lock().unwrap().iter().any(|g| g == group) {
            return Err(anyhow!(
                "ResourceNotFoundException: The specified log group does not exist."
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl LogsApi for MockLogs {
    async fn describe_log_streams(
        &self,
        log_group_name: &str,
        log_stream_name_prefix: &str,
        next_token: Option<&str>,
    ) -> Result<StreamPage> {
        self.calls.lock().unwrap().push(Call::DescribeLogStreams {
            group: log_group_name.to_string(),
            prefix: log_stream_name_prefix.to_string(),
            next_token: next_token.map(str::to_string),
        });
        self.check_group(log_group_name)?;

        // Days with nothing scripted have no streams
        Ok(self
            .stream_pages
            .lock()
            .unwrap()
            .get_mut(log_stream_name_prefix)
            .and_then(VecDeque::pop_front)
            .unwrap_or_default())
    }

    async fn get_log_events(
        &self,
        log_group_name: &str,
        log_stream_name: &str,
        cursor: &EventCursor,
    ) -> Result<EventPage> {
        self.calls.lock().unwrap().push(Call::GetLogEvents {
            group: log_group_name.to_string(),
            stream: log_stream_name.to_string(),
            cursor: cursor.clone(),
        });
        self.check_group(log_group_name)?;

        self.event_pages
            .lock()
            .unwrap()
            .get_mut(log_stream_name)
            .and_then(VecDeque::pop_front)
            .ok_or_else(|| anyhow!("no scripted event page left for {}", log_stream_name))
    }
}

pub fn event(timestamp: i64, message: &str, stream: &str) -> LogEvent {
    LogEvent::new(timestamp, message.to_string(), stream.to_string())
}

pub fn token(value: &str) -> Option<String> {
    Some(value.to_string())
}
