//! CloudWatch Logs Data Types
//!
//! Data structures for log events and the pages returned by the
//! `DescribeLogStreams` and `GetLogEvents` APIs.

#![warn(clippy::all, rust_2018_idioms)]

use serde::{Deserialize, Serialize};

/// A single log event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEvent {
    /// Event timestamp (Unix milliseconds)
    pub timestamp: i64,
    /// Log message content
    pub message: String,
    /// Time when the event was ingested (Unix milliseconds)
    pub ingestion_time: i64,
    /// Name of the log stream this event belongs to
    pub log_stream_name: String,
}

impl LogEvent {
    /// Create a new log event
    pub fn new(timestamp: i64, message: String, log_stream_name: String) -> Self {
        Self {
            timestamp,
            message,
            ingestion_time: timestamp, // Default to same as timestamp
            log_stream_name,
        }
    }

    /// Create log event with ingestion time
    pub fn with_ingestion_time(
        timestamp: i64,
        message: String,
        ingestion_time: i64,
        log_stream_name: String,
    ) -> Self {
        Self {
            timestamp,
            message,
            ingestion_time,
            log_stream_name,
        }
    }
}

/// One page of `DescribeLogStreams` output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamPage {
    /// Stream names in the order the service returned them
    pub stream_names: Vec<String>,
    /// Continuation token; `None` on the last page
    pub next_token: Option<String>,
}

impl StreamPage {
    pub fn new(stream_names: Vec<String>, next_token: Option<String>) -> Self {
        Self {
            stream_names,
            next_token,
        }
    }

    /// Last page: no continuation token
    pub fn last(stream_names: Vec<String>) -> Self {
        Self::new(stream_names, None)
    }
}

/// One page of `GetLogEvents` output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventPage {
    pub events: Vec<LogEvent>,
    /// Forward token. Returning the token that was sent means the stream is exhausted.
    pub next_forward_token: Option<String>,
}

impl EventPage {
    pub fn new(events: Vec<LogEvent>, next_forward_token: Option<String>) -> Self {
        Self {
            events,
            next_forward_token,
        }
    }
}

/// Where a `GetLogEvents` request starts reading
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventCursor {
    /// First page, oldest event first (`startFromHead=true`)
    FromHead,
    /// Continue from a previously returned forward token
    Forward(String),
}
