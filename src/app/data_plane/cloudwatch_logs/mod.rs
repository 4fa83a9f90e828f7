//! CloudWatch Logs Integration Module
//!
//! Reads every event of a log group whose streams are named by ingestion day
//! (`YYYY/MM/DD/...`), over an inclusive range of days.
//!
//! ## Features
//!
//! - Day-prefixed stream discovery with `DescribeLogStreams` pagination
//! - Full stream reads with `GetLogEvents`, oldest event first
//! - A [`LogsApi`] seam so the fetcher runs against the SDK or a test double
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cwlogs_fetch::app::data_plane::cloudwatch_logs::{
//!     fetch_log_events, parse_date, CloudWatchLogsClient, DateRange,
//! };
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = CloudWatchLogsClient::from_profile("default", None).await;
//!
//! let range = DateRange::new(parse_date("2024-01-01")?, parse_date("2024-01-02")?);
//! let events = fetch_log_events(&client, "/aws/lambda/my-function", range).await?;
//!
//! for event in events {
//!     println!("{}: {}", event.timestamp, event.message);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all, rust_2018_idioms)]

pub mod client;
pub mod date_range;
pub mod fetcher;
pub mod types;

// Re-export commonly used types
pub use client::{CloudWatchLogsClient, LogsApi};
pub use date_range::{day_prefix, parse_date, DateRange, DATE_FORMAT_ERROR};
pub use fetcher::{fetch_log_events, fetch_stream_events};
pub use types::{EventCursor, EventPage, LogEvent, StreamPage};
