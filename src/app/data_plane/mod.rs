//! Data Plane Services Module
//!
//! AWS data plane integrations: code that reads data held inside AWS resources,
//! as opposed to discovering or managing the resources themselves.
//!
//! ## Available Services
//!
//! - **CloudWatch Logs**: read every event of a log group over a range of days
//!
//! ## Architecture
//!
//! ```text
//! 1. AWS SDK Client Layer (src/app/data_plane/{service}/client.rs)
//!    └─ SDK client built from a named profile, behind a trait
//!
//! 2. Pagination Layer (src/app/data_plane/{service}/fetcher.rs)
//!    └─ Sequential page walks over the trait, testable without AWS
//! ```

pub mod cloudwatch_logs;

pub use cloudwatch_logs::{CloudWatchLogsClient, LogEvent as CloudWatchLogEvent, LogsApi};
