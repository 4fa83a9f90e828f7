//! cwlogs-fetch - read a CloudWatch Logs group over a range of days
//!
//! Log streams in the groups this tool targets are named by ingestion day
//! (`YYYY/MM/DD/...`). For every day in an inclusive range the tool lists the
//! streams carrying that day's prefix and reads each of them from its oldest
//! event, concatenating everything in the order the service returns it.
//!
//! # Architecture Overview
//!
//! - **Client Layer** ([`app::data_plane::cloudwatch_logs::client`]): the
//!   [`LogsApi`](app::data_plane::cloudwatch_logs::LogsApi) trait and its AWS SDK
//!   implementation, built from a named credential profile
//! - **Pagination** ([`app::data_plane::cloudwatch_logs::fetcher`]): sequential
//!   page walks over streams and events; no retries, first error aborts
//! - **Front End** ([`app::cli`], [`app::settings`], [`app::output`]): argument
//!   parsing, per-user defaults and stdout rendering
//!
//! All API calls are issued one at a time; nothing is persisted.

#![warn(clippy::all, rust_2018_idioms)]

// Include logging macros first
#[macro_use]
pub mod logging_macros;

pub mod app;
