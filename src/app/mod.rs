//! Core application modules for cwlogs-fetch.
//!
//! # Module Organization
//!
//! - [`data_plane`] - CloudWatch Logs client and the day-by-day log group reader
//! - [`cli`] - command line arguments and their resolution into a [`cli::FetchRequest`]
//! - [`settings`] - optional per-user TOML defaults
//! - [`output`] - JSON and line rendering of fetched events
//! - [`runner`] - one invocation from parsed arguments to printed events
//! - [`sdk_errors`] - classification of AWS failures for the final error hint

pub mod cli;
pub mod data_plane;
pub mod output;
pub mod runner;
pub mod sdk_errors;
pub mod settings;
