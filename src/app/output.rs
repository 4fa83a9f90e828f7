//! Rendering of fetched events to stdout.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat};
use serde::{Deserialize, Serialize};

use crate::app::data_plane::cloudwatch_logs::LogEvent;

/// How fetched events are written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON array of events
    #[default]
    Json,
    /// One tab-separated line per event: timestamp, stream, message
    Lines,
}

/// Write all events in the given format, followed by a trailing newline.
pub fn write_events<W: Write>(writer: &mut W, events: &[LogEvent], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, events)
                .context("Failed to serialize log events")?;
            writeln!(writer)?;
        }
        OutputFormat::Lines => {
            for event in events {
                writeln!(
                    writer,
                    "{}\t{}\t{}",
                    format_timestamp(event.timestamp),
                    event.log_stream_name,
                    event.message.trim_end_matches(['\r', '\n'])
                )?;
            }
        }
    }
    writer.flush().context("Failed to flush output")?;
    Ok(())
}

/// RFC 3339 UTC rendering of a millisecond timestamp, or the raw number if out of range
pub fn format_timestamp(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_else(|| millis.to_string())
}
