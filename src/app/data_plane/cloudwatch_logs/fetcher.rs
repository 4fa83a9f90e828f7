//! Log group reader
//!
//! Walks every stream whose name starts with a day in the requested range and
//! collects all of its events, oldest first within each stream. Calls are issued
//! one at a time and any API error aborts the whole fetch.

#![warn(clippy::all, rust_2018_idioms)]

use anyhow::Result;

use super::client::LogsApi;
use super::date_range::{day_prefix, DateRange};
use super::types::{EventCursor, LogEvent};

/// Collect the events of every stream prefixed by a day in `range`.
///
/// Streams are visited day by day, then in the order `DescribeLogStreams`
/// returns them. An empty range yields an empty result without calling the API.
pub async fn fetch_log_events<C>(
    client: &C,
    log_group_name: &str,
    range: DateRange,
) -> Result<Vec<LogEvent>>
where
    C: LogsApi + ?Sized,
{
    log_info!(
        "Fetching log group {} for {} day(s) from {} to {}",
        log_group_name,
        range.num_days(),
        range.from,
        range.to
    );

    let mut result = Vec::new();

    for day in range.days() {
        let prefix = day_prefix(day);
        let mut next_token: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let page = client
                .describe_log_streams(log_group_name, &prefix, next_token.as_deref())
                .await?;
            pages += 1;

            trace_debug!(
                "Stream page {} for prefix {}: {} stream(s), more: {}",
                pages,
                prefix,
                page.stream_names.len(),
                page.next_token.is_some()
            );

            for stream_name in &page.stream_names {
                let events = fetch_stream_events(client, log_group_name, stream_name).await?;
                result.extend(events);
            }

            // An empty token would restart from the first page
            match page.next_token.filter(|token| !token.is_empty()) {
                Some(token) => next_token = Some(token),
                None => break,
            }
        }
    }

    log_info!(
        "Fetched {} event(s) from log group {}",
        result.len(),
        log_group_name
    );

    Ok(result)
}

/// Read one stream from its oldest event.
///
/// The service signals the end of a stream by handing back the forward token
/// it was given, so paging stops on a repeated token rather than an empty page.
pub async fn fetch_stream_events<C>(
    client: &C,
    log_group_name: &str,
    log_stream_name: &str,
) -> Result<Vec<LogEvent>>
where
    C: LogsApi + ?Sized,
{
    let first = client
        .get_log_events(log_group_name, log_stream_name, &EventCursor::FromHead)
        .await?;
    let mut events = first.events;
    let mut pages = 1usize;

    let Some(mut previous) = first.next_forward_token else {
        trace_warn!(
            "No forward token for stream {}, stopping after first page",
            log_stream_name
        );
        return Ok(events);
    };

    loop {
        let page = client
            .get_log_events(
                log_group_name,
                log_stream_name,
                &EventCursor::Forward(previous.clone()),
            )
            .await?;
        pages += 1;
        events.extend(page.events);

        match page.next_forward_token {
            Some(token) if token != previous => previous = token,
            _ => break,
        }
    }

    trace_debug!(
        "Stream {} exhausted after {} page(s), {} event(s)",
        log_stream_name,
        pages,
        events.len()
    );

    Ok(events)
}
