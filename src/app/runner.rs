//! One complete invocation: resolve arguments, connect, fetch, print.

use std::future::Future;
use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;

use crate::app::cli::{Args, FetchRequest};
use crate::app::data_plane::cloudwatch_logs::{fetch_log_events, LogsApi};
use crate::app::output::write_events;
use crate::app::sdk_errors::categorize_error;
use crate::app::settings::Settings;

/// Run one fetch and write the events to `out`, returning how many were written.
///
/// `connect` builds the API client from the resolved request. It is only
/// invoked once the arguments are valid, so a malformed date never reaches AWS.
pub async fn run<C, F, Fut, W>(
    args: Args,
    settings: &Settings,
    today: NaiveDate,
    connect: F,
    out: &mut W,
) -> Result<usize>
where
    C: LogsApi,
    F: FnOnce(&FetchRequest) -> Fut,
    Fut: Future<Output = C>,
    W: Write,
{
    let request = args.resolve(settings, today)?;
    let client = connect(&request).await;

    let events = match fetch_log_events(&client, &request.group_name, request.range).await {
        Ok(events) => events,
        Err(e) => {
            let category = categorize_error(&e, "CloudWatchLogs", "fetch");
            log_error!(
                "Fetch of log group {} failed [{}]: {:#}",
                request.group_name,
                category.short_label(),
                e
            );
            eprintln!("{}", category.user_message());
            return Err(e);
        }
    };

    write_events(out, &events, request.output)?;
    log_info!("Wrote {} event(s)", events.len());

    Ok(events.len())
}
