#![warn(clippy::all, rust_2018_idioms)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::prelude::*;

use cwlogs_fetch::app::cli::Args;
use cwlogs_fetch::app::data_plane::cloudwatch_logs::CloudWatchLogsClient;
use cwlogs_fetch::app::runner::run;
use cwlogs_fetch::app::settings::Settings;
use cwlogs_fetch::log_info;

const DEFAULT_FILTER: &str = "cwlogs_fetch=info,aws_config=warn,aws_sigv4=warn,aws_smithy_runtime=warn,aws_smithy_runtime_api=warn,aws_smithy_http=warn,hyper=warn";
const VERBOSE_FILTER: &str = "cwlogs_fetch=debug,aws_config=info,aws_sigv4=warn,aws_smithy_runtime=info,aws_smithy_runtime_api=warn,aws_smithy_http=warn,hyper=warn";

fn log_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "", "cwlogs-fetch").map(|dirs| dirs.data_dir().join("logs"))
}

/// File-based logging; stdout is reserved for fetched events.
fn init_logging(verbose: bool) -> Result<PathBuf> {
    let log_dir = log_dir().context("Could not determine a data directory for logs")?;
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {:?}", log_dir))?;

    let log_path = log_dir.join("cwlogs-fetch.log");
    let file = std::fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {:?}", log_path))?;

    // Owner read/write only
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Ok(metadata) = file.metadata() {
            let mut perms = metadata.permissions();
            perms.set_mode(0o600);
            if let Err(e) = std::fs::set_permissions(&log_path, perms) {
                eprintln!("[SECURITY] Failed to set log file permissions: {}", e);
            }
        }
    }

    // RUST_LOG wins over the built-in filters
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => tracing_subscriber::EnvFilter::builder()
            .parse(if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER })
            .context("Failed to parse env filter")?,
    };

    let subscriber = tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false), // No ANSI colors in file
    );

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    // Must come after the subscriber so log records have somewhere to go
    tracing_log::LogTracer::init().context("Failed to initialize log-to-tracing bridge")?;

    Ok(log_path)
}

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        let crash_msg = format!(
            "cwlogs-fetch crashed!\n\
             Panic occurred at: {}\n\
             Details: {}\n\
             Backtrace:\n{:?}\n",
            panic_info
                .location()
                .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
                .unwrap_or_else(|| "unknown location".to_string()),
            panic_info
                .payload()
                .downcast_ref::<&str>()
                .copied()
                .or_else(|| panic_info.payload().downcast_ref::<String>().map(|s| s.as_str()))
                .unwrap_or("unknown panic"),
            std::backtrace::Backtrace::force_capture()
        );

        eprintln!("\n{}", crash_msg);

        if let Some(log_dir) = log_dir() {
            let _ = std::fs::create_dir_all(&log_dir);
            let crash_log_path = log_dir.join("crash.log");

            if let Ok(mut file) = std::fs::OpenOptions::new()
                .append(true)
                .create(true)
                .open(&crash_log_path)
            {
                use std::io::Write;
                let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
                let _ = writeln!(file, "\n=== CRASH at {} ===\n{}", timestamp, crash_msg);
                eprintln!("Crash log written to: {:?}", crash_log_path);
            }
        }
    }));
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    setup_panic_handler();

    let args = Args::parse();

    if let Err(e) = init_logging(args.verbose) {
        eprintln!("Logging disabled: {:#}", e);
    }

    log_info!(
        "cwlogs-fetch {} starting, args: {:?}",
        env!("CARGO_PKG_VERSION"),
        args
    );

    let settings = Settings::load(args.config.as_deref())?;
    let today = chrono::Local::now().date_naive();

    run(
        args,
        &settings,
        today,
        |request| {
            let profile = request.profile.clone();
            let region = request.region.clone();
            async move { CloudWatchLogsClient::from_profile(&profile, region.as_deref()).await }
        },
        &mut std::io::stdout(),
    )
    .await?;

    Ok(())
}
