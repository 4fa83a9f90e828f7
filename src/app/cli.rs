//! Command line arguments and their resolution into a fetch request.

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;

use crate::app::data_plane::cloudwatch_logs::{parse_date, DateRange};
use crate::app::output::OutputFormat;
use crate::app::settings::Settings;

/// Profile used when neither the command line nor the settings file names one
pub const DEFAULT_PROFILE: &str = "default";

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_BRANCH"),
    " ",
    env!("GIT_COMMIT"),
    ")"
);

#[derive(Parser, Debug)]
#[command(author, version, long_version = LONG_VERSION, about = "Get CloudWatch Logs")]
pub struct Args {
    /// First day to fetch, YYYY-MM-DD (defaults to today)
    #[arg(long = "from_date", value_name = "YYYY-MM-DD")]
    pub from_date: Option<String>,

    /// Last day to fetch, inclusive, YYYY-MM-DD (defaults to today)
    #[arg(long = "to_date", value_name = "YYYY-MM-DD")]
    pub to_date: Option<String>,

    /// Log group name
    #[arg(long = "group_name")]
    pub group_name: String,

    /// AWS profile name to access [default: default]
    #[arg(long)]
    pub profile: Option<String>,

    /// Region override; the profile's region is used otherwise
    #[arg(long)]
    pub region: Option<String>,

    /// Output format [default: json]
    #[arg(long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Settings file to use instead of the per-user config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log debug details to the log file
    #[arg(short, long)]
    pub verbose: bool,
}

/// Everything needed to run one fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub group_name: String,
    pub range: DateRange,
    pub profile: String,
    pub region: Option<String>,
    pub output: OutputFormat,
}

impl Args {
    /// Validate dates and merge in settings. `today` fills in missing dates.
    ///
    /// Fails before any AWS call when a date is malformed.
    pub fn resolve(self, settings: &Settings, today: NaiveDate) -> Result<FetchRequest> {
        let from = self
            .from_date
            .as_deref()
            .map(parse_date)
            .transpose()?
            .unwrap_or(today);
        let to = self
            .to_date
            .as_deref()
            .map(parse_date)
            .transpose()?
            .unwrap_or(today);

        Ok(FetchRequest {
            group_name: self.group_name,
            range: DateRange::new(from, to),
            profile: self
                .profile
                .or_else(|| settings.profile.clone())
                .unwrap_or_else(|| DEFAULT_PROFILE.to_string()),
            region: self.region.or_else(|| settings.region.clone()),
            output: self.output.or(settings.output).unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_command_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["cwlogs-fetch", "--group_name", "app-logs"]).unwrap();
        let request = args.resolve(&Settings::default(), today()).unwrap();

        assert_eq!(request.group_name, "app-logs");
        assert_eq!(request.range, DateRange::single(today()));
        assert_eq!(request.profile, "default");
        assert_eq!(request.region, None);
        assert_eq!(request.output, OutputFormat::Json);
    }

    #[test]
    fn test_group_name_required() {
        assert!(Args::try_parse_from(["cwlogs-fetch"]).is_err());
    }

    #[test]
    fn test_explicit_range() {
        let args = Args::try_parse_from([
            "cwlogs-fetch",
            "--group_name",
            "app-logs",
            "--from_date",
            "2024-01-01",
            "--to_date",
            "2024-01-02",
        ])
        .unwrap();
        let request = args.resolve(&Settings::default(), today()).unwrap();

        assert_eq!(request.range.num_days(), 2);
        assert_eq!(request.range.from, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn test_malformed_date() {
        let args = Args::try_parse_from([
            "cwlogs-fetch",
            "--group_name",
            "app-logs",
            "--to_date",
            "2024-13-40",
        ])
        .unwrap();
        let err = args.resolve(&Settings::default(), today()).unwrap_err();

        assert!(err.to_string().contains("should be YYYY-MM-DD"));
    }

    #[test]
    fn test_flags_override_settings() {
        let settings = Settings {
            profile: Some("from-file".to_string()),
            region: Some("us-west-2".to_string()),
            output: Some(OutputFormat::Lines),
        };
        let args = Args::try_parse_from([
            "cwlogs-fetch",
            "--group_name",
            "g",
            "--profile",
            "from-flag",
        ])
        .unwrap();
        let request = args.resolve(&settings, today()).unwrap();

        assert_eq!(request.profile, "from-flag");
        assert_eq!(request.region.as_deref(), Some("us-west-2"));
        assert_eq!(request.output, OutputFormat::Lines);
    }
}
