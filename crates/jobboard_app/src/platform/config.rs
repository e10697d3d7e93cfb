//! Startup configuration: `.env`, environment variables, then command-line flags.

use std::env;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use jobboard_client::FetchSettings;
use jobboard_core::DEFAULT_PAGE_SIZE;

use super::logging::LogDestination;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

const ENV_API_URL: &str = "JOBBOARD_API_URL";
const ENV_PAGE_SIZE: &str = "JOBBOARD_PAGE_SIZE";
const ENV_REQUEST_TIMEOUT: &str = "JOBBOARD_REQUEST_TIMEOUT_SECS";

#[derive(Parser, Debug)]
#[command(name = "jobboard")]
#[command(about = "Terminal dashboard for browsing and refreshing aggregated job listings")]
#[command(version)]
pub struct Args {
    /// Base URL of the job API (overrides JOBBOARD_API_URL)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Jobs per page, fixed for the session (overrides JOBBOARD_PAGE_SIZE)
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Per-request timeout in seconds (overrides JOBBOARD_REQUEST_TIMEOUT_SECS)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Where log records go
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log: LogDestination,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub api_url: String,
    pub page_size: u32,
    pub request_timeout: Duration,
}

impl DashboardConfig {
    /// Loads `.env` if present, then resolves every setting.
    pub fn load(args: &Args) -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::resolve(args, |key| env::var(key).ok())
    }

    fn resolve(args: &Args, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_url = match &args.api_url {
            Some(url) => url.clone(),
            None => lookup(ENV_API_URL).unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        };

        let page_size = match args.page_size {
            Some(size) => size,
            None => match lookup(ENV_PAGE_SIZE) {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .with_context(|| format!("{ENV_PAGE_SIZE} must be a positive number"))?,
                None => DEFAULT_PAGE_SIZE,
            },
        };
        if page_size == 0 {
            bail!("page size must be greater than zero");
        }

        let timeout_secs = match args.timeout_secs {
            Some(secs) => secs,
            None => match lookup(ENV_REQUEST_TIMEOUT) {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .with_context(|| format!("{ENV_REQUEST_TIMEOUT} must be a number of seconds"))?,
                None => DEFAULT_REQUEST_TIMEOUT_SECS,
            },
        };
        if timeout_secs == 0 {
            bail!("request timeout must be at least one second");
        }

        Ok(Self {
            api_url,
            page_size,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            request_timeout: self.request_timeout,
            ..FetchSettings::default()
        }
    }
}
