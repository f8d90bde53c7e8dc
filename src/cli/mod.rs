//! CLI argument parsing

use std::path::PathBuf;

use clap::Parser;

use crate::config::{api, credentials, defaults};

/// Download the TCO Certified GTIN product catalog to a JSON file
#[derive(Parser, Debug)]
#[command(name = "gtinctl")]
#[command(version)]
#[command(
    about = "Fetch product certification data from the TCO Certified API",
    long_about = None
)]
pub struct Cli {
    /// Product type to fetch
    #[arg(long, alias = "product_type", default_value = defaults::PRODUCT_TYPE)]
    pub product_type: String,

    /// Include JSON-LD in the response
    #[arg(long, default_value_t = false)]
    pub jsonld: bool,

    /// Fetch only a specific page (e.g. --page 3)
    #[arg(
        long,
        value_parser = clap::value_parser!(u32).range(1..),
        conflicts_with = "page_range"
    )]
    pub page: Option<u32>,

    /// Fetch a range of pages (e.g. --page-range 2-5)
    #[arg(long, alias = "page_range", value_name = "START-END")]
    pub page_range: Option<String>,

    /// Output filename
    #[arg(short, long, default_value = defaults::OUTPUT)]
    pub output: PathBuf,

    /// API username (prompted for if not set)
    #[arg(short, long, env = credentials::USERNAME_ENV_VAR)]
    pub username: Option<String>,

    /// API base URL
    #[arg(long, env = credentials::API_URL_ENV_VAR, default_value = api::BASE_URL)]
    pub api_url: String,

    /// Per-request timeout in seconds (no timeout if not set)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Batch mode: never prompt, hide progress spinner
    #[arg(short, long, default_value_t = false)]
    pub batch: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,
}
