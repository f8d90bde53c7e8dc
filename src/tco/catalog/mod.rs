//! GTIN catalog module

mod api;
mod commands;
mod fetcher;
mod models;

pub use commands::{fetch_catalog, run_fetch_command, FetchOptions};
pub use fetcher::{CatalogFetcher, FetchSummary, StopReason};
pub use models::{CatalogData, CatalogResponse, PageMeta, PageRequest, Product};
