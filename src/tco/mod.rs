//! TCO Certified API client module
//!
//! Token exchange, catalog pagination and credential resolution.

mod auth;
pub mod catalog;
mod client;
mod credentials;
pub mod pagination;

pub use catalog::{
    fetch_catalog, run_fetch_command, CatalogFetcher, CatalogResponse, FetchOptions,
    FetchSummary, PageMeta, PageRequest, Product, StopReason,
};
pub use client::{TcoClient, Token};
pub use credentials::{CredentialResolver, Credentials};
pub use pagination::PageSelection;
