//! gtinctl - Download the TCO Certified GTIN product catalog
//!
//! Authenticates against the TCO Certified API, walks the GTIN catalog page
//! by page and writes the collected product records to a JSON file.
//!
//! # Features
//!
//! - Credentials from flags, environment or an interactive prompt
//! - Single page, page range, or all pages until the service reports the end
//! - Partial results are saved when a page request fails
//!
//! # Example
//!
//! ```bash
//! # Fetch all Desktops into products.json
//! gtinctl
//!
//! # Fetch Displays from page 3 with JSON-LD included
//! gtinctl --product-type Displays --page 3 --jsonld
//!
//! # Fetch pages 2 to 5 into a custom file without prompting
//! TCO_USERNAME=me TCO_PASSWORD=secret gtinctl --page-range 2-5 -o my.json --batch
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod tco;
pub mod ui;

pub use cli::Cli;
pub use error::{GtinError, Result};
pub use output::save_products;
pub use tco::{
    fetch_catalog, run_fetch_command, CatalogFetcher, CredentialResolver, Credentials,
    FetchOptions, FetchSummary, PageSelection, Product, StopReason, TcoClient, Token,
};
