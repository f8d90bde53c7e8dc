//! Catalog download command handler

use log::{error, info};
use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Cli;
use crate::error::Result;
use crate::output::save_products;
use crate::tco::pagination::PageSelection;
use crate::tco::{CredentialResolver, Credentials, TcoClient};
use crate::ui::{create_fetch_spinner, finish_fetch_spinner};

use super::fetcher::{CatalogFetcher, FetchSummary};

/// Options for one catalog download
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub selection: PageSelection,
    pub product_type: String,
    pub include_jsonld: bool,
    pub output: PathBuf,
    pub quiet: bool,
}

/// Run the catalog download described by the CLI arguments
///
/// Configuration and authentication failures are returned as errors.
/// Page failures and write failures are reported and end in `Ok`.
pub async fn run_fetch_command(cli: &Cli) -> Result<FetchSummary> {
    // Validated before prompting or touching the network
    let selection = PageSelection::from_args(cli.page, cli.page_range.as_deref())?;

    let options = FetchOptions {
        selection,
        product_type: cli.product_type.clone(),
        include_jsonld: cli.jsonld,
        output: cli.output.clone(),
        quiet: cli.batch,
    };

    let credentials = CredentialResolver::new(cli.batch).resolve(cli.username.as_deref())?;
    let client = TcoClient::new(&cli.api_url, cli.timeout.map(Duration::from_secs));

    fetch_catalog(&client, credentials, &options).await
}

/// Authenticate, fetch the selected pages and save the products
pub async fn fetch_catalog(
    client: &TcoClient,
    credentials: Credentials,
    options: &FetchOptions,
) -> Result<FetchSummary> {
    let token = client.authenticate(&credentials).await?;
    drop(credentials);

    info!(
        "Fetching {} of product type '{}' (jsonld: {})",
        options.selection, options.product_type, options.include_jsonld
    );

    let spinner = create_fetch_spinner(&options.selection, options.quiet);
    let summary = CatalogFetcher::new(
        client,
        &token,
        &options.product_type,
        options.include_jsonld,
    )
    .with_spinner(spinner.clone())
    .run(options.selection)
    .await;

    finish_fetch_spinner(spinner, summary.products.len(), summary.is_aborted());

    // Operator messages stay on stderr
    match save_products(&summary.products, &options.output) {
        Ok(path) => eprintln!("All product data saved to '{}'", path.display()),
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e);
        }
    }

    info!(
        "Requested {} page(s), stop reason: {:?}",
        summary.pages_requested.len(),
        summary.stop_reason
    );
    Ok(summary)
}
