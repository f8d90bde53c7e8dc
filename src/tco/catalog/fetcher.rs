//! Sequential page fetching and accumulation

use indicatif::ProgressBar;
use log::{debug, info, warn};

use crate::error::GtinError;
use crate::tco::pagination::PageSelection;
use crate::tco::{TcoClient, Token};
use crate::ui::{notify, show_page};

use super::models::{PageMeta, PageRequest, Product};

/// Why the fetch loop ended
#[derive(Debug)]
pub enum StopReason {
    /// Every queued page was requested
    Exhausted,
    /// The service reported the last page (dynamic mode)
    LastPage(u32),
    /// A page came back without products (dynamic mode)
    EmptyPage(u32),
    /// A request failed; later pages were not requested
    Aborted(GtinError),
}

/// Outcome of a fetch run
#[derive(Debug)]
pub struct FetchSummary {
    /// Products in fetch order
    pub products: Vec<Product>,
    /// Page numbers requested, in order
    pub pages_requested: Vec<u32>,
    pub stop_reason: StopReason,
}

impl FetchSummary {
    pub fn is_aborted(&self) -> bool {
        matches!(self.stop_reason, StopReason::Aborted(_))
    }
}

/// Fetches catalog pages one at a time and accumulates their products
pub struct CatalogFetcher<'a> {
    client: &'a TcoClient,
    token: &'a Token,
    product_type: String,
    include_jsonld: bool,
    spinner: Option<ProgressBar>,
}

impl<'a> CatalogFetcher<'a> {
    pub fn new(
        client: &'a TcoClient,
        token: &'a Token,
        product_type: &str,
        include_jsonld: bool,
    ) -> Self {
        Self {
            client,
            token,
            product_type: product_type.to_string(),
            include_jsonld,
            spinner: None,
        }
    }

    /// Report progress on the given spinner
    pub fn with_spinner(mut self, spinner: Option<ProgressBar>) -> Self {
        self.spinner = spinner;
        self
    }

    fn page_request(&self, page: u32) -> PageRequest {
        PageRequest {
            page,
            product_type: self.product_type.clone(),
            include_jsonld: self.include_jsonld,
        }
    }

    /// Fetch the selected pages
    ///
    /// Each request is awaited before the next one is issued. The first
    /// failed request stops the loop; products gathered so far are kept.
    pub async fn run(&self, selection: PageSelection) -> FetchSummary {
        let dynamic = selection.is_dynamic();
        let mut products: Vec<Product> = Vec::new();
        let mut pages_requested = Vec::new();

        if dynamic {
            notify(self.spinner.as_ref(), "Fetching all available pages...");
        }

        for page in selection.pages() {
            show_page(self.spinner.as_ref(), page, products.len());
            pages_requested.push(page);

            let request = self.page_request(page);
            let response = match self.client.fetch_page(self.token, &request).await {
                Ok(response) => response,
                Err(e) => {
                    warn!("Stopping after failure on page {}: {}", page, e);
                    notify(self.spinner.as_ref(), &e.to_string());
                    return FetchSummary {
                        products,
                        pages_requested,
                        stop_reason: StopReason::Aborted(e),
                    };
                }
            };

            let (page_products, meta) = response.into_parts();

            if page_products.is_empty() {
                warn!("No products found on page {}", page);
                notify(
                    self.spinner.as_ref(),
                    &format!("No products found on page {}.", page),
                );
                if dynamic {
                    return FetchSummary {
                        products,
                        pages_requested,
                        stop_reason: StopReason::EmptyPage(page),
                    };
                }
                continue;
            }

            debug!("Page {} returned {} products", page, page_products.len());
            products.extend(page_products);

            if dynamic {
                let meta = meta
                    .as_ref()
                    .map(PageMeta::from_value)
                    .unwrap_or_default();
                info!(
                    "Page {} / {} fetched",
                    meta.current_page(page),
                    meta.total_pages(page)
                );
                if meta.is_last_page(page) {
                    notify(self.spinner.as_ref(), "All pages retrieved.");
                    return FetchSummary {
                        products,
                        pages_requested,
                        stop_reason: StopReason::LastPage(page),
                    };
                }
            }
        }

        FetchSummary {
            products,
            pages_requested,
            stop_reason: StopReason::Exhausted,
        }
    }
}
