//! GTIN catalog API operations

use log::debug;

use crate::config::api;
use crate::error::{GtinError, Result};
use crate::tco::{TcoClient, Token};

use super::models::{CatalogResponse, PageRequest};

impl TcoClient {
    /// Fetch a single catalog page
    ///
    /// Transport errors, non-success statuses and undecodable bodies all
    /// surface as `GtinError::PageFetch` for the requested page.
    pub async fn fetch_page(
        &self,
        token: &Token,
        request: &PageRequest,
    ) -> Result<CatalogResponse> {
        let url = format!("{}?{}", self.endpoint(api::GTIN), request.query_string());
        debug!("Fetching page {} from: {}", request.page, url);

        let response = self
            .post_authorized(&url, token)
            .send()
            .await
            .map_err(|e| GtinError::page_fetch(request.page, e.into()))?;

        let catalog: CatalogResponse = self
            .parse_api_response(response, "GTIN catalog")
            .await
            .map_err(|e| GtinError::page_fetch(request.page, e))?;

        Ok(catalog)
    }
}
