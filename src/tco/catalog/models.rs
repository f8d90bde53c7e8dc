//! GTIN catalog data models

use serde::Deserialize;
use serde_json::Value;

/// Product record, kept opaque
pub type Product = serde_json::Map<String, Value>;

/// Parameters of one catalog page request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub product_type: String,
    pub include_jsonld: bool,
}

impl PageRequest {
    /// Query string for this request (without the leading `?`)
    pub fn query_string(&self) -> String {
        format!(
            "page={}&product_type={}&jsonld={}",
            self.page,
            urlencoding::encode(&self.product_type),
            self.include_jsonld
        )
    }
}

/// Response from the GTIN catalog endpoint
///
/// Every level is optional: missing `data` means no products, missing
/// `meta` means no pagination metadata. `meta` stays raw until dynamic
/// mode reads it, so a malformed value never costs a page its products.
#[derive(Deserialize, Debug, Default)]
pub struct CatalogResponse {
    #[serde(default)]
    pub data: Option<CatalogData>,
    #[serde(default)]
    pub meta: Option<Value>,
}

/// Product payload of a catalog page
#[derive(Deserialize, Debug, Default)]
pub struct CatalogData {
    #[serde(default)]
    pub products: Option<Vec<Product>>,
}

/// Pagination metadata of a catalog page
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub page: Option<u32>,
    pub total_pages: Option<u32>,
}

impl CatalogResponse {
    /// Split into products and raw metadata
    pub fn into_parts(self) -> (Vec<Product>, Option<Value>) {
        let products = self.data.and_then(|d| d.products).unwrap_or_default();
        (products, self.meta)
    }
}

impl PageMeta {
    /// Read `page` and `totalPages` from a raw `meta` value
    ///
    /// A field that is not a non-negative integer fitting in `u32` is
    /// treated as missing.
    pub fn from_value(meta: &Value) -> Self {
        let field = |name: &str| {
            meta.get(name)
                .and_then(Value::as_u64)
                .and_then(|n| u32::try_from(n).ok())
        };
        Self {
            page: field("page"),
            total_pages: field("totalPages"),
        }
    }

    /// Current page as reported, falling back to the requested page
    pub fn current_page(&self, requested: u32) -> u32 {
        self.page.unwrap_or(requested)
    }

    /// Total pages as reported, falling back to the current page
    pub fn total_pages(&self, requested: u32) -> u32 {
        self.total_pages
            .unwrap_or_else(|| self.current_page(requested))
    }

    /// Whether `requested` is the last page
    ///
    /// Missing fields resolve so that absent metadata ends the run.
    pub fn is_last_page(&self, requested: u32) -> bool {
        self.current_page(requested) >= self.total_pages(requested)
    }
}
