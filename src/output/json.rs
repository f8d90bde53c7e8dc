//! JSON file output

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GtinError, Result};
use crate::tco::Product;

/// Write the products to `path` as pretty-printed JSON
///
/// Overwrites any existing file. An empty list is written as `[]`.
/// Returns the absolute path written.
pub fn save_products(products: &[Product], path: &Path) -> Result<PathBuf> {
    let write_error = |message: String| GtinError::OutputWrite {
        path: path.display().to_string(),
        message,
    };

    let json = serde_json::to_string_pretty(products).map_err(|e| write_error(e.to_string()))?;
    fs::write(path, json).map_err(|e| write_error(e.to_string()))?;

    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    debug!("Wrote {} products to {}", products.len(), absolute.display());
    Ok(absolute)
}
