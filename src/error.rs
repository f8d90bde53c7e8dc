use std::fmt;

/// Error type for catalog download operations
#[derive(Debug)]
pub enum GtinError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// Invalid arguments or missing credentials, detected before any request
    Config(String),
    /// Token exchange failed
    Authentication(String),
    /// A catalog page could not be fetched
    PageFetch { page: u32, message: String },
    /// Result file could not be written
    OutputWrite { path: String, message: String },
    /// JSON parsing error
    Json(String),
}

impl fmt::Display for GtinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GtinError::Http(e) => write!(f, "HTTP request failed: {}", e),
            GtinError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            GtinError::Config(msg) => write!(f, "Configuration error: {}", msg),
            GtinError::Authentication(msg) => write!(f, "Authentication failed: {}", msg),
            GtinError::PageFetch { page, message } => {
                write!(f, "Request failed on page {}: {}", page, message)
            }
            GtinError::OutputWrite { path, message } => {
                write!(f, "Failed to save output file '{}': {}", path, message)
            }
            GtinError::Json(msg) => write!(f, "JSON error: {}", msg),
        }
    }
}

impl std::error::Error for GtinError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GtinError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GtinError {
    fn from(err: reqwest::Error) -> Self {
        GtinError::Http(err)
    }
}

impl From<serde_json::Error> for GtinError {
    fn from(err: serde_json::Error) -> Self {
        GtinError::Json(err.to_string())
    }
}

impl GtinError {
    /// Wrap a lower-level failure as a page fetch error for `page`
    pub fn page_fetch(page: u32, cause: GtinError) -> Self {
        match cause {
            e @ GtinError::PageFetch { .. } => e,
            other => GtinError::PageFetch {
                page,
                message: other.to_string(),
            },
        }
    }

    /// Wrap a lower-level failure as an authentication error
    pub fn authentication(cause: GtinError) -> Self {
        match cause {
            e @ GtinError::Authentication(_) => e,
            other => GtinError::Authentication(other.to_string()),
        }
    }
}

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, GtinError>;
