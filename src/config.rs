/// Configuration constants for the TCO Certified API
pub mod api {
    /// Default API base URL
    pub const BASE_URL: &str = "https://api.tcocertified.com";

    /// Token exchange endpoint
    pub const TOKEN: &str = "token";

    /// GTIN catalog endpoint
    pub const GTIN: &str = "generic/gtin";

    /// Header carrying the bearer token
    pub const AUTH_HEADER: &str = "X-Auth-Token";
}

/// Configuration constants for credentials
pub mod credentials {
    /// Environment variable holding the API username
    pub const USERNAME_ENV_VAR: &str = "TCO_USERNAME";

    /// Environment variable holding the API password
    pub const PASSWORD_ENV_VAR: &str = "TCO_PASSWORD";

    /// Environment variable overriding the API base URL
    pub const API_URL_ENV_VAR: &str = "TCO_API_URL";
}

/// Default values for CLI
pub mod defaults {
    /// Default product type
    pub const PRODUCT_TYPE: &str = "Desktops";

    /// Default output file
    pub const OUTPUT: &str = "products.json";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
