use crate::auth::jwt::JwtConfig;

/// Default public base URL for shared report links.
const DEFAULT_REPORT_BASE_URL: &str = "http://localhost:5173/informe";

/// Default upstream endpoint for the car image lookup proxy.
const DEFAULT_CAR_IMAGERY_URL: &str = "https://www.carimagery.com/api.asmx/GetImageUrl";

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have sensible defaults suitable for
/// local development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry window).
    pub jwt: JwtConfig,
    /// Public base URL embedded in shared report links; the share token is
    /// appended as the final path segment.
    pub report_base_url: String,
    /// Upstream endpoint the image lookup proxy forwards to.
    pub car_imagery_url: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                          |
    /// |------------------------|--------------------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                                        |
    /// | `PORT`                 | `3000`                                           |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`                          |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                             |
    /// | `REPORT_BASE_URL`      | `http://localhost:5173/informe`                  |
    /// | `CAR_IMAGERY_URL`      | `https://www.carimagery.com/api.asmx/GetImageUrl`|
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let report_base_url = std::env::var("REPORT_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_REPORT_BASE_URL.into());

        let car_imagery_url = std::env::var("CAR_IMAGERY_URL")
            .unwrap_or_else(|_| DEFAULT_CAR_IMAGERY_URL.into());

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt,
            report_base_url,
            car_imagery_url,
        }
    }
}
