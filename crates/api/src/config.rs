use lims_core::search::{DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Parse `LOG_FORMAT`. Anything other than `json` means pretty.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
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
    /// Base URL of the LIMS REST backend. Every entity is reached through it.
    pub api_base_url: String,
    /// Timeout for a single backend call in seconds (default: `15`).
    pub backend_timeout_secs: u64,
    /// How long the UI should show a success notice before following
    /// `redirect_to` (default: `1500`).
    pub redirect_delay_ms: u64,
    pub default_page_size: i64,
    pub max_page_size: i64,
    /// Log output format (default: pretty).
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `LIMS_API_BASE_URL`    | `http://localhost:8080/api`|
    /// | `BACKEND_TIMEOUT_SECS` | `15`                       |
    /// | `REDIRECT_DELAY_MS`    | `1500`                     |
    /// | `DEFAULT_PAGE_SIZE`    | `10`                       |
    /// | `MAX_PAGE_SIZE`        | `100`                      |
    /// | `LOG_FORMAT`           | `pretty` (or `json`)       |
    ///
    /// Panics on malformed values so misconfiguration fails at startup.
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

        let api_base_url = std::env::var("LIMS_API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080/api".into())
            .trim()
            .trim_end_matches('/')
            .to_string();
        assert!(
            api_base_url.starts_with("http://") || api_base_url.starts_with("https://"),
            "LIMS_API_BASE_URL must be an http(s) URL"
        );

        let backend_timeout_secs: u64 = std::env::var("BACKEND_TIMEOUT_SECS")
            .unwrap_or_else(|_| "15".into())
            .parse()
            .expect("BACKEND_TIMEOUT_SECS must be a valid u64");

        let redirect_delay_ms: u64 = std::env::var("REDIRECT_DELAY_MS")
            .unwrap_or_else(|_| "1500".into())
            .parse()
            .expect("REDIRECT_DELAY_MS must be a valid u64");

        let max_page_size: i64 = std::env::var("MAX_PAGE_SIZE")
            .unwrap_or_else(|_| MAX_PAGE_LIMIT.to_string())
            .parse()
            .expect("MAX_PAGE_SIZE must be a valid i64");

        let default_page_size: i64 = std::env::var("DEFAULT_PAGE_SIZE")
            .unwrap_or_else(|_| DEFAULT_PAGE_LIMIT.to_string())
            .parse()
            .expect("DEFAULT_PAGE_SIZE must be a valid i64");
        assert!(
            (1..=max_page_size).contains(&default_page_size),
            "DEFAULT_PAGE_SIZE must be between 1 and MAX_PAGE_SIZE"
        );

        let log_format = std::env::var("LOG_FORMAT")
            .map(|v| LogFormat::parse(&v))
            .unwrap_or_default();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            api_base_url,
            backend_timeout_secs,
            redirect_delay_ms,
            default_page_size,
            max_page_size,
            log_format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_accepts_json_in_any_case() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
    }

    #[test]
    fn log_format_defaults_to_pretty() {
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse(""), LogFormat::Pretty);
        assert_eq!(LogFormat::default(), LogFormat::Pretty);
    }
}
