//! Server configuration
//!
//! All options can be overridden through environment variables:
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | HTTP_PORT | 3000 | HTTP API port |
//! | ENVIRONMENT | development | development \| staging \| production |
//! | SUPERADMIN_TOKEN | superadmin-demo-token | Bearer token for the superadmin API |
//! | SESSION_TTL_MINUTES | 1440 | Staff/superadmin session lifetime |
//! | ORDER_LIST_LIMIT | 50 | Default truncation for order listings |
//! | LOG_DIR | (unset) | Enables daily-rolling file logs when set |

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Bearer token accepted on `/api/superadmin/*` (demo-grade credential)
    pub superadmin_token: String,
    /// Session lifetime in minutes
    pub session_ttl_minutes: i64,
    /// Default truncation applied to order listings
    pub order_list_limit: usize,
    /// Optional directory for daily-rolling log files
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            superadmin_token: std::env::var("SUPERADMIN_TOKEN")
                .unwrap_or_else(|_| "superadmin-demo-token".into()),
            session_ttl_minutes: std::env::var("SESSION_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1440),
            order_list_limit: std::env::var("ORDER_LIST_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(50),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// Whether running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Whether running in development
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
