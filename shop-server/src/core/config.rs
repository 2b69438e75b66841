use std::path::PathBuf;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Purpose |
/// |----------|---------|---------|
/// | WORK_DIR | /var/lib/storefront | Work directory (database, uploads, logs) |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | PUBLIC_BASE_URL | http://localhost:3000 | Base URL used in returned file URLs |
/// | BREVO_API_URL | https://api.brevo.com | Notification provider endpoint |
/// | BREVO_API_KEY | (empty) | Provider API key; empty disables notifications |
/// | SENDER_EMAIL | orders@storefront.local | Confirmation sender address |
/// | SENDER_NAME | Storefront | Confirmation sender display name |
/// | LOG_DIR | (unset) | Optional daily-rolling log file directory |
#[derive(Debug, Clone)]
pub struct Config {
    /// Work directory holding the database and uploaded files
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Base URL prefixed to returned bank slip file URLs
    pub public_base_url: String,
    /// Notification provider base URL
    pub brevo_api_url: String,
    /// Notification provider API key; empty disables the provider
    pub brevo_api_key: String,
    /// Sender address for order confirmations
    pub sender_email: String,
    /// Sender display name for order confirmations
    pub sender_name: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// local-development defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/storefront".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            public_base_url: std::env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            brevo_api_url: std::env::var("BREVO_API_URL")
                .unwrap_or_else(|_| "https://api.brevo.com".into()),
            brevo_api_key: std::env::var("BREVO_API_KEY").unwrap_or_default(),
            sender_email: std::env::var("SENDER_EMAIL")
                .unwrap_or_else(|_| "orders@storefront.local".into()),
            sender_name: std::env::var("SENDER_NAME").unwrap_or_else(|_| "Storefront".into()),
        }
    }

    /// Override work directory and port, commonly used in tests
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    pub fn bank_slips_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("uploads/bank-slips")
    }

    /// Create the work directory layout if missing
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(self.bank_slips_dir())?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
