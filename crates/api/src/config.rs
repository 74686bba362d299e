use std::path::PathBuf;

use moodlens_classifier::config::ClassifierConfig;

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
    /// SQLite database URL; the file is created if missing.
    pub database_url: String,
    /// Directory uploaded batch files are saved into.
    pub upload_dir: PathBuf,
    /// Maximum accepted request body size for uploads, in bytes.
    pub max_upload_bytes: usize,
    /// HTTP request timeout in seconds (default: `120`).
    pub request_timeout_secs: u64,
    /// Mark the session cookie `Secure` (only sent over HTTPS).
    pub secure_cookies: bool,
    /// Minutes without a request before a session expires (default: `60`).
    pub session_idle_minutes: i64,
    /// Hosted sentiment model settings.
    pub classifier: ClassifierConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default              |
    /// |-------------------------|----------------------|
    /// | `HOST`                  | `0.0.0.0`            |
    /// | `PORT`                  | `3000`               |
    /// | `DATABASE_URL`          | `sqlite://users.db`  |
    /// | `UPLOAD_DIR`            | `uploads`            |
    /// | `MAX_UPLOAD_BYTES`      | `10485760` (10 MiB)  |
    /// | `REQUEST_TIMEOUT_SECS`  | `120`                |
    /// | `SESSION_COOKIE_SECURE` | `false`              |
    /// | `SESSION_IDLE_MINUTES`  | `60`                 |
    ///
    /// Classifier settings are documented on [`ClassifierConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://users.db".into());

        let upload_dir = PathBuf::from(
            std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".into()),
        );

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| (10 * 1024 * 1024).to_string())
            .parse()
            .expect("MAX_UPLOAD_BYTES must be a valid usize");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "120".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let secure_cookies: bool = std::env::var("SESSION_COOKIE_SECURE")
            .unwrap_or_else(|_| "false".into())
            .parse()
            .expect("SESSION_COOKIE_SECURE must be `true` or `false`");

        let session_idle_minutes: i64 = std::env::var("SESSION_IDLE_MINUTES")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("SESSION_IDLE_MINUTES must be a valid i64");

        let classifier = ClassifierConfig::from_env();

        Self {
            host,
            port,
            database_url,
            upload_dir,
            max_upload_bytes,
            request_timeout_secs,
            secure_cookies,
            session_idle_minutes,
            classifier,
        }
    }
}
