use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables
#[derive(Clone, Debug)]
pub struct Config {
    /// Address to bind the HTTP server to
    pub host: String,
    pub port: u16,

    /// Maximum payload size for all requests (in bytes)
    /// Default: 1MB
    pub max_payload_size: usize,

    /// Directory for rotating log files
    pub log_dir: String,

    /// Location value that means "no location restriction"
    pub location_wildcard: String,

    /// Optional path to a jobs dataset overriding the embedded one
    pub jobs_data_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Optional environment variables:
    /// - HOST: bind address (default: 127.0.0.1)
    /// - PORT: bind port (default: 8080)
    /// - MAX_PAYLOAD_SIZE: maximum request payload size in bytes (default: 1048576 = 1MB)
    /// - LOG_DIR: log file directory (default: logs)
    /// - LOCATION_WILDCARD: location treated as "any" (default: india)
    /// - JOBS_DATA_PATH: path to a jobs JSON file replacing the embedded dataset
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| format!("PORT must be a valid port number, got '{}'", raw))?,
            Err(_) => 8080,
        };

        let max_payload_size = env::var("MAX_PAYLOAD_SIZE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(1024 * 1024); // Default: 1MB

        let log_dir = env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string());

        let location_wildcard = env::var("LOCATION_WILDCARD")
            .map(|s| s.trim().to_lowercase())
            .unwrap_or_else(|_| "india".to_string());

        let jobs_data_path = env::var("JOBS_DATA_PATH").ok().map(PathBuf::from);

        Ok(Config {
            host,
            port,
            max_payload_size,
            log_dir,
            location_wildcard,
            jobs_data_path,
        })
    }
}
