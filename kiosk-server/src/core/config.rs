use std::time::Duration;

use chrono_tz::Tz;
use tracing::warn;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | HTTP_PORT | 4000 | HTTP API port |
/// | SETTINGS_PATH | config.json | Settings file |
/// | PRINTER_PORT | 9100 | Raw print port when an address has none |
/// | PRINT_TIMEOUT_MS | 4000 | Deadline per print job |
/// | DRAWER_TIMEOUT_MS | 3000 | Deadline per drawer pulse |
/// | TIMEZONE | (system) | IANA zone for ticket timestamps |
/// | LOG_LEVEL | info | Log level |
/// | LOG_DIR | (none) | Rolling log file directory |
/// | ENVIRONMENT | development | Runtime environment |
///
/// # Example
///
/// ```ignore
/// HTTP_PORT=8080 TIMEZONE=America/Chicago cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub settings_path: String,
    pub printer_port: u16,
    pub print_timeout_ms: u64,
    pub drawer_timeout_ms: u64,
    /// None = system local time
    pub timezone: Option<Tz>,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// development | production
    pub environment: String,
}

impl Config {
    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            http_port: env_parse("HTTP_PORT", 4000),
            settings_path: std::env::var("SETTINGS_PATH").unwrap_or_else(|_| "config.json".into()),
            printer_port: env_parse("PRINTER_PORT", kiosk_printer::DEFAULT_PORT),
            print_timeout_ms: env_parse("PRINT_TIMEOUT_MS", 4000),
            drawer_timeout_ms: env_parse("DRAWER_TIMEOUT_MS", 3000),
            timezone: std::env::var("TIMEZONE")
                .ok()
                .and_then(|tz| parse_timezone(&tz)),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    pub fn print_timeout(&self) -> Duration {
        Duration::from_millis(self.print_timeout_ms)
    }

    pub fn drawer_timeout(&self) -> Duration {
        Duration::from_millis(self.drawer_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: 4000,
            settings_path: "config.json".into(),
            printer_port: kiosk_printer::DEFAULT_PORT,
            print_timeout_ms: 4000,
            drawer_timeout_ms: 3000,
            timezone: None,
            log_level: "info".into(),
            log_dir: None,
            environment: "development".into(),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn parse_timezone(name: &str) -> Option<Tz> {
    match name.trim().parse::<Tz>() {
        Ok(tz) => Some(tz),
        Err(_) => {
            warn!(timezone = %name, "Unknown timezone, using system local time");
            None
        }
    }
}
