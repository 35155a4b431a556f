use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 5020;
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_QR_MIN_SIZE: u32 = 200;
const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CORS_ORIGINS: &[&str] = &["http://localhost:5173", "http://localhost:4173"];

/// Process settings read from the environment at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub qr_min_size: u32, // Minimum edge of the rendered image, in pixels
    pub cors_allowed_origins: Vec<String>,
    pub shutdown_timeout: Duration,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from any key lookup. Unset or blank keys take their
    /// defaults; set keys that fail to parse are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(v) => v
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT is not a valid port number: {v}"))?,
            None => DEFAULT_PORT,
        };

        let qr_min_size = match get("QR_MIN_SIZE") {
            Some(v) => v
                .trim()
                .parse::<u32>()
                .with_context(|| format!("QR_MIN_SIZE is not a valid size: {v}"))?,
            None => DEFAULT_QR_MIN_SIZE,
        };

        let shutdown_timeout = match get("SHUTDOWN_TIMEOUT_SECS") {
            Some(v) => v
                .trim()
                .parse::<u64>()
                .with_context(|| format!("SHUTDOWN_TIMEOUT_SECS is not a number: {v}"))?,
            None => DEFAULT_SHUTDOWN_TIMEOUT_SECS,
        };

        let cors_allowed_origins = match get("CORS_ALLOWED_ORIGINS") {
            Some(v) => v
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(String::from)
                .collect(),
            None => DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect(),
        };

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            qr_min_size,
            cors_allowed_origins,
            shutdown_timeout: Duration::from_secs(shutdown_timeout),
        })
    }
}
