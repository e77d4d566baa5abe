use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_UPLOAD_DIR: &str = "uploads";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_BIND: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 7860;
pub const DEFAULT_MAX_UPLOAD_MB: usize = 64;

/// Service configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Only the
/// transport layer reads this; extraction and comparison take no config.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where uploaded documents are written before text extraction
    /// (RFPCHECK_UPLOAD_DIR).
    pub upload_dir: PathBuf,
    /// The single browser origin allowed to call the API (RFPCHECK_CORS_ORIGIN).
    pub cors_origin: String,
    pub bind: String,
    pub port: u16,
    /// Request body cap for the upload endpoint, in bytes
    /// (RFPCHECK_MAX_UPLOAD_MB, whole megabytes).
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from(DEFAULT_UPLOAD_DIR),
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
            bind: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_MB * 1024 * 1024,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every value has a default; a malformed RFPCHECK_PORT or
    /// RFPCHECK_MAX_UPLOAD_MB is an error.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        let port = match env::var("RFPCHECK_PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("RFPCHECK_PORT is not a valid port: {raw:?}"))?,
            Err(_) => defaults.port,
        };

        let max_upload_bytes = match env::var("RFPCHECK_MAX_UPLOAD_MB") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("RFPCHECK_MAX_UPLOAD_MB is not a number: {raw:?}"))?
                .saturating_mul(1024 * 1024),
            Err(_) => defaults.max_upload_bytes,
        };

        Ok(Self {
            upload_dir: env::var("RFPCHECK_UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.upload_dir),
            cors_origin: env::var("RFPCHECK_CORS_ORIGIN").unwrap_or(defaults.cors_origin),
            bind: env::var("RFPCHECK_BIND").unwrap_or(defaults.bind),
            port,
            max_upload_bytes,
        })
    }

    /// The socket address the server listens on.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}
