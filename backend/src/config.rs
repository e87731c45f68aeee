use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use shared::constants::{DATE_MODIFIED, DEFAULT_SITE_URL};
use tracing::info;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid { key, value } => write!(f, "invalid value for {}: {:?}", key, value),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// Public origin used in canonical links, the sitemap and structured data.
    pub site_url: String,
    /// Trunk output: `index.html` plus the hashed wasm/js/css bundle.
    pub frontend_dist: PathBuf,
    pub static_dir: PathBuf,
    pub allowed_origins: Vec<String>,
    pub sitemap_last_modified: NaiveDate,
}

impl Config {
    /// Reads the process environment. Call after `dotenvy` has loaded `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let host = match var("HOST") {
            Some(value) => value
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::Invalid { key: "HOST", value })?,
            None => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };

        let port = match var("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { key: "PORT", value })?,
            None => 3000,
        };

        let site_url = var("SITE_URL")
            .unwrap_or_else(|| DEFAULT_SITE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        if !site_url.starts_with("http://") && !site_url.starts_with("https://") {
            return Err(ConfigError::Invalid { key: "SITE_URL", value: site_url });
        }

        let sitemap_last_modified = match var("SITEMAP_LASTMOD") {
            Some(value) => NaiveDate::parse_from_str(&value, "%Y-%m-%d")
                .map_err(|_| ConfigError::Invalid { key: "SITEMAP_LASTMOD", value })?,
            None => NaiveDate::parse_from_str(DATE_MODIFIED, "%Y-%m-%d")
                .map_err(|_| ConfigError::Invalid { key: "SITEMAP_LASTMOD", value: DATE_MODIFIED.to_string() })?,
        };

        let allowed_origins = match var("ALLOWED_ORIGINS") {
            Some(value) => value
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
            None => vec![site_url.clone(), "http://127.0.0.1:8080".to_string()],
        };

        Ok(Config {
            host,
            port,
            site_url,
            frontend_dist: var("FRONTEND_DIST")
                .map(PathBuf::from)
                .unwrap_or_else(|| resolve_dir(&["../frontend/dist", "frontend/dist"])),
            static_dir: var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| resolve_dir(&["static", "backend/static", "../backend/static"])),
            allowed_origins,
            sitemap_last_modified,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// First candidate that exists, so the server starts from the workspace root or
/// the crate directory. Defaults to the first candidate.
fn resolve_dir(candidates: &[&str]) -> PathBuf {
    for (index, candidate) in candidates.iter().enumerate() {
        if Path::new(candidate).exists() {
            if index > 0 {
                info!("Using alternative path: {}", candidate);
            }
            return PathBuf::from(candidate);
        }
    }
    PathBuf::from(candidates[0])
}
