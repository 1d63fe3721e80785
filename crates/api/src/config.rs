//! Environment-driven configuration for the API binary.

use std::net::SocketAddr;
use std::path::PathBuf;

use wishlist_items::DEFAULT_LIMIT;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:4000";
pub const DEFAULT_EXPORT_DIR: &str = "exports";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// `WISHLIST_BIND_ADDR`
    pub bind_addr: SocketAddr,
    /// `WISHLIST_EXPORT_DIR`; the CSV is always `wishlist.csv` inside it.
    pub export_dir: PathBuf,
    /// `WISHLIST_DEFAULT_PAGE_SIZE`; `limit` used by list when none is given.
    pub default_page_size: i64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            export_dir: PathBuf::from(DEFAULT_EXPORT_DIR),
            default_page_size: DEFAULT_LIMIT,
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 4000))
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparsable values are logged and
    /// replaced by their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup("WISHLIST_BIND_ADDR") {
            match raw.parse() {
                Ok(addr) => config.bind_addr = addr,
                Err(_) => tracing::warn!(
                    value = %raw,
                    "WISHLIST_BIND_ADDR is not a socket address; using {DEFAULT_BIND_ADDR}"
                ),
            }
        }

        if let Some(raw) = lookup("WISHLIST_EXPORT_DIR") {
            if raw.trim().is_empty() {
                tracing::warn!("WISHLIST_EXPORT_DIR is empty; using {DEFAULT_EXPORT_DIR}");
            } else {
                config.export_dir = PathBuf::from(raw);
            }
        }

        if let Some(raw) = lookup("WISHLIST_DEFAULT_PAGE_SIZE") {
            match raw.parse::<i64>() {
                Ok(n) if n >= 1 => config.default_page_size = n,
                _ => tracing::warn!(
                    value = %raw,
                    "WISHLIST_DEFAULT_PAGE_SIZE must be a positive integer; using {DEFAULT_LIMIT}"
                ),
            }
        }

        config
    }
}
