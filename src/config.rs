//! Host configuration loaded from the environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

use toolkit::config::ConfigOverrides;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STATIC_DIR: &str = "target/site/pkg";

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("invalid PORT {0:?}")]
    InvalidPort(String),
    #[error("failed to read toolkit config {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed toolkit config {path}: {source}")]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to render storefront page: {0}")]
    Render(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Clone, Debug)]
pub struct HostConfig {
    pub port: u16,
    /// Directory holding the compiled `widgets` package, served at `/pkg`.
    pub static_dir: PathBuf,
    /// Toolkit overrides embedded in the page and served as JSON.
    pub overrides: ConfigOverrides,
    /// Storefront root path exposed to the page as `Shopify.routes.root`.
    pub shop_root: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            overrides: ConfigOverrides::default(),
            shop_root: String::new(),
        }
    }
}

impl HostConfig {
    /// Read `PORT`, `STATIC_DIR`, `TOOLKIT_CONFIG_PATH` and `SHOP_ROOT` after
    /// loading `.env` when present.
    ///
    /// # Errors
    ///
    /// Returns an error for an unparsable port or an unreadable or malformed
    /// overrides file.
    pub fn from_env() -> Result<Self, HostError> {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!(error = %e, "no .env loaded");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Unset and empty values take
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, HostError> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let port = match var("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| HostError::InvalidPort(raw))?,
            None => defaults.port,
        };
        let overrides = match var("TOOLKIT_CONFIG_PATH") {
            Some(path) => load_overrides(PathBuf::from(path))?,
            None => defaults.overrides,
        };

        Ok(Self {
            port,
            static_dir: var("STATIC_DIR").map_or(defaults.static_dir, PathBuf::from),
            overrides,
            shop_root: var("SHOP_ROOT").unwrap_or(defaults.shop_root),
        })
    }
}

fn load_overrides(path: PathBuf) -> Result<ConfigOverrides, HostError> {
    let raw = match std::fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(source) => return Err(HostError::ReadConfig { path, source }),
    };
    let overrides = ConfigOverrides::from_json(&raw).map_err(|source| HostError::ParseConfig { path: path.clone(), source })?;
    tracing::info!(path = %path.display(), "toolkit overrides loaded");
    Ok(overrides)
}
