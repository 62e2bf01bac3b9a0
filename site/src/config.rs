use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

pub const HOST_VAR: &str = "PORTFOLIO_HOST";
pub const PORT_VAR: &str = "PORTFOLIO_PORT";
pub const DIST_VAR: &str = "PORTFOLIO_DIST";
pub const ASSETS_VAR: &str = "PORTFOLIO_ASSETS";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;

/// Where to listen and what to serve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub host: String,
    pub port: u16,
    /// Trunk output, holds `index.html` and the wasm bundle.
    pub dist_dir: PathBuf,
    pub assets_dir: PathBuf,
}

impl SiteConfig {
    /// Process environment, with a `.env` file layered underneath if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")); // = site/

        let host = lookup(HOST_VAR)
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_owned());

        let port = match lookup(PORT_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("{PORT_VAR} must be a port number, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        let dist_dir = lookup(DIST_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| root.join("../dist"));
        let assets_dir = lookup(ASSETS_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| root.join("../assets"));

        Ok(Self {
            host,
            port,
            dist_dir,
            assets_dir,
        })
    }

    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}
