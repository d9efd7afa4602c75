use crate::api::FEATURED_COUNT;
use crate::listings::DEFAULT_PAGE_SIZE;
use anyhow::{bail, Context, Result};
use std::env;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/properties";
pub const DEPLOYED_API_URL: &str = "https://urbannest-mrmh.onrender.com/api/properties";

const API_URL_VAR: &str = "URBANNEST_API_URL";
const PAGE_SIZE_VAR: &str = "URBANNEST_PAGE_SIZE";
const TIMEOUT_VAR: &str = "URBANNEST_TIMEOUT_SECS";

/// Runtime settings, environment first, then built-in defaults
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub page_size: usize,
    pub featured_count: usize,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            featured_count: FEATURED_COUNT,
            timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(url) = lookup(API_URL_VAR).filter(|url| !url.trim().is_empty()) {
            config.api_url = url.trim().to_string();
        }

        if let Some(raw) = lookup(PAGE_SIZE_VAR) {
            config.page_size = raw
                .trim()
                .parse()
                .with_context(|| format!("{PAGE_SIZE_VAR} must be a whole number, got {raw:?}"))?;
        }

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let secs: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("{TIMEOUT_VAR} must be a whole number of seconds, got {raw:?}"))?;
            config.timeout = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            bail!("page size must be at least 1");
        }
        if self.timeout.is_zero() {
            bail!("request timeout must be at least 1 second");
        }
        Ok(())
    }
}
