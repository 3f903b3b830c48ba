//! Centralized configuration and builder for the feed pager.
//!
//! Goals:
//! - Single place to collect tunables instead of scattering env lookups.
//! - FeedConfig::from_env() reads FEED_* variables on top of the defaults.
//! - PagerBuilder collects a FeedConfig plus an optional initial key.
//!
//! Defaults follow the article sample:
//! - page_size = 50
//! - initial_load_size = 3 * page_size
//! - prefetch_distance = page_size
//! - max_size = unbounded (every loaded page is kept)

use std::fmt;

use crate::consts::{
    DEFAULT_PAGE_SIZE, ENV_INITIAL_LOAD_SIZE, ENV_MAX_SIZE, ENV_PAGE_SIZE, ENV_PREFETCH_DISTANCE,
    INITIAL_LOAD_MULTIPLIER,
};
use crate::error::{FeedError, Result};
use crate::source::Key;

/// Paging tunables used by [`crate::pager::Pager`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedConfig {
    /// Items requested per append/prepend load.
    /// Env: FEED_PAGE_SIZE (default 50)
    pub page_size: usize,

    /// Items requested by the first load after a refresh.
    /// Env: FEED_INITIAL_LOAD_SIZE (default None, meaning "3 * page_size").
    pub initial_load_size: Option<usize>,

    /// How close to an edge an access must be to trigger the next load.
    /// Env: FEED_PREFETCH_DISTANCE (default None, meaning "page_size").
    pub prefetch_distance: Option<usize>,

    /// Upper bound on retained items; whole pages are dropped past it.
    /// Env: FEED_MAX_SIZE (default None = unbounded)
    pub max_size: Option<usize>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            initial_load_size: None,
            prefetch_distance: None,
            max_size: None,
        }
    }
}

fn env_usize(name: &str) -> Option<usize> {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
}

impl FeedConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Some(n) = env_usize(ENV_PAGE_SIZE) {
            cfg.page_size = n;
        }
        if let Some(n) = env_usize(ENV_INITIAL_LOAD_SIZE) {
            cfg.initial_load_size = Some(n);
        }
        if let Some(n) = env_usize(ENV_PREFETCH_DISTANCE) {
            cfg.prefetch_distance = Some(n);
        }
        if let Some(n) = env_usize(ENV_MAX_SIZE) {
            cfg.max_size = Some(n);
        }

        cfg
    }

    // Fluent setters (builder-style) to override specific fields.

    pub fn with_page_size(mut self, n: usize) -> Self {
        self.page_size = n;
        self
    }

    pub fn with_initial_load_size(mut self, n: Option<usize>) -> Self {
        self.initial_load_size = n;
        self
    }

    pub fn with_prefetch_distance(mut self, n: Option<usize>) -> Self {
        self.prefetch_distance = n;
        self
    }

    pub fn with_max_size(mut self, n: Option<usize>) -> Self {
        self.max_size = n;
        self
    }

    /// Effective initial load size.
    pub fn initial_load_size(&self) -> usize {
        self.initial_load_size
            .unwrap_or_else(|| self.page_size.saturating_mul(INITIAL_LOAD_MULTIPLIER))
    }

    /// Effective prefetch distance.
    pub fn prefetch_distance(&self) -> usize {
        self.prefetch_distance.unwrap_or(self.page_size)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(FeedError::invalid("page_size must be > 0"));
        }
        if self.initial_load_size() == 0 {
            return Err(FeedError::invalid("initial_load_size must be > 0"));
        }
        if let Some(max) = self.max_size {
            let min_max = self
                .page_size
                .saturating_add(self.prefetch_distance().saturating_mul(2));
            if max < min_max {
                return Err(FeedError::invalid(format!(
                    "max_size {max} must be >= page_size + 2 * prefetch_distance ({min_max})"
                )));
            }
        }
        Ok(())
    }
}

impl fmt::Display for FeedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FeedConfig {{ \
             page_size: {}, \
             initial_load_size: {}, \
             prefetch_distance: {}, \
             max_size: {} \
             }}",
            self.page_size,
            self.initial_load_size
                .map(|v| v.to_string())
                .unwrap_or_else(|| format!("default({})", self.initial_load_size())),
            self.prefetch_distance
                .map(|v| v.to_string())
                .unwrap_or_else(|| format!("default({})", self.prefetch_distance())),
            self.max_size
                .map(|v| v.to_string())
                .unwrap_or_else(|| "unbounded".to_string()),
        )
    }
}

/// Lightweight builder for a pager: config plus the first key to load.
#[derive(Clone, Debug)]
pub struct PagerBuilder {
    cfg: FeedConfig,
    initial_key: Option<Key>,
}

impl Default for PagerBuilder {
    fn default() -> Self {
        // Start from env, then allow overrides.
        Self {
            cfg: FeedConfig::from_env(),
            initial_key: None,
        }
    }
}

impl PagerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a clean default (without reading env).
    pub fn from_default() -> Self {
        Self {
            cfg: FeedConfig::default(),
            initial_key: None,
        }
    }

    pub fn page_size(mut self, n: usize) -> Self {
        self.cfg.page_size = n;
        self
    }

    pub fn initial_load_size(mut self, n: Option<usize>) -> Self {
        self.cfg.initial_load_size = n;
        self
    }

    pub fn prefetch_distance(mut self, n: Option<usize>) -> Self {
        self.cfg.prefetch_distance = n;
        self
    }

    pub fn max_size(mut self, n: Option<usize>) -> Self {
        self.cfg.max_size = n;
        self
    }

    pub fn initial_key(mut self, key: Option<Key>) -> Self {
        self.initial_key = key;
        self
    }

    pub fn config(&self) -> &FeedConfig {
        &self.cfg
    }

    /// Finish the builder: validated config and initial key.
    pub fn build(self) -> Result<(FeedConfig, Option<Key>)> {
        self.cfg.validate()?;
        Ok((self.cfg, self.initial_key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_page_size() {
        let cfg = FeedConfig::default().with_page_size(20);
        assert_eq!(cfg.initial_load_size(), 60);
        assert_eq!(cfg.prefetch_distance(), 20);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn max_size_too_small_is_rejected() {
        let cfg = FeedConfig::default().with_page_size(10).with_max_size(Some(25));
        assert!(cfg.validate().is_err());
        let ok = cfg.with_max_size(Some(30));
        assert!(ok.validate().is_ok());
    }
}
