//! Repository: source factory for the pager.
//!
//! Every invalidation asks for a brand new source, so the epoch policy decides
//! whether timestamps move with wall-clock time or stay pinned.

use chrono::NaiveDateTime;

use super::ArticleGenerator;
use crate::source::ArticlePagingSource;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EpochPolicy {
    /// Capture local time when each source is created.
    #[default]
    Now,
    /// Use the same epoch for every source.
    Fixed(NaiveDateTime),
}

/// Mimics fetching articles from an asynchronous backend; in practice it only
/// hands out generator-backed paging sources.
#[derive(Debug, Clone, Default)]
pub struct ArticleRepository {
    policy: EpochPolicy,
}

impl ArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fixed_epoch(epoch: NaiveDateTime) -> Self {
        Self {
            policy: EpochPolicy::Fixed(epoch),
        }
    }

    pub fn with_policy(policy: EpochPolicy) -> Self {
        Self { policy }
    }

    pub fn article_paging_source(&self) -> ArticlePagingSource {
        let generator = match self.policy {
            EpochPolicy::Now => ArticleGenerator::now(),
            EpochPolicy::Fixed(epoch) => ArticleGenerator::new(epoch),
        };
        ArticlePagingSource::new(generator)
    }
}
