//! article — записи виртуального датасета и их генератор.
//!
//! - mod.rs        — Article + ArticleGenerator (key -> Article, чистая функция)
//! - repository.rs — ArticleRepository: фабрика свежих paging source'ов

pub mod repository;

use chrono::{Days, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::consts::{DESCRIPTION_PREFIX, TITLE_PREFIX};

pub use repository::{ArticleRepository, EpochPolicy};

/// One synthetic feed entry. Higher ids are older: `created = epoch - id days`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub created: NaiveDateTime,
}

/// Maps an integer key to a deterministic [`Article`].
///
/// The only state is the epoch captured at construction; it never changes for
/// the lifetime of the generator, so `generate` is pure and can be shared
/// between threads without locking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleGenerator {
    epoch: NaiveDateTime,
}

impl ArticleGenerator {
    pub fn new(epoch: NaiveDateTime) -> Self {
        Self { epoch }
    }

    /// Generator anchored at the current local time.
    pub fn now() -> Self {
        Self::new(chrono::Local::now().naive_local())
    }

    #[inline]
    pub fn epoch(&self) -> NaiveDateTime {
        self.epoch
    }

    /// Build the article for `key`. Total: never fails.
    pub fn generate(&self, key: i64) -> Article {
        Article {
            id: key,
            title: format!("{TITLE_PREFIX} {key}"),
            description: format!("{DESCRIPTION_PREFIX} {key}"),
            created: self.created_at(key),
        }
    }

    /// `epoch - key days`, saturating at the edges of the NaiveDateTime range.
    fn created_at(&self, key: i64) -> NaiveDateTime {
        let days = Days::new(key.unsigned_abs());
        let shifted = if key >= 0 {
            self.epoch.checked_sub_days(days)
        } else {
            self.epoch.checked_add_days(days)
        };
        shifted.unwrap_or(if key >= 0 {
            NaiveDateTime::MIN
        } else {
            NaiveDateTime::MAX
        })
    }
}
