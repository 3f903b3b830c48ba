//! source — контракт постраничной загрузки (paged fetch) и его реализация.
//!
//! - mod.rs     — типы контракта: Key, LoadParams, Page, AnchorState, трейт PagingSource
//! - article.rs — ArticlePagingSource поверх ArticleGenerator
//!
//! Ключи — монотонные целые >= MIN_KEY; следующий ключ всегда есть (вперёд
//! датасет бесконечен), предыдущего нет только у страницы, начинающейся с MIN_KEY.

pub mod article;

use serde::Serialize;

use crate::error::Result;

pub use article::ArticlePagingSource;

/// Paging coordinate and continuation token.
pub type Key = i64;

/// One load request: `key = None` means "start from the beginning".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadParams {
    pub key: Option<Key>,
    pub load_size: usize,
}

impl LoadParams {
    pub fn new(key: Option<Key>, load_size: usize) -> Self {
        Self { key, load_size }
    }
}

/// A contiguous window of items plus the keys of its neighbours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub prev_key: Option<Key>,
    pub next_key: Key,
}

impl<T> Page<T> {
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Where the caller was looking when the data went stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorState {
    pub anchor_key: Key,
    pub page_size: usize,
}

/// Seam between the pager driver and a concrete data source.
pub trait PagingSource {
    type Item;

    fn load(&self, params: LoadParams) -> Result<Page<Self::Item>>;

    /// Key for the first load after invalidation. None restarts from scratch.
    fn refresh_key(&self, anchor: Option<AnchorState>) -> Option<Key>;

    /// Key of an item, used to turn an anchor position into an [`AnchorState`].
    fn item_key(&self, item: &Self::Item) -> Key;
}
