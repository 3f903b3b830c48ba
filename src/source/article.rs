//! ArticlePagingSource — окна [start, start + size) поверх ArticleGenerator.
//!
//! Семантика:
//! - start = key или MIN_KEY при первой загрузке;
//! - prev_key: None для start == MIN_KEY, иначе max(MIN_KEY, start - size);
//! - next_key: start + size;
//! - refresh key: max(MIN_KEY, anchor_key - page_size / 2).
//!
//! prev_key считается от запрошенного размера текущей загрузки, а не от
//! размера соседней страницы.

use log::debug;

use crate::article::{Article, ArticleGenerator};
use crate::consts::MIN_KEY;
use crate::error::{FeedError, Result};
use crate::metrics::record_records_generated;

use super::{AnchorState, Key, LoadParams, Page, PagingSource};

/// Never lets a key fall below [`MIN_KEY`].
#[inline]
fn ensure_valid_key(key: Key) -> Key {
    key.max(MIN_KEY)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticlePagingSource {
    generator: ArticleGenerator,
}

impl ArticlePagingSource {
    pub fn new(generator: ArticleGenerator) -> Self {
        Self { generator }
    }

    #[inline]
    pub fn generator(&self) -> &ArticleGenerator {
        &self.generator
    }

    /// Produce the page starting at `requested_key` (or [`MIN_KEY`]).
    pub fn fetch_page(&self, requested_key: Option<Key>, page_size: usize) -> Result<Page<Article>> {
        if page_size == 0 {
            return Err(FeedError::invalid("page_size must be > 0"));
        }
        let start = requested_key.unwrap_or(MIN_KEY);
        if start < MIN_KEY {
            return Err(FeedError::invalid(format!(
                "key {start} is below the first key {MIN_KEY}"
            )));
        }
        let size = Key::try_from(page_size)
            .map_err(|_| FeedError::invalid(format!("page_size {page_size} does not fit a key")))?;
        let end = start.checked_add(size).ok_or_else(|| {
            FeedError::invalid(format!("window [{start}, {start} + {page_size}) overflows the key space"))
        })?;

        let data: Vec<Article> = (start..end).map(|k| self.generator.generate(k)).collect();

        let prev_key = match start {
            MIN_KEY => None,
            _ => Some(ensure_valid_key(start - size)),
        };
        let next_key = end;

        record_records_generated(data.len());
        debug!(
            "fetch_page: start={} size={} prev={:?} next={}",
            start, page_size, prev_key, next_key
        );

        Ok(Page { data, prev_key, next_key })
    }

    /// Restart key after invalidation: half a page before the anchor.
    pub fn compute_refresh_key(&self, anchor: Option<AnchorState>) -> Option<Key> {
        let anchor = anchor?;
        let half = Key::try_from(anchor.page_size / 2).unwrap_or(Key::MAX);
        Some(ensure_valid_key(anchor.anchor_key.saturating_sub(half)))
    }
}

impl PagingSource for ArticlePagingSource {
    type Item = Article;

    fn load(&self, params: LoadParams) -> Result<Page<Article>> {
        self.fetch_page(params.key, params.load_size)
    }

    fn refresh_key(&self, anchor: Option<AnchorState>) -> Option<Key> {
        self.compute_refresh_key(anchor)
    }

    #[inline]
    fn item_key(&self, item: &Article) -> Key {
        item.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn source() -> ArticlePagingSource {
        let epoch = NaiveDate::from_ymd_opt(2022, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .expect("valid date");
        ArticlePagingSource::new(ArticleGenerator::new(epoch))
    }

    #[test]
    fn first_page_has_no_prev_key() {
        let p = source().fetch_page(None, 50).expect("fetch");
        assert_eq!(p.len(), 50);
        assert_eq!(p.data.first().map(|a| a.id), Some(0));
        assert_eq!(p.data.last().map(|a| a.id), Some(49));
        assert_eq!(p.prev_key, None);
        assert_eq!(p.next_key, 50);
    }

    #[test]
    fn prev_key_is_clamped_to_min_key() {
        let p = source().fetch_page(Some(30), 50).expect("fetch");
        assert_eq!(p.prev_key, Some(0));
        assert_eq!(p.next_key, 80);
    }

    #[test]
    fn zero_page_size_is_invalid() {
        let err = source().fetch_page(Some(10), 0).unwrap_err();
        assert!(matches!(err, FeedError::InvalidArgument(_)));
    }

    #[test]
    fn negative_key_is_invalid() {
        let err = source().fetch_page(Some(-1), 10).unwrap_err();
        assert!(matches!(err, FeedError::InvalidArgument(_)));
    }

    #[test]
    fn overflowing_window_is_invalid() {
        let err = source().fetch_page(Some(Key::MAX - 2), 10).unwrap_err();
        assert!(matches!(err, FeedError::InvalidArgument(_)));
    }

    #[test]
    fn refresh_key_centers_on_anchor() {
        let s = source();
        assert_eq!(s.compute_refresh_key(None), None);
        let a = AnchorState { anchor_key: 120, page_size: 50 };
        assert_eq!(s.compute_refresh_key(Some(a)), Some(95));
        let near_start = AnchorState { anchor_key: 10, page_size: 50 };
        assert_eq!(s.compute_refresh_key(Some(near_start)), Some(0));
        let odd = AnchorState { anchor_key: 100, page_size: 7 };
        assert_eq!(s.compute_refresh_key(Some(odd)), Some(97));
    }
}
