//! pager/core — драйвер ленты: хранит загруженные страницы и двигает окно.
//!
//! Жизненный цикл:
//! - Empty -> refresh(): первая загрузка initial_load_size от initial_key;
//! - Loaded -> load_append()/load_prepend(): расширение по next_key/prev_key;
//! - Loaded -> invalidate(): refresh key от текущего source, новый source из фабрики,
//!   все страницы выбрасываются, загрузка заново от refresh key.
//!
//! При заданном max_size целые страницы выбрасываются с противоположного края,
//! но только дальше prefetch_distance от якоря: окно может временно превысить max_size.
//! Стыки страниц не исправляются: если prev_key не ведёт ровно к началу первой
//! страницы, пишем warn и оставляем как есть.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::collections::VecDeque;

use crate::config::{FeedConfig, PagerBuilder};
use crate::metrics::{
    record_invalidation, record_page_appended, record_page_dropped, record_page_prepended,
    record_page_refreshed,
};
use crate::source::{AnchorState, Key, LoadParams, Page, PagingSource};

use super::state::PagingState;

pub struct Pager<S, F>
where
    S: PagingSource,
    F: FnMut() -> S,
{
    factory: F,
    source: S,
    config: FeedConfig,
    initial_key: Option<Key>,
    pages: VecDeque<Page<S::Item>>,
    anchor_position: Option<usize>,
    generation: u64,
}

impl<S, F> Pager<S, F>
where
    S: PagingSource,
    F: FnMut() -> S,
{
    /// Create a pager; nothing is loaded until the first refresh/access.
    pub fn new(mut factory: F, config: FeedConfig, initial_key: Option<Key>) -> Result<Self> {
        config.validate().context("pager config")?;
        let source = factory();
        Ok(Self {
            factory,
            source,
            config,
            initial_key,
            pages: VecDeque::new(),
            anchor_position: None,
            generation: 0,
        })
    }

    pub fn from_builder(factory: F, builder: PagerBuilder) -> Result<Self> {
        let (config, initial_key) = builder.build().context("pager builder")?;
        Self::new(factory, config, initial_key)
    }

    // -------------------- accessors --------------------

    #[inline]
    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    #[inline]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Number of invalidations so far.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn anchor_position(&self) -> Option<usize> {
        self.anchor_position
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn len(&self) -> usize {
        self.pages.iter().map(|p| p.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flattened view of every retained item, in key order of the pages.
    pub fn items(&self) -> impl Iterator<Item = &S::Item> {
        self.pages.iter().flat_map(|p| p.data.iter())
    }

    pub fn get(&self, index: usize) -> Option<&S::Item> {
        let mut idx = index;
        for page in &self.pages {
            if idx < page.len() {
                return page.data.get(idx);
            }
            idx -= page.len();
        }
        None
    }

    pub fn state(&self) -> PagingState<'_, S::Item> {
        PagingState {
            pages: &self.pages,
            anchor_position: self.anchor_position,
            config: &self.config,
        }
    }

    // -------------------- loads --------------------

    /// Drop everything and load the initial window from `initial_key`.
    pub fn refresh(&mut self) -> Result<()> {
        let key = self.initial_key;
        self.refresh_from(key)
    }

    fn refresh_from(&mut self, key: Option<Key>) -> Result<()> {
        let params = LoadParams::new(key, self.config.initial_load_size());
        let page = self
            .source
            .load(params)
            .with_context(|| format!("refresh load from {key:?}"))?;
        self.pages.clear();
        self.pages.push_back(page);
        record_page_refreshed();
        debug!("pager: refreshed from {:?}, {} item(s)", key, self.len());
        Ok(())
    }

    /// Load the page following the last one. Loads the initial window if empty.
    pub fn load_append(&mut self) -> Result<bool> {
        let Some(next_key) = self.pages.back().map(|p| p.next_key) else {
            self.refresh()?;
            return Ok(true);
        };
        let params = LoadParams::new(Some(next_key), self.config.page_size);
        let page = self
            .source
            .load(params)
            .with_context(|| format!("append load from {next_key}"))?;
        if let Some(first) = page.data.first() {
            let got = self.source.item_key(first);
            if got != next_key {
                warn!("pager: append expected first key {next_key}, got {got}");
            }
        }
        self.pages.push_back(page);
        record_page_appended();
        self.trim_front();
        Ok(true)
    }

    /// Load the page before the first one. Returns false at the start of the dataset.
    pub fn load_prepend(&mut self) -> Result<bool> {
        if self.pages.is_empty() {
            self.refresh()?;
            return Ok(true);
        }
        let Some(front) = self.pages.front() else {
            return Ok(false);
        };
        let Some(prev_key) = front.prev_key else {
            return Ok(false);
        };
        let front_first = front.data.first().map(|it| self.source.item_key(it));

        let params = LoadParams::new(Some(prev_key), self.config.page_size);
        let page = self
            .source
            .load(params)
            .with_context(|| format!("prepend load from {prev_key}"))?;
        if let Some(first) = front_first {
            if page.next_key != first {
                warn!(
                    "pager: prepend window [{}, {}) does not end at first loaded key {}",
                    prev_key, page.next_key, first
                );
            }
        }
        let added = page.len();
        self.pages.push_front(page);
        if let Some(pos) = self.anchor_position.as_mut() {
            *pos += added;
        }
        record_page_prepended();
        self.trim_back();
        Ok(true)
    }

    /// Access item `index`: remembers it as the anchor and prefetches when the
    /// index is within `prefetch_distance` of a loaded edge.
    pub fn access(&mut self, index: usize) -> Result<Option<&S::Item>> {
        if self.pages.is_empty() {
            self.refresh()?;
        }
        if index >= self.len() {
            return Ok(None);
        }
        self.anchor_position = Some(index);

        let distance = self.config.prefetch_distance();
        if index.saturating_add(distance) >= self.len() {
            self.load_append()?;
        }
        if let Some(pos) = self.anchor_position {
            if pos < distance {
                self.load_prepend()?;
            }
        }
        Ok(self.anchor_position.and_then(|pos| self.get(pos)))
    }

    /// Data went stale: compute the refresh key, swap in a fresh source and
    /// reload around the last anchor. Returns the key the reload started from.
    pub fn invalidate(&mut self) -> Result<Option<Key>> {
        let anchor = self.anchor_state();
        let key = self.source.refresh_key(anchor);

        self.source = (self.factory)();
        self.pages.clear();
        self.anchor_position = None;
        self.generation += 1;
        record_invalidation();
        info!(
            "pager: invalidated (generation {}), anchor={:?}, refresh key={:?}",
            self.generation, anchor, key
        );

        self.refresh_from(key)?;
        Ok(key)
    }

    fn anchor_state(&self) -> Option<AnchorState> {
        let item = self.state().anchor_item()?;
        Some(AnchorState {
            anchor_key: self.source.item_key(item),
            page_size: self.config.page_size,
        })
    }

    // -------------------- max_size trimming --------------------

    fn over_max(&self) -> bool {
        match self.config.max_size {
            Some(max) => self.pages.len() > 1 && self.len() > max,
            None => false,
        }
    }

    /// Front page may go only when it ends more than `prefetch_distance`
    /// items before the anchor.
    fn can_drop_front(&self) -> bool {
        let Some(front) = self.pages.front() else {
            return false;
        };
        match self.anchor_position {
            Some(pos) => front.len().saturating_add(self.config.prefetch_distance()) <= pos,
            None => true,
        }
    }

    /// Back page may go only when it starts more than `prefetch_distance`
    /// items after the anchor.
    fn can_drop_back(&self) -> bool {
        let Some(back) = self.pages.back() else {
            return false;
        };
        match self.anchor_position {
            Some(pos) => {
                let back_start = self.len() - back.len();
                pos.saturating_add(self.config.prefetch_distance()) < back_start
            }
            None => true,
        }
    }

    fn trim_front(&mut self) {
        while self.over_max() && self.can_drop_front() {
            let Some(dropped) = self.pages.pop_front() else {
                break;
            };
            if let Some(pos) = self.anchor_position.as_mut() {
                *pos -= dropped.len();
            }
            record_page_dropped();
            debug!("pager: dropped front page ({} item(s))", dropped.len());
        }
    }

    fn trim_back(&mut self) {
        while self.over_max() && self.can_drop_back() {
            let Some(dropped) = self.pages.pop_back() else {
                break;
            };
            record_page_dropped();
            debug!("pager: dropped back page ({} item(s))", dropped.len());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::ArticleRepository;
    use chrono::NaiveDate;

    fn repo() -> ArticleRepository {
        let epoch = NaiveDate::from_ymd_opt(2022, 3, 1)
            .and_then(|d| d.and_hms_opt(9, 0, 0))
            .expect("valid date");
        ArticleRepository::with_fixed_epoch(epoch)
    }

    #[test]
    fn first_access_loads_initial_window() -> Result<()> {
        let r = repo();
        let cfg = FeedConfig::default().with_page_size(10);
        let mut pager = Pager::new(|| r.article_paging_source(), cfg, None)?;
        assert!(pager.is_empty());
        let first = pager.access(0)?.map(|a| a.id);
        assert_eq!(first, Some(0));
        assert_eq!(pager.len(), 30);
        Ok(())
    }

    #[test]
    fn prepend_stops_at_first_key() -> Result<()> {
        let r = repo();
        let cfg = FeedConfig::default().with_page_size(10);
        let mut pager = Pager::new(|| r.article_paging_source(), cfg, None)?;
        pager.refresh()?;
        assert!(!pager.load_prepend()?);
        assert_eq!(pager.page_count(), 1);
        Ok(())
    }
}
