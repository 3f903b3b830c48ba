//! Snapshot of what the pager currently holds.

use std::collections::VecDeque;

use crate::config::FeedConfig;
use crate::source::Page;

pub struct PagingState<'a, T> {
    pub pages: &'a VecDeque<Page<T>>,
    /// Index (into the flattened items) the caller last accessed.
    pub anchor_position: Option<usize>,
    pub config: &'a FeedConfig,
}

impl<'a, T> PagingState<'a, T> {
    pub fn len(&self) -> usize {
        self.pages.iter().map(|p| p.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.iter().all(|p| p.is_empty())
    }

    /// Item at `position`, or the nearest loaded one when it is out of range.
    pub fn closest_item_to_position(&self, position: usize) -> Option<&'a T> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        let pages: &'a VecDeque<Page<T>> = self.pages;
        let mut idx = position.min(len - 1);
        for page in pages.iter() {
            if idx < page.len() {
                return page.data.get(idx);
            }
            idx -= page.len();
        }
        None
    }

    /// Item at the anchor position, if the caller ever accessed one.
    pub fn anchor_item(&self) -> Option<&'a T> {
        self.anchor_position
            .and_then(|pos| self.closest_item_to_position(pos))
    }
}
