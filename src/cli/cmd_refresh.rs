use anyhow::Result;
use chrono::NaiveDateTime;

use crate::source::AnchorState;

use super::util::{page_size_or_default, repository_for};

pub fn exec(epoch: Option<NaiveDateTime>, anchor: Option<i64>, size: Option<usize>) -> Result<()> {
    let page_size = page_size_or_default(size);
    let source = repository_for(epoch).article_paging_source();
    let anchor = anchor.map(|anchor_key| AnchorState { anchor_key, page_size });

    match source.compute_refresh_key(anchor) {
        Some(k) => println!("refresh key: {k}"),
        None => println!("refresh key: none (restart from the first page)"),
    }
    Ok(())
}
