use anyhow::{Context, Result};
use chrono::NaiveDateTime;

use super::util::{display_article, page_size_or_default, repository_for};

pub fn exec(epoch: Option<NaiveDateTime>, key: Option<i64>, size: Option<usize>, json: bool) -> Result<()> {
    let size = page_size_or_default(size);
    let source = repository_for(epoch).article_paging_source();
    let page = source
        .fetch_page(key, size)
        .with_context(|| format!("fetch page at {key:?} (size {size})"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    println!(
        "page: {} item(s), prev_key={}, next_key={}",
        page.len(),
        page.prev_key
            .map(|k| k.to_string())
            .unwrap_or_else(|| "none".to_string()),
        page.next_key
    );
    for a in &page.data {
        println!("  {}", display_article(a));
    }
    Ok(())
}
