use anyhow::Result;
use chrono::NaiveDateTime;
use log::info;

use crate::config::PagerBuilder;
use crate::consts::MIN_KEY;
use crate::metrics;
use crate::pager::Pager;

use super::util::{print_article, repository_for};

pub fn exec(
    epoch: Option<NaiveDateTime>,
    pages: usize,
    size: Option<usize>,
    invalidate_at: Option<usize>,
    json: bool,
    show_metrics: bool,
) -> Result<()> {
    let repo = repository_for(epoch);
    let mut builder = PagerBuilder::new();
    if let Some(n) = size {
        builder = builder.page_size(n);
    }
    let mut pager = Pager::from_builder(|| repo.article_paging_source(), builder)?;
    info!("scroll: {}", pager.config());

    let total = pages.saturating_mul(pager.config().page_size);
    let mut index = 0usize;
    let mut invalidated = false;

    for _ in 0..total {
        let Some(article) = pager.access(index)? else {
            break;
        };
        let anchor_id = article.id;
        print_article(article, json)?;

        if !invalidated && invalidate_at == Some(index) {
            invalidated = true;
            let key = pager.invalidate()?;
            if json {
                println!(
                    "{}",
                    serde_json::json!({ "event": "invalidate", "refresh_key": key, "anchor_key": anchor_id })
                );
            } else {
                println!(
                    "-- invalidated at #{anchor_id}, reloaded from {}",
                    key.map(|k| k.to_string()).unwrap_or_else(|| "start".to_string())
                );
            }
            // Позиция якоря в новом окне.
            let start = key.unwrap_or(MIN_KEY);
            index = usize::try_from(anchor_id - start).unwrap_or(0);
        }
        index += 1;
    }

    if show_metrics {
        let m = metrics::snapshot();
        if json {
            println!("{}", serde_json::to_string(&m)?);
        } else {
            println!(
                "metrics: pages_loaded={} (refresh={}, append={}, prepend={}), records={}, avg_page_len={:.1}, dropped={}, invalidations={}",
                m.pages_loaded(),
                m.pages_refreshed,
                m.pages_appended,
                m.pages_prepended,
                m.records_generated,
                m.avg_page_len(),
                m.pages_dropped,
                m.invalidations
            );
        }
    }
    Ok(())
}
