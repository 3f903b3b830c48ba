use anyhow::Result;
use chrono::NaiveDate;

use articlefeed::{metrics, ArticleRepository, FeedConfig, Pager};

#[test]
fn pager_activity_is_counted() -> Result<()> {
    metrics::reset();

    let epoch = NaiveDate::from_ymd_opt(2022, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("valid date");
    let r = ArticleRepository::with_fixed_epoch(epoch);
    let cfg = FeedConfig::default()
        .with_page_size(10)
        .with_max_size(Some(30));
    let mut pager = Pager::new(|| r.article_paging_source(), cfg, None)?;

    for _ in 0..80 {
        let idx = pager.anchor_position().map(|p| p + 1).unwrap_or(0);
        pager.access(idx)?;
    }
    assert!(pager.len() <= 30, "retained {} items", pager.len());
    pager.invalidate()?;

    let m = metrics::snapshot();
    assert!(m.pages_refreshed >= 2, "refreshes: {}", m.pages_refreshed);
    assert!(m.pages_appended >= 3, "appends: {}", m.pages_appended);
    assert!(m.pages_dropped >= 1, "dropped: {}", m.pages_dropped);
    assert!(m.invalidations >= 1);
    assert!(m.records_generated >= 10 * m.pages_loaded());
    assert!(m.avg_page_len() >= 10.0);
    Ok(())
}
