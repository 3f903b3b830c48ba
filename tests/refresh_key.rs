use chrono::NaiveDate;
use oorandom::Rand64;

use articlefeed::{AnchorState, ArticleRepository, MIN_KEY};

fn repo() -> ArticleRepository {
    let epoch = NaiveDate::from_ymd_opt(2021, 12, 31)
        .and_then(|d| d.and_hms_opt(23, 59, 59))
        .expect("valid date");
    ArticleRepository::with_fixed_epoch(epoch)
}

#[test]
fn no_anchor_means_restart() {
    let s = repo().article_paging_source();
    assert_eq!(s.compute_refresh_key(None), None);
}

#[test]
fn anchor_is_centered_half_page_back() {
    let s = repo().article_paging_source();
    let a = AnchorState { anchor_key: 120, page_size: 50 };
    assert_eq!(s.compute_refresh_key(Some(a)), Some(95));
}

#[test]
fn anchor_near_start_clamps_to_min_key() {
    let s = repo().article_paging_source();
    for anchor_key in 0..25 {
        let a = AnchorState { anchor_key, page_size: 50 };
        assert_eq!(s.compute_refresh_key(Some(a)), Some(MIN_KEY));
    }
}

#[test]
fn random_anchors_follow_formula() {
    let s = repo().article_paging_source();
    let mut rng = Rand64::new(0xA11CE);
    for _ in 0..500 {
        let anchor_key = rng.rand_range(0..1_000_000) as i64;
        let page_size = rng.rand_range(1..1_000) as usize;
        let got = s.compute_refresh_key(Some(AnchorState { anchor_key, page_size }));
        let expected = (anchor_key - (page_size / 2) as i64).max(MIN_KEY);
        assert_eq!(got, Some(expected));
    }
}

#[test]
fn refreshed_window_brackets_anchor() -> anyhow::Result<()> {
    let s = repo().article_paging_source();
    let anchor = AnchorState { anchor_key: 400, page_size: 50 };
    let key = s.compute_refresh_key(Some(anchor));
    let p = s.fetch_page(key, 150)?;
    assert!(p.data.iter().any(|a| a.id == 400));
    assert_eq!(p.data.first().map(|a| a.id), Some(375));
    Ok(())
}
