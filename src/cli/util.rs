use anyhow::Result;
use chrono::NaiveDateTime;

use crate::article::{Article, ArticleRepository};
use crate::config::FeedConfig;
use crate::consts::EPOCH_FORMAT;

pub fn parse_epoch(s: &str) -> std::result::Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(s.trim(), EPOCH_FORMAT)
        .map_err(|e| format!("epoch '{s}' must match {EPOCH_FORMAT}: {e}"))
}

pub fn repository_for(epoch: Option<NaiveDateTime>) -> ArticleRepository {
    match epoch {
        Some(e) => ArticleRepository::with_fixed_epoch(e),
        None => ArticleRepository::new(),
    }
}

/// Page size from the flag, falling back to env/default.
pub fn page_size_or_default(size: Option<usize>) -> usize {
    size.unwrap_or_else(|| FeedConfig::from_env().page_size)
}

pub fn display_article(a: &Article) -> String {
    format!(
        "#{} '{}' ({}) created {}",
        a.id,
        a.title,
        a.description,
        a.created.format(EPOCH_FORMAT)
    )
}

pub fn print_article(a: &Article, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(a)?);
    } else {
        println!("{}", display_article(a));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_epoch_ok_and_bad() {
        let e = parse_epoch("2022-06-01T12:00:00").expect("must parse");
        assert_eq!(e.format(EPOCH_FORMAT).to_string(), "2022-06-01T12:00:00");
        assert!(parse_epoch("yesterday").is_err());
    }
}
