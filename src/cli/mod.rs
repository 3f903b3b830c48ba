//! cli — командная строка articlefeed.
//!
//! - mod.rs         — Cli/Cmd (clap derive) и диспетчер run()
//! - cmd_page.rs    — одна загрузка страницы
//! - cmd_refresh.rs — расчёт refresh key
//! - cmd_scroll.rs  — прокрутка через Pager (+ инвалидация)
//! - util.rs        — разбор --epoch, печать записей

pub mod cmd_page;
pub mod cmd_refresh;
pub mod cmd_scroll;
pub mod util;

use anyhow::Result;
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};

use util::parse_epoch;

/// Synthetic article feed with keyed paging
#[derive(Parser, Debug)]
#[command(
    name = "articlefeed",
    version,
    about = "Synthetic infinite article feed with keyed paging",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Fixed epoch (%Y-%m-%dT%H:%M:%S) instead of the current local time
    #[arg(long, global = true, value_parser = parse_epoch)]
    pub epoch: Option<NaiveDateTime>,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Fetch one page starting at --key (first page if omitted)
    Page {
        #[arg(long)]
        key: Option<i64>,
        /// Items to load (default: FEED_PAGE_SIZE or 50)
        #[arg(long)]
        size: Option<usize>,
        /// JSON output (single object)
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Compute the key a refresh would restart from
    ///
    /// Пример:
    ///   articlefeed refresh-key --anchor 120 --size 50   # -> 95
    ///   articlefeed refresh-key                          # -> none
    RefreshKey {
        /// Key of the item last in view; omitted means no anchor
        #[arg(long)]
        anchor: Option<i64>,
        #[arg(long)]
        size: Option<usize>,
    },
    /// Scroll forward through the feed using the pager
    ///
    /// Примеры:
    ///   articlefeed scroll --pages 3
    ///   articlefeed scroll --pages 4 --invalidate-at 120 --json
    Scroll {
        /// Number of pages worth of items to walk
        #[arg(long, default_value_t = 3)]
        pages: usize,
        /// Page size override (default: FEED_PAGE_SIZE or 50)
        #[arg(long)]
        size: Option<usize>,
        /// Invalidate when this index is reached
        #[arg(long)]
        invalidate_at: Option<usize>,
        /// JSONL output
        #[arg(long, default_value_t = false)]
        json: bool,
        /// Print paging metrics at the end
        #[arg(long, default_value_t = false)]
        metrics: bool,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    run_with(cli)
}

pub fn run_with(cli: Cli) -> Result<()> {
    let epoch = cli.epoch;
    match cli.cmd {
        Cmd::Page { key, size, json } => cmd_page::exec(epoch, key, size, json),

        Cmd::RefreshKey { anchor, size } => cmd_refresh::exec(epoch, anchor, size),

        Cmd::Scroll { pages, size, invalidate_at, json, metrics } =>
            cmd_scroll::exec(epoch, pages, size, invalidate_at, json, metrics),
    }
}
