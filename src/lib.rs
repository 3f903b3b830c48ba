// Базовые модули
pub mod consts;
pub mod error;
pub mod config;
pub mod metrics;

// Датасет и контракт постраничной загрузки
pub mod article; // src/article/{mod,repository}.rs
pub mod source;  // src/source/{mod,article}.rs
pub mod pager;   // src/pager/{mod,core,state}.rs

// CLI (используется бинарником articlefeed)
pub mod cli;

// Удобные реэкспорты
pub use article::{Article, ArticleGenerator, ArticleRepository, EpochPolicy};
pub use config::{FeedConfig, PagerBuilder};
pub use consts::MIN_KEY;
pub use error::FeedError;
pub use pager::{Pager, PagingState};
pub use source::{AnchorState, ArticlePagingSource, Key, LoadParams, Page, PagingSource};
