//! Общие константы ленты (ключи, размеры страниц, ENV-переменные).

// -------- Keys --------
/// Lowest key of the virtual dataset; the first page always starts here.
pub const MIN_KEY: i64 = 0;

// -------- Page sizing --------
/// Items per page requested by the pager when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 50;

// Initial load = INITIAL_LOAD_MULTIPLIER * page_size (если не задан явно).
pub const INITIAL_LOAD_MULTIPLIER: usize = 3;

// -------- ENV --------
pub const ENV_PAGE_SIZE: &str = "FEED_PAGE_SIZE";
pub const ENV_INITIAL_LOAD_SIZE: &str = "FEED_INITIAL_LOAD_SIZE";
pub const ENV_PREFETCH_DISTANCE: &str = "FEED_PREFETCH_DISTANCE";
pub const ENV_MAX_SIZE: &str = "FEED_MAX_SIZE";

// -------- Article text --------
pub const TITLE_PREFIX: &str = "Article";
pub const DESCRIPTION_PREFIX: &str = "This describes article";

// Формат --epoch в CLI (LocalDateTime без зоны).
pub const EPOCH_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
