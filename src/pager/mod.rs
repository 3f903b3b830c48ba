//! pager — синхронный драйвер поверх PagingSource.
//!
//! - core.rs  — Pager: refresh / append / prepend / access / invalidate, обрезка по max_size
//! - state.rs — PagingState: снимок загруженных страниц + anchor_position

pub mod core;
pub mod state;

pub use core::Pager;
pub use state::PagingState;
