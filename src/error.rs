//! Error kinds of the paging core.
//!
//! The core only fails on malformed call-site input; every other outcome is a
//! defined value. Outer layers (CLI, pager conveniences) wrap this in anyhow.

use thiserror::Error as ThisError;

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum FeedError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl FeedError {
    pub fn invalid<S: Into<String>>(msg: S) -> Self {
        FeedError::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, FeedError>;
