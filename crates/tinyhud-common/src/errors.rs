use std::path::PathBuf;

use crate::types::Position;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config watch error: {0}")]
    WatchError(String),
}

/// Problems found while building or editing the slot table.
///
/// These never escape an input turn; callers log them and fall back to an
/// empty slot or page 0.
#[derive(Debug, thiserror::Error)]
pub enum SlotError {
    #[error("page {page} is out of range for {position} (max page count {max})")]
    PageOutOfRange {
        page: u32,
        position: Position,
        max: u32,
    },

    #[error("unknown form: {0}")]
    UnknownForm(String),

    #[error("slot entry for page {page}, {position} has no usable form")]
    EmptyAssignment { page: u32, position: Position },
}

#[derive(Debug, thiserror::Error)]
pub enum HudError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Slot(#[from] SlotError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("script error: {0}")]
    Script(String),

    #[error("{0}")]
    Other(String),
}
