use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::character::Pc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreErrorCode {
    Io,
    NotASavegame,
    Corrupt,
    LedgerFormat,
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not a Yakuza 0 savegame", path.display())]
    NotASavegame { path: PathBuf },

    #[error("{width}-byte access at offset {offset:#07x} exceeds buffer length {len:#07x}")]
    OutOfBounds {
        offset: usize,
        width: usize,
        len: usize,
    },

    #[error("no NUL terminator within {limit} bytes of offset {offset:#07x}")]
    MalformedString { offset: usize, limit: usize },

    #[error("difficulty fields disagree ({first} vs {second})")]
    InconsistentDifficulty { first: u8, second: u8 },

    #[error("{}:{line}: {message}", path.display())]
    LedgerFormat {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("no entry for {filename} in remotecache")]
    LedgerEntryMissing { filename: String },
}

impl CoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn code(&self) -> CoreErrorCode {
        match self {
            Self::Io { .. } => CoreErrorCode::Io,
            Self::NotASavegame { .. } => CoreErrorCode::NotASavegame,
            Self::OutOfBounds { .. }
            | Self::MalformedString { .. }
            | Self::InconsistentDifficulty { .. } => CoreErrorCode::Corrupt,
            Self::LedgerFormat { .. } | Self::LedgerEntryMissing { .. } => {
                CoreErrorCode::LedgerFormat
            }
        }
    }
}

/// Reasons a single item or hostess edit was skipped. None of these abort
/// the surrounding batch.
#[derive(Debug, Error)]
pub enum InsertError {
    #[error("item name \"{0}\" not found, cannot insert")]
    UnknownName(String),

    #[error("refusing to add {item} to {character}")]
    CharacterLocked { item: String, character: Pc },

    #[error("{item} could not be inserted into {region} due to lack of space")]
    NoRoomAvailable { item: String, region: &'static str },

    #[error("cannot insert at {region} index {index}, the inventory only has {slots} slots")]
    IndexOutOfRange {
        region: &'static str,
        index: usize,
        slots: usize,
    },

    #[error("hostess \"{0}\" not found")]
    UnknownHostess(String),

    #[error(transparent)]
    Store(#[from] CoreError),
}
