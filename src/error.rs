use std::path::PathBuf;

/// Everything that can go wrong while loading the table or deciding a turn.
///
/// [`Error::CorruptCache`] and [`Error::MissingCache`] are fatal at startup.
/// [`Error::UnknownWord`] and [`Error::NoCandidate`] are turn-local: the game
/// loop (or a [`Backup`](crate::Backup) player) substitutes a legal fallback.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown word {0:?}")]
    UnknownWord(String),
    #[error("duplicate word {0:?} in vocabulary")]
    DuplicateWord(String),
    #[error("corrupt embedding cache: {0}")]
    CorruptCache(String),
    #[error("no embedding cache at {0}, produce it with the external encoder")]
    MissingCache(PathBuf),
    #[error("no candidate left: {excluded} of {total} excluded")]
    NoCandidate { excluded: usize, total: usize },
    #[error("malformed game state: {0}")]
    MalformedState(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Errors the caller should recover from by picking a fallback move.
    pub fn is_turn_local(&self) -> bool {
        matches!(self, Error::UnknownWord(_) | Error::NoCandidate { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
