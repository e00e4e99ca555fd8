// File: src/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnagramError {
    /// Query word failed `is_valid`. Only strict lookups report this.
    #[error("invalid word {word:?}: expected a single word made only of letters")]
    InvalidInput { word: String },

    #[error("failed to read dictionary {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AnagramError {
    pub fn invalid(word: &str) -> Self {
        Self::InvalidInput {
            word: word.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AnagramError>;
