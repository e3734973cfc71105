use std::io;
use std::path::PathBuf;

/// Failure to produce a word list or dictionary.
///
/// Rejected guesses are not errors; see [`crate::game::GuessResult`].
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{source_name} contains no usable words")]
    Empty { source_name: String },

    #[error("no word list source could be loaded")]
    NoSource,
}

impl LoadError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
