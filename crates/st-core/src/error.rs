use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading a session log.
///
/// The display text is what the CLI prints to stderr, verbatim.
#[derive(Debug, Error)]
pub enum LogError {
    /// The log path does not exist.
    #[error("Error: The file '{}' was not found.", path.display())]
    NotFound { path: PathBuf },

    /// The log could not be opened or read for any other reason.
    #[error("Error reading file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LogError {
    /// Classifies an I/O failure on `path`.
    pub(crate) fn from_io(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}
