//! Error types for source configuration

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a text source into a resolver slot.
///
/// These surface only from `set_primary`/`set_fallback`. Lookups never
/// error: a missing key, an unconfigured slot, and an unreadable indexed
/// line all fold into `None`.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The source path does not exist
    #[error("source file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// The source path exists but could not be opened or read
    #[error("source file unreadable: {}: {}", .path.display(), .source)]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SourceError {
    /// The path the failed load was configured with.
    pub fn path(&self) -> &PathBuf {
        match self {
            SourceError::NotFound { path } => path,
            SourceError::Unreadable { path, .. } => path,
        }
    }
}
