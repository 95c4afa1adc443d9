//! The `key=template` line format shared by both lookup strategies
//!
//! A text source is a UTF-8 file with one record per line:
//!
//! ```text
//! greeting=Hello ([name]), you have ([count]) messages
//! ```
//!
//! The key is everything before the first `=`; the template is everything
//! after it and may itself contain `=`. There is no comment syntax, no
//! multi-line value, and no escaping. Lines without a `=` are malformed and
//! skipped, identically in both strategies.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::SourceError;

/// Split a record line at the first `=`.
///
/// Returns `None` for malformed lines (no `=`). Both strategies skip these
/// at load time; the indexed strategy also folds them into absence when one
/// appears at an indexed line after the file changed underneath.
pub(crate) fn split_record(line: &str) -> Option<(&str, &str)> {
    line.split_once('=')
}

/// Open a source file for line-by-line reading.
///
/// A missing path reports `NotFound`; a path that exists but cannot be
/// opened reports `Unreadable`. The handle is scoped to the caller and
/// dropped before its call returns.
pub(crate) fn open_source(path: &Path) -> Result<BufReader<File>, SourceError> {
    if !path.exists() {
        return Err(SourceError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path).map_err(|source| SourceError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Wrap an I/O error hit mid-read into `Unreadable`.
pub(crate) fn unreadable(path: &Path, source: std::io::Error) -> SourceError {
    SourceError::Unreadable {
        path: path.to_path_buf(),
        source,
    }
}
