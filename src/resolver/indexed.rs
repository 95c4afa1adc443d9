//! Line-indexed lookup: near-zero memory, one file read per resolve

use std::collections::HashMap;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use super::Resolver;
use crate::error::SourceError;
use crate::source;

/// One configured slot: the backing file and its line index.
#[derive(Debug)]
struct IndexedSlot {
    path: PathBuf,
    /// Key → 1-based line number, snapshot at indexing time.
    lines: HashMap<String, u64>,
}

/// Resolver that keeps only a key→line-number index per source and streams
/// the backing file to the indexed line on every lookup.
///
/// This trades lookup latency (one open plus a sequential skip per call)
/// for a memory footprint independent of template text, which suits very
/// large sources queried infrequently.
///
/// The index is a snapshot. If the backing file changes after indexing,
/// lookups may return stale text, and any line that can no longer be read
/// folds into `None` exactly like an absent key.
#[derive(Debug, Default)]
pub struct IndexedResolver {
    primary: Option<IndexedSlot>,
    fallback: Option<IndexedSlot>,
}

impl IndexedResolver {
    /// Create a resolver with both slots empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// One forward scan recording the line number of every well-formed
    /// record. No template text is retained. Malformed lines are skipped;
    /// later duplicates overwrite earlier ones.
    fn build_index(path: &Path) -> Result<IndexedSlot, SourceError> {
        let reader = source::open_source(path)?;
        let mut lines = HashMap::new();
        for (number, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| source::unreadable(path, e))?;
            if let Some((key, _)) = source::split_record(&line) {
                lines.insert(key.to_string(), number as u64 + 1);
            }
        }
        Ok(IndexedSlot {
            path: path.to_path_buf(),
            lines,
        })
    }

    /// Re-read the template for `key` from a slot's backing file.
    ///
    /// Skips to the indexed line and splits it at the first `=`. Anything
    /// that goes wrong on the way — file gone, fewer lines than indexed, a
    /// read error, a line without `=` — yields `None`.
    fn read_slot(slot: &IndexedSlot, key: &str) -> Option<String> {
        let goal = *slot.lines.get(key)?;
        let reader = source::open_source(&slot.path).ok()?;
        let line = reader.lines().nth(goal as usize - 1)?.ok()?;
        source::split_record(&line).map(|(_, template)| template.to_string())
    }
}

impl Resolver for IndexedResolver {
    fn set_primary(&mut self, path: &Path) -> Result<(), SourceError> {
        // The replacement index is built fully before the slot is assigned,
        // so a failed re-index leaves the previous index and file reference
        // intact.
        self.primary = Some(Self::build_index(path)?);
        Ok(())
    }

    fn set_fallback(&mut self, path: &Path) -> Result<(), SourceError> {
        self.fallback = Some(Self::build_index(path)?);
        Ok(())
    }

    fn clear_primary(&mut self) {
        self.primary = None;
    }

    fn clear_fallback(&mut self) {
        self.fallback = None;
    }

    fn resolve(&self, key: &str) -> Option<String> {
        // A primary read that fails (not just a key missing from its index)
        // also falls through to the fallback slot.
        self.primary
            .as_ref()
            .and_then(|slot| Self::read_slot(slot, key))
            .or_else(|| {
                self.fallback
                    .as_ref()
                    .and_then(|slot| Self::read_slot(slot, key))
            })
    }
}
