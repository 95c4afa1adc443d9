//! Fully cached lookup: both sources live in memory

use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use super::Resolver;
use crate::error::SourceError;
use crate::source;

/// Resolver that materializes each source into a key→template map at
/// configuration time. Lookups never touch the filesystem.
///
/// Re-setting a slot replaces its map wholesale; there is no merging.
/// Duplicate keys within one file resolve to the last occurrence.
#[derive(Debug, Default)]
pub struct CachedResolver {
    primary: HashMap<String, String>,
    fallback: HashMap<String, String>,
}

impl CachedResolver {
    /// Create a resolver with both slots empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the whole file into a fresh map. Malformed lines are skipped;
    /// later duplicates overwrite earlier ones.
    fn load(path: &Path) -> Result<HashMap<String, String>, SourceError> {
        let reader = source::open_source(path)?;
        let mut entries = HashMap::new();
        for line in reader.lines() {
            let line = line.map_err(|e| source::unreadable(path, e))?;
            if let Some((key, template)) = source::split_record(&line) {
                entries.insert(key.to_string(), template.to_string());
            }
        }
        Ok(entries)
    }
}

impl Resolver for CachedResolver {
    fn set_primary(&mut self, path: &Path) -> Result<(), SourceError> {
        // Built fully before the slot is touched, so a failed load leaves
        // the prior mapping resolvable.
        self.primary = Self::load(path)?;
        Ok(())
    }

    fn set_fallback(&mut self, path: &Path) -> Result<(), SourceError> {
        self.fallback = Self::load(path)?;
        Ok(())
    }

    fn clear_primary(&mut self) {
        self.primary.clear();
    }

    fn clear_fallback(&mut self) {
        self.fallback.clear();
    }

    fn resolve(&self, key: &str) -> Option<String> {
        self.primary
            .get(key)
            .or_else(|| self.fallback.get(key))
            .cloned()
    }
}
