//! Lookup strategies over `key=template` text sources
//!
//! Two interchangeable strategies implement the shared [`Resolver`]
//! contract. [`CachedResolver`] materializes both sources in memory at
//! configuration time; [`IndexedResolver`] keeps only a key→line-number
//! index and re-reads the backing file per lookup. Which one fits depends on
//! source size and lookup frequency, nothing else: for any given
//! configuration both return the same text for the same key.
//!
//! Resolvers are not internally synchronized. Configuration and lookup calls
//! on one instance need external synchronization if shared across threads.

mod cached;
mod indexed;

pub use cached::CachedResolver;
pub use indexed::IndexedResolver;

use std::path::Path;

use crate::error::SourceError;
use crate::substitute::{self, ReplacePair};

/// Which lookup strategy a resolver uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Load sources fully into memory; lookups are pure memory reads.
    #[default]
    Cached,
    /// Index line numbers only; re-read the backing file per lookup.
    Indexed,
}

impl Strategy {
    /// Construct an empty resolver using this strategy.
    pub fn new_resolver(self) -> Box<dyn Resolver> {
        match self {
            Strategy::Cached => Box::new(CachedResolver::new()),
            Strategy::Indexed => Box::new(IndexedResolver::new()),
        }
    }
}

/// The shared resolution contract.
///
/// A resolver holds two independent source slots. `resolve` consults the
/// primary slot first, then the fallback, and reports absence as `None` —
/// never as an error. Only the `set_*` configuration calls can fail.
pub trait Resolver {
    /// Load `path` into the primary slot, replacing its prior contents.
    fn set_primary(&mut self, path: &Path) -> Result<(), SourceError>;

    /// Load `path` into the fallback slot, replacing its prior contents.
    fn set_fallback(&mut self, path: &Path) -> Result<(), SourceError>;

    /// Forget the primary slot; its keys stop resolving. The fallback slot
    /// is unaffected.
    fn clear_primary(&mut self);

    /// Forget the fallback slot. The primary slot is unaffected.
    fn clear_fallback(&mut self);

    /// Raw template for `key`: primary first, then fallback, else `None`.
    ///
    /// A key mapped to an empty template is present (`Some("")`), distinct
    /// from a missing key (`None`).
    fn resolve(&self, key: &str) -> Option<String>;

    /// Resolve `key`, then fill bracket markers in order.
    ///
    /// See [`substitute::positional`] for the marker rules. Absence
    /// propagates unchanged; no substitution runs on a missing key.
    fn resolve_positional(&self, key: &str, replacements: &[&str]) -> Option<String> {
        self.resolve(key)
            .map(|template| substitute::positional(&template, replacements))
    }

    /// Resolve `key`, then substitute named tags.
    ///
    /// See [`substitute::named`] for the matching rules. Absence propagates
    /// unchanged.
    fn resolve_named(&self, key: &str, pairs: &[ReplacePair]) -> Option<String> {
        self.resolve(key)
            .map(|template| substitute::named(&template, pairs))
    }
}
