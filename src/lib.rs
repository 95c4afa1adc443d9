//! Lokey — localization text resolution with pluggable lookup strategies
//!
//! A resolver holds a primary text source and optionally a fallback source,
//! both plain UTF-8 files of `key=template` lines. A lookup returns the
//! primary template for a key, else the fallback one, else `None`, and can
//! substitute `([tag])` placeholders with caller-supplied values.
//!
//! Two strategies implement the same [`Resolver`] contract and are chosen at
//! construction time:
//!
//! - [`CachedResolver`] loads both sources fully into memory; lookups never
//!   touch the filesystem again.
//! - [`IndexedResolver`] records only a key→line-number index and re-reads
//!   the backing file on every lookup, for very large sources queried
//!   infrequently.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use lokey::{CachedResolver, Resolver};
//!
//! let mut resolver = CachedResolver::new();
//! resolver.set_primary(Path::new("lang/de.lang"))?;
//! resolver.set_fallback(Path::new("lang/en.lang"))?;
//!
//! let greeting = resolver.resolve_positional("greeting", &["Alice"]);
//! # Ok::<(), lokey::SourceError>(())
//! ```
//!
//! Substitution also works on bare templates:
//!
//! ```rust
//! use lokey::substitute;
//!
//! let text = substitute::positional("Hello ([name])", &["Ada"]);
//! assert_eq!(text, "Hello Ada");
//! ```

pub mod error;
pub mod profile;
pub mod resolver;
mod source;
pub mod substitute;

pub use error::SourceError;
pub use profile::{Profile, ProfileError};
pub use resolver::{CachedResolver, IndexedResolver, Resolver, Strategy};
pub use substitute::ReplacePair;

use std::sync::Mutex;

use once_cell::sync::Lazy;

static GLOBAL: Lazy<Mutex<CachedResolver>> = Lazy::new(|| Mutex::new(CachedResolver::new()));

/// Process-wide shared resolver around the cached strategy.
///
/// A convenience for applications that want one instance without threading
/// it through every call site. The core contract lives on [`Resolver`];
/// nothing in this crate depends on the shared instance.
///
/// ```rust
/// use lokey::Resolver;
///
/// let shared = lokey::global().lock().unwrap();
/// assert_eq!(shared.resolve("unconfigured-key"), None);
/// ```
pub fn global() -> &'static Mutex<CachedResolver> {
    &GLOBAL
}
