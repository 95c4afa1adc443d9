//! Resolver profiles for configuration from a file
//!
//! A profile names the primary and fallback sources and the lookup strategy
//! so a caller (the CLI in particular) can configure a resolver from one
//! TOML file instead of individual flags:
//!
//! ```toml
//! strategy = "indexed"
//!
//! [metadata]
//! name = "German UI"
//!
//! [sources]
//! primary = "lang/de.lang"
//! fallback = "lang/en.lang"
//! ```
//!
//! `strategy` is a top-level key and has to precede the tables.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::resolver::Strategy;

/// Errors that can occur when loading or parsing profiles
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Failed to read profile file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse profile TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A resolver profile loaded from TOML
#[derive(Debug, Clone)]
pub struct Profile {
    /// Optional name for the profile
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Primary source path, if configured
    pub primary: Option<PathBuf>,
    /// Fallback source path, if configured
    pub fallback: Option<PathBuf>,
    /// Lookup strategy; defaults to cached
    pub strategy: Strategy,
}

/// TOML structure for deserializing profiles
#[derive(Deserialize)]
struct TomlProfile {
    metadata: Option<TomlMetadata>,
    sources: Option<TomlSources>,
    #[serde(default)]
    strategy: TomlStrategy,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

#[derive(Deserialize)]
struct TomlSources {
    primary: Option<PathBuf>,
    fallback: Option<PathBuf>,
}

#[derive(Deserialize, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
enum TomlStrategy {
    #[default]
    Cached,
    Indexed,
}

impl From<TomlStrategy> for Strategy {
    fn from(strategy: TomlStrategy) -> Self {
        match strategy {
            TomlStrategy::Cached => Strategy::Cached,
            TomlStrategy::Indexed => Strategy::Indexed,
        }
    }
}

impl Profile {
    /// Load a profile from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ProfileError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a profile from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ProfileError> {
        let parsed: TomlProfile = toml::from_str(content)?;

        Ok(Profile {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            primary: parsed.sources.as_ref().and_then(|s| s.primary.clone()),
            fallback: parsed.sources.as_ref().and_then(|s| s.fallback.clone()),
            strategy: parsed.strategy.into(),
        })
    }
}
