//! Behavioral parity between the two lookup strategies
//!
//! For the same primary/fallback configuration, both strategies must return
//! identical results for every key — present, absent, duplicated, empty, or
//! substituted. Strategy choice is a memory-vs-I/O tradeoff, never a
//! semantic one.

use std::fs;
use std::path::PathBuf;

use lokey::{ReplacePair, Resolver, Strategy};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const PRIMARY: &str = "\
greeting=Hallo ([name])
title=First
blank=
formula=x=y=z
title=Second
broken line without separator
umlaut=Grüße ([NAME])
";

const FALLBACK: &str = "\
greeting=Hello ([name])
farewell=Bye ([name]), bye ([name])
only_fallback=fallback text
";

const PROBE_KEYS: &[&str] = &[
    "greeting",
    "title",
    "blank",
    "formula",
    "umlaut",
    "farewell",
    "only_fallback",
    "broken line without separator",
    "missing entirely",
    "",
];

fn write_source(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

fn configured_pair(dir: &TempDir) -> (Box<dyn Resolver>, Box<dyn Resolver>) {
    let primary = write_source(dir, "primary.lang", PRIMARY);
    let fallback = write_source(dir, "fallback.lang", FALLBACK);

    let mut cached = Strategy::Cached.new_resolver();
    let mut indexed = Strategy::Indexed.new_resolver();
    for resolver in [&mut cached, &mut indexed] {
        resolver.set_primary(&primary).unwrap();
        resolver.set_fallback(&fallback).unwrap();
    }
    (cached, indexed)
}

#[test]
fn raw_resolution_is_identical() {
    let dir = TempDir::new().unwrap();
    let (cached, indexed) = configured_pair(&dir);

    for key in PROBE_KEYS {
        assert_eq!(
            cached.resolve(key),
            indexed.resolve(key),
            "strategies disagree on key {:?}",
            key
        );
    }
}

#[test]
fn positional_substitution_is_identical() {
    let dir = TempDir::new().unwrap();
    let (cached, indexed) = configured_pair(&dir);

    for key in PROBE_KEYS {
        assert_eq!(
            cached.resolve_positional(key, &["Alice", "extra"]),
            indexed.resolve_positional(key, &["Alice", "extra"]),
            "strategies disagree on key {:?}",
            key
        );
    }
}

#[test]
fn named_substitution_is_identical() {
    let dir = TempDir::new().unwrap();
    let (cached, indexed) = configured_pair(&dir);
    let pairs = [ReplacePair::new("name", "Bob")];

    for key in PROBE_KEYS {
        assert_eq!(
            cached.resolve_named(key, &pairs),
            indexed.resolve_named(key, &pairs),
            "strategies disagree on key {:?}",
            key
        );
    }
}

#[test]
fn fallback_only_configuration_is_identical() {
    let dir = TempDir::new().unwrap();
    let fallback = write_source(&dir, "fallback.lang", FALLBACK);

    let mut cached = Strategy::Cached.new_resolver();
    let mut indexed = Strategy::Indexed.new_resolver();
    for resolver in [&mut cached, &mut indexed] {
        resolver.set_fallback(&fallback).unwrap();
    }

    for key in PROBE_KEYS {
        assert_eq!(cached.resolve(key), indexed.resolve(key));
    }
}

#[test]
fn cleared_slots_are_identical() {
    let dir = TempDir::new().unwrap();
    let (mut cached, mut indexed) = configured_pair(&dir);

    for resolver in [&mut cached, &mut indexed] {
        resolver.clear_primary();
        resolver.clear_fallback();
    }

    for key in PROBE_KEYS {
        assert_eq!(cached.resolve(key), None);
        assert_eq!(indexed.resolve(key), None);
    }
}
