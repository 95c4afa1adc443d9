//! Lokey CLI
//!
//! Usage:
//!   lokey [OPTIONS] <KEY>...
//!
//! Options:
//!   -p, --primary <FILE>    Primary language file
//!   -f, --fallback <FILE>   Fallback language file
//!   -P, --profile <FILE>    Profile with sources and strategy (TOML format)
//!   -s, --strategy <NAME>   Lookup strategy: cached or indexed
//!   -a, --arg <TEXT>        Positional replacement (repeatable)
//!   -t, --tag <TAG=TEXT>    Named replacement (repeatable)
//!   -d, --debug             Report configuration and lookup outcomes
//!   -h, --help              Print help

use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};

use lokey::{Profile, ReplacePair, Resolver, Strategy};

#[derive(Parser)]
#[command(name = "lokey")]
#[command(about = "Localization text resolution with cached or indexed lookup")]
struct Cli {
    /// Keys to resolve
    #[arg(required = true)]
    keys: Vec<String>,

    /// Primary language file (overrides the profile)
    #[arg(short, long)]
    primary: Option<PathBuf>,

    /// Fallback language file (overrides the profile)
    #[arg(short, long)]
    fallback: Option<PathBuf>,

    /// Profile file with sources and strategy (TOML format)
    #[arg(short = 'P', long)]
    profile: Option<PathBuf>,

    /// Lookup strategy (overrides the profile)
    #[arg(short, long, value_enum)]
    strategy: Option<StrategyArg>,

    /// Positional replacement for the next bracket marker (repeatable)
    #[arg(short = 'a', long = "arg", value_name = "TEXT", conflicts_with = "tags")]
    args: Vec<String>,

    /// Named replacement as tag=text (repeatable)
    #[arg(short = 't', long = "tag", value_name = "TAG=TEXT")]
    tags: Vec<String>,

    /// Debug mode: report configuration and lookup outcomes on stderr
    #[arg(short, long)]
    debug: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    Cached,
    Indexed,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Cached => Strategy::Cached,
            StrategyArg::Indexed => Strategy::Indexed,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Profile first, individual flags on top
    let profile = match &cli.profile {
        Some(path) => match Profile::from_file(path) {
            Ok(p) => Some(p),
            Err(e) => {
                eprintln!("Error loading profile '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => None,
    };

    let primary = cli
        .primary
        .clone()
        .or_else(|| profile.as_ref().and_then(|p| p.primary.clone()));
    let fallback = cli
        .fallback
        .clone()
        .or_else(|| profile.as_ref().and_then(|p| p.fallback.clone()));
    let strategy: Strategy = cli
        .strategy
        .map(Strategy::from)
        .or_else(|| profile.as_ref().map(|p| p.strategy))
        .unwrap_or_default();

    if primary.is_none() && fallback.is_none() {
        eprintln!("No source configured; pass --primary, --fallback, or --profile");
        process::exit(1);
    }

    let tags = match parse_tags(&cli.tags) {
        Ok(tags) => tags,
        Err(bad) => {
            eprintln!("Invalid --tag '{}': expected tag=text", bad);
            process::exit(1);
        }
    };

    let mut resolver = strategy.new_resolver();
    if let Some(path) = &primary {
        if let Err(e) = resolver.set_primary(path) {
            eprintln!("Error loading primary source: {}", e);
            process::exit(1);
        }
        if cli.debug {
            eprintln!("[debug] primary source: {}", path.display());
        }
    }
    if let Some(path) = &fallback {
        if let Err(e) = resolver.set_fallback(path) {
            eprintln!("Error loading fallback source: {}", e);
            process::exit(1);
        }
        if cli.debug {
            eprintln!("[debug] fallback source: {}", path.display());
        }
    }

    let positional: Vec<&str> = cli.args.iter().map(String::as_str).collect();

    let mut missing = false;
    for key in &cli.keys {
        let resolved = if !tags.is_empty() {
            resolver.resolve_named(key, &tags)
        } else if !positional.is_empty() {
            resolver.resolve_positional(key, &positional)
        } else {
            resolver.resolve(key)
        };

        match resolved {
            Some(text) => {
                if cli.debug {
                    eprintln!("[debug] resolved '{}'", key);
                }
                println!("{}", text);
            }
            None => {
                missing = true;
                eprintln!("no value for '{}'", key);
            }
        }
    }

    if missing {
        process::exit(1);
    }
}

/// Parse repeated `tag=text` flags into replace pairs, keeping their order.
fn parse_tags(raw: &[String]) -> Result<Vec<ReplacePair>, String> {
    raw.iter()
        .map(|entry| {
            entry
                .split_once('=')
                .map(|(tag, text)| ReplacePair::new(tag, text))
                .ok_or_else(|| entry.clone())
        })
        .collect()
}
