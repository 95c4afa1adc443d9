//! Tag substitution applied to resolved templates
//!
//! Templates carry placeholder tags of the form `([name])`. Two substitution
//! modes exist and callers pick one per call:
//!
//! - [`positional`]: each supplied replacement consumes the first remaining
//!   bracket marker, left to right.
//! - [`named`]: each `(tag, replacement)` pair globally replaces every
//!   `([tag])` occurrence, matched case-insensitively.
//!
//! A template with no tags passes through unchanged whatever arguments are
//! supplied. Replacement text is always inserted literally.

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

/// Any bracket marker `([ ... ])`, shortest match.
static MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(\[.*?\]\)").expect("valid marker pattern"));

/// A named tag and the text that replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacePair {
    tag: String,
    replacement: String,
}

impl ReplacePair {
    /// Create a pair replacing `([tag])` with `replacement`.
    pub fn new(tag: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            replacement: replacement.into(),
        }
    }

    /// The tag matched inside `([...])`, case-insensitively.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The text substituted for each match.
    pub fn replacement(&self) -> &str {
        &self.replacement
    }
}

/// Replace bracket markers in supplied order.
///
/// For each replacement, the first marker still present in the (already
/// rewritten) string is replaced. Extra replacements are silently unused;
/// if there are fewer replacements than markers, the leftover markers stay
/// verbatim in the output.
pub fn positional(template: &str, replacements: &[&str]) -> String {
    let mut text = template.to_string();
    for replacement in replacements {
        let marker = match MARKER.find(&text) {
            Some(found) => found.range(),
            // No marker left; the rest of the replacements are unused too.
            None => break,
        };
        text.replace_range(marker, replacement);
    }
    text
}

/// Replace named tags, each pair applied as a global substitution.
///
/// Pairs run in supplied order over the output of the previous pair, so a
/// later pair can re-match text an earlier one introduced. Tags match
/// case-insensitively and literally (regex metacharacters in a tag carry no
/// meaning).
pub fn named(template: &str, pairs: &[ReplacePair]) -> String {
    let mut text = template.to_string();
    for pair in pairs {
        let pattern = Regex::new(&format!(r"(?i)\(\[{}\]\)", regex::escape(pair.tag())))
            .expect("escaped tag pattern is valid");
        text = pattern
            .replace_all(&text, NoExpand(pair.replacement()))
            .into_owned();
    }
    text
}
