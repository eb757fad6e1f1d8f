//! Name derivation for registered methods.
//!
//! Converts the C++-style names registered with the interpreter into Ruby
//! convention: an optional user-supplied substitution, underscore insertion
//! at case boundaries, lowercasing, and a trailing-underscore escape for
//! names that collide with C++/SWIG keywords.

use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::{NoExpand, Regex};

/// Keywords SWIG cannot accept as registered names.
const RESERVED_WORDS: [&str; 4] = ["new", "create", "delete", "union"];

/// User-supplied pattern/replacement pair applied to each method name
/// before case conversion. Replacement text is literal.
#[derive(Debug)]
pub struct Substitution {
    pattern: Regex,
    replacement: String,
}

impl Substitution {
    pub fn new(pattern: &str, replacement: String) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .with_context(|| format!("Invalid --match pattern '{}'", pattern))?;
        Ok(Self {
            pattern,
            replacement,
        })
    }

    /// Replace the first match of the pattern in `name`.
    fn apply(&self, name: &str) -> String {
        self.pattern
            .replace(name, NoExpand(&self.replacement))
            .into_owned()
    }
}

// Lowercase letter immediately followed by an uppercase letter. Runs of
// uppercase letters contain no such boundary, so acronyms collapse:
// "HTTPServer" becomes "httpserver".
static CASE_BOUNDARY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([[:lower:]])([[:upper:]])").unwrap());

/// Convert a registered method name to Ruby convention.
pub fn rubify(name: &str, rule: Option<&Substitution>) -> String {
    let name = match rule {
        Some(rule) => rule.apply(name),
        None => name.to_string(),
    };

    CASE_BOUNDARY_REGEX
        .replace_all(&name, "${1}_${2}")
        .to_lowercase()
}

/// Returns the keyword-escaped form of `name` when it collides with a
/// reserved word, `None` otherwise.
pub fn reserved_escape(name: &str) -> Option<String> {
    RESERVED_WORDS
        .contains(&name)
        .then(|| format!("{}_", name))
}
