//! Line classification and per-file scanning.
//!
//! Wrapper files are mostly irrelevant generated code; only two line shapes
//! matter. A `SWIGTYPE_p_<Type>,` marker updates the current owning type,
//! and a `rb_define_method`/`rb_define_module_function` call registers a
//! method under a quoted name. Everything else is skipped silently.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

use crate::directives::{AliasEntry, Directives, RenameEntry};
use crate::rename::{self, Substitution};

/// How a method was registered with the interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationKind {
    InstanceMethod,
    ModuleFunction,
}

/// Classification of one wrapper source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// A type wrapper declaration; updates the current owning type.
    TypeMarker(String),
    /// A method registration carrying the quoted method name.
    Registration {
        kind: RegistrationKind,
        name: String,
    },
    /// Anything else, including registrations with no quoted name.
    Ignored,
}

static TYPE_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"SWIGTYPE_p_(.*),").unwrap());

static REGISTRATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(rb_define_method|rb_define_module_function)").unwrap());

// Matches quoted strings: "DoThing"
static QUOTED_STRING_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""([^"]+)""#).unwrap());

/// Classify a single line. The first matching rule wins.
pub fn classify_line(line: &str) -> LineKind {
    let line = line.trim();
    if line.is_empty() {
        return LineKind::Ignored;
    }

    if let Some(captures) = TYPE_MARKER_REGEX.captures(line) {
        return LineKind::TypeMarker(captures[1].to_string());
    }

    let Some(captures) = REGISTRATION_REGEX.captures(line) else {
        return LineKind::Ignored;
    };
    let kind = match &captures[1] {
        "rb_define_method" => RegistrationKind::InstanceMethod,
        _ => RegistrationKind::ModuleFunction,
    };

    match QUOTED_STRING_REGEX.captures(line) {
        Some(captures) => LineKind::Registration {
            kind,
            name: captures[1].to_string(),
        },
        None => LineKind::Ignored,
    }
}

/// Names that are excluded from renaming: already-conventional names
/// starting with a lowercase letter, and setter-style `name=` registrations
/// (SWIG renames those on its own).
fn is_excluded(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_lowercase()) || name.ends_with('=')
}

/// Scan wrapper source text and accumulate rename and alias entries.
pub fn extract_source(source: &str, rule: Option<&Substitution>) -> Directives {
    let mut directives = Directives::default();
    let mut owning_type: Option<String> = None;

    for line in source.lines() {
        match classify_line(line) {
            LineKind::TypeMarker(type_name) => owning_type = Some(type_name),
            LineKind::Registration { kind, name } => {
                if is_excluded(&name) {
                    continue;
                }

                let base_name = rename::rubify(&name, rule);
                let owner = match kind {
                    RegistrationKind::InstanceMethod => owning_type.clone(),
                    RegistrationKind::ModuleFunction => None,
                };

                match rename::reserved_escape(&base_name) {
                    Some(escaped) => {
                        directives.push_rename(RenameEntry {
                            owning_type: owner.clone(),
                            original_name: name,
                            new_name: escaped.clone(),
                        });
                        directives.push_alias(AliasEntry {
                            owning_type: owner,
                            canonical_name: escaped,
                            alias_name: base_name,
                        });
                    }
                    None => {
                        directives.push_rename(RenameEntry {
                            owning_type: owner,
                            original_name: name,
                            new_name: base_name,
                        });
                    }
                }
            }
            LineKind::Ignored => {}
        }
    }

    directives
}

/// Read one wrapper file and extract its directives.
pub fn extract_file(path: &Path, rule: Option<&Substitution>) -> Result<Directives> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read wrapper file: {}", path.display()))?;
    Ok(extract_source(&source, rule))
}
