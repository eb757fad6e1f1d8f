//! Rename and alias directive records and their rendered output.
//!
//! Entries are accumulated in discovery order while one wrapper file is
//! scanned and printed afterwards as two sections. Duplicates are neither
//! detected nor merged.

use std::io::{self, Write};

/// One registered method whose external name should be rewritten.
///
/// `owning_type` is `None` for module-level functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameEntry {
    pub owning_type: Option<String>,
    pub original_name: String,
    pub new_name: String,
}

/// An additional callable name for a method already covered by a rename.
///
/// `canonical_name` is the keyword-escaped primary name; `alias_name` is
/// the conventional name exposed alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    pub owning_type: Option<String>,
    pub canonical_name: String,
    pub alias_name: String,
}

/// Directives accumulated for one wrapper file.
#[derive(Debug, Default)]
pub struct Directives {
    renames: Vec<RenameEntry>,
    aliases: Vec<AliasEntry>,
}

impl Directives {
    pub fn push_rename(&mut self, entry: RenameEntry) {
        self.renames.push(entry);
    }

    pub fn push_alias(&mut self, entry: AliasEntry) {
        self.aliases.push(entry);
    }

    pub fn renames(&self) -> &[RenameEntry] {
        &self.renames
    }

    pub fn aliases(&self) -> &[AliasEntry] {
        &self.aliases
    }

    /// Render both directive sections in the format consumed by the SWIG
    /// interface files. Each section ends with two blank lines.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "// -------  SWIG Renames ------------")?;
        for entry in &self.renames {
            write!(out, "%rename({}) ", entry.new_name)?;
            if let Some(owning_type) = &entry.owning_type {
                write!(out, "{}::", owning_type)?;
            }
            writeln!(out, "{};", entry.original_name)?;
        }
        writeln!(out)?;
        writeln!(out)?;

        writeln!(out, "// -------  SWIG Aliases ------------")?;
        for entry in &self.aliases {
            write!(out, "%alias ")?;
            if let Some(owning_type) = &entry.owning_type {
                write!(out, "{}::", owning_type)?;
            }
            writeln!(out, "{} \"{}\";", entry.canonical_name, entry.alias_name)?;
        }
        writeln!(out)?;
        writeln!(out)?;

        Ok(())
    }
}
