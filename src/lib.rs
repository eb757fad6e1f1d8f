//! Swigrename - SWIG rename directive generator for Ruby bindings
//!
//! Swigrename is a CLI tool and library for deriving Ruby-style naming
//! directives from SWIG-generated wrapper files. It scans `*.cpp` wrappers
//! for method-registration calls and prints `%rename` and `%alias`
//! directives that rewrite the registered names into snake_case, escaping
//! names that collide with C++/SWIG keywords.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing and the run loop)
//! - `directives`: Rename/alias entry types and output rendering
//! - `extract`: Line classification and per-file scanning
//! - `rename`: Name derivation (substitution, case conversion, keyword escape)
//! - `scanner`: Candidate wrapper file discovery

pub mod cli;
pub mod directives;
pub mod extract;
pub mod rename;
pub mod scanner;
