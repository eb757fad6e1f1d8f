//! Candidate wrapper file discovery.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use glob::glob;

/// Find the generated `*.cpp` wrapper files directly under `dir`.
///
/// Entries the glob cannot read are skipped, with a warning on stderr when
/// verbose. The returned order is whatever the glob iterator yields.
pub fn find_wrapper_files(dir: &Path, verbose: bool) -> Result<Vec<PathBuf>> {
    let pattern = dir.join("*.cpp");
    let pattern_str = pattern.to_string_lossy();

    let entries = glob(&pattern_str)
        .with_context(|| format!("Invalid wrapper file pattern '{}'", pattern_str))?;

    let mut files = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) => files.push(path),
            Err(e) => {
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
            }
        }
    }

    Ok(files)
}
