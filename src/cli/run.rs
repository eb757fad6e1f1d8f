//! Main run loop for the swigrename CLI.
//!
//! Builds the optional substitution rule, discovers the wrapper files in
//! the target directory and prints the directive sections for each file in
//! turn. Files are scanned one at a time; output for a file is only
//! emitted once that file has been read completely.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;

use super::args::Arguments;
use super::exit_status::ExitStatus;
use crate::{extract, rename::Substitution, scanner};

pub fn run(args: Arguments) -> Result<ExitStatus> {
    let rule = match (args.pattern, args.replace) {
        (Some(pattern), Some(replacement)) => Some(Substitution::new(&pattern, replacement)?),
        _ => None,
    };

    let dir = args.dir.unwrap_or_else(|| PathBuf::from("."));
    let files = scanner::find_wrapper_files(&dir, args.verbose)?;

    if files.is_empty() && args.verbose {
        eprintln!(
            "{} no wrapper files found in {}",
            "warning:".bold().yellow(),
            dir.display()
        );
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for file in &files {
        if args.verbose {
            eprintln!("scanning {}", file.display());
        }

        let directives = extract::extract_file(file, rule.as_ref())?;
        directives
            .write_to(&mut out)
            .context("Failed to write directives to stdout")?;
    }

    Ok(ExitStatus::Success)
}
