//! CLI argument definitions using clap.
//!
//! The substitution rule is a paired option: `--match` and `--replace`
//! must be supplied together, enforced declaratively with `requires` in
//! both directions.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Regular expression substituted in each method name before case
    /// conversion (used in conjunction with --replace)
    #[arg(long = "match", value_name = "PATTERN", requires = "replace")]
    pub pattern: Option<String>,

    /// Replacement text for the --match pattern
    #[arg(long, value_name = "TEXT", requires = "pattern")]
    pub replace: Option<String>,

    /// Directory containing the generated wrapper files (defaults to the
    /// current working directory)
    #[arg(long, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
