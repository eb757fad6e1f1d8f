use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): All wrapper files were scanned and the directives printed
/// - `Error` (1): The run failed due to an internal error (unreadable file, bad pattern)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// All wrapper files were scanned and the directives printed.
    Success,
    /// The run failed due to an internal error (unreadable file, bad pattern).
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(1),
        }
    }
}
