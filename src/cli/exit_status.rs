use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Catalog written, every source file parsed
/// - `Failure` (1): Catalog written but some source files failed to parse
/// - `Error` (2): Command failed (unresolvable plugin, config error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command completed but skipped unparsable files.
    Failure,
    /// Command failed and wrote nothing.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
