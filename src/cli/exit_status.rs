use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): scan completed, or the warning cap cut it short.
///   Findings alone never fail the run; the tool is advisory by design so a
///   build phase using it keeps building.
/// - `Error` (2): the run aborted on an internal error (unreadable file,
///   decode failure).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
