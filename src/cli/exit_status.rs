use std::process::ExitCode;

/// Process exit status of a tsglot run.
///
/// - `Success` (0): nothing to report, or the requested rewrite was applied
/// - `Failure` (1): error-level issues were found, or a dry run has pending changes
/// - `Error` (2): the run could not complete (bad config, missing primary catalog)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        let code: u8 = match status {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        };
        ExitCode::from(code)
    }
}
