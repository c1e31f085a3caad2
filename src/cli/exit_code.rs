use super::{commands::CommandResult, exit_status::ExitStatus};

pub fn exit_status_from_result(result: &CommandResult) -> ExitStatus {
    if (result.exit_on_errors && result.error_count > 0) || result.pending_changes > 0 {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    }
}
