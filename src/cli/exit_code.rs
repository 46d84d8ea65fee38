use super::{
    commands::{CommandKind, CommandResult, CommandSummary},
    exit_status::ExitStatus,
};

pub fn exit_status_from_result(result: &CommandResult) -> ExitStatus {
    if let CommandSummary::Init(summary) = &result.summary
        && summary.error.is_some()
    {
        return ExitStatus::Failure;
    }

    let is_extraction = matches!(result.kind(), CommandKind::Html | CommandKind::Js);
    if is_extraction && result.fail_on_empty && result.result_count() == 0 {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    }
}
