use std::io::Read;

use intake_core::{classify, ApplicationError, Classification};

use crate::commands::process::warn_on_hint_mismatch;
use crate::commands::{CommandContext, CommandResult, InputArgs};

const COMMAND: &str = "classify";

pub fn run(input: &InputArgs, context: &CommandContext<'_>, stdin: &mut dyn Read) -> CommandResult {
    match execute(input, context, stdin) {
        Ok(classification) => {
            CommandResult::json(COMMAND, &classification, context.config.output.pretty)
        }
        Err(error) => CommandResult::from_error(COMMAND, error, &context.correlation_id),
    }
}

/// Classification only: invalid JSON still classifies as `json`.
fn execute(
    input: &InputArgs,
    context: &CommandContext<'_>,
    stdin: &mut dyn Read,
) -> Result<Classification, ApplicationError> {
    let loaded = input.load(context, stdin)?;
    let classification = classify(&loaded.text);
    warn_on_hint_mismatch(loaded.hint, classification.format, &context.correlation_id);

    tracing::info!(
        event_name = "cli.classify.completed",
        correlation_id = %context.correlation_id,
        origin = %loaded.origin,
        format = classification.format.as_str(),
        intent = classification.intent.as_str(),
        "input classified"
    );
    Ok(classification)
}
