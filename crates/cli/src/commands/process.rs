use std::io::Read;
use std::path::PathBuf;

use intake_core::{
    process_input, ApplicationError, DocumentHint, FieldSchema, InputFormat, ProcessingResult,
    SchemaReport,
};
use serde::Serialize;

use crate::commands::{CommandContext, CommandResult, InputArgs};

const COMMAND: &str = "process";

#[derive(Debug, Clone, Default)]
pub struct ProcessRequest {
    pub input: InputArgs,
    pub schema: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct ProcessOutput<'a> {
    #[serde(flatten)]
    result: &'a ProcessingResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    validation: Option<SchemaReport>,
}

pub fn run(
    request: &ProcessRequest,
    context: &CommandContext<'_>,
    stdin: &mut dyn Read,
) -> CommandResult {
    match execute(request, context, stdin) {
        Ok((result, validation)) => CommandResult::json(
            COMMAND,
            &ProcessOutput { result: &result, validation },
            context.config.output.pretty,
        ),
        Err(error) => CommandResult::from_error(COMMAND, error, &context.correlation_id),
    }
}

fn execute(
    request: &ProcessRequest,
    context: &CommandContext<'_>,
    stdin: &mut dyn Read,
) -> Result<(ProcessingResult, Option<SchemaReport>), ApplicationError> {
    // Load the schema first so a bad schema path fails before any input is read.
    let schema = request.schema.as_deref().map(FieldSchema::load).transpose()?;
    let loaded = request.input.load(context, stdin)?;

    let result = process_input(&loaded.text, context.clock)?;
    warn_on_hint_mismatch(loaded.hint, result.classification.format, &context.correlation_id);

    let validation = match (&schema, result.processed.as_json()) {
        (Some(schema), Some(value)) => Some(schema.check(value)),
        (Some(_), None) => {
            tracing::warn!(
                event_name = "cli.process.schema_skipped",
                correlation_id = %context.correlation_id,
                "schema checks only apply to json input; skipping"
            );
            None
        }
        (None, _) => None,
    };

    tracing::info!(
        event_name = "cli.process.completed",
        correlation_id = %context.correlation_id,
        origin = %loaded.origin,
        format = result.classification.format.as_str(),
        intent = result.classification.intent.as_str(),
        schema_valid = ?validation.as_ref().map(|report| report.valid),
        "input processed"
    );

    Ok((result, validation))
}

pub(crate) fn warn_on_hint_mismatch(hint: DocumentHint, format: InputFormat, correlation_id: &str) {
    let mismatch = matches!(
        (hint, format),
        (DocumentHint::Json, InputFormat::Email) | (DocumentHint::Email, InputFormat::Json)
    );
    if mismatch {
        tracing::warn!(
            event_name = "cli.input.hint_mismatch",
            correlation_id,
            hint = ?hint,
            format = format.as_str(),
            "file type suggests a different format than the content"
        );
    }
}
