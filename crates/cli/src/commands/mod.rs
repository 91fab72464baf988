pub mod classify;
pub mod config;
pub mod process;
pub mod samples;

use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use intake_core::config::AppConfig;
use intake_core::{ApplicationError, Clock, InputSource, LoadedInput};
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

/// Everything a command needs besides its own arguments.
pub struct CommandContext<'a> {
    pub config: &'a AppConfig,
    pub clock: &'a dyn Clock,
    pub correlation_id: String,
}

#[derive(Debug, Clone, Default, Args)]
#[group(multiple = false)]
pub struct InputArgs {
    #[arg(long, help = "Inline input text")]
    pub text: Option<String>,
    #[arg(long, value_name = "PATH", help = "Read input from a file (.json, .eml, .txt; .pdf is rejected)")]
    pub file: Option<PathBuf>,
    #[arg(long, value_name = "NAME", help = "Use a built-in sample (see `intake samples`)")]
    pub sample: Option<String>,
}

impl InputArgs {
    /// Falls back to stdin when no source flag is given.
    pub fn source(&self) -> InputSource {
        if let Some(text) = &self.text {
            InputSource::Text(text.clone())
        } else if let Some(path) = &self.file {
            InputSource::File(path.clone())
        } else if let Some(name) = &self.sample {
            InputSource::Sample(name.clone())
        } else {
            InputSource::Stdin
        }
    }

    pub fn load(
        &self,
        context: &CommandContext<'_>,
        stdin: &mut dyn Read,
    ) -> Result<LoadedInput, ApplicationError> {
        let loaded = self.source().load(stdin, context.config.intake.max_input_bytes)?;
        tracing::debug!(
            event_name = "cli.input.loaded",
            correlation_id = %context.correlation_id,
            origin = %loaded.origin,
            hint = ?loaded.hint,
            bytes = loaded.text.len(),
            "input loaded"
        );
        Ok(loaded)
    }
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: Option<String>,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    correlation_id: Option<String>,
}

impl CommandResult {
    pub fn json<T: Serialize>(command: &str, payload: &T, pretty: bool) -> Self {
        let rendered = if pretty {
            serde_json::to_string_pretty(payload)
        } else {
            serde_json::to_string(payload)
        };
        match rendered {
            Ok(output) => Self { exit_code: 0, output },
            Err(error) => Self::failure(command, "serialization", error.to_string(), 3),
        }
    }

    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            message: message.into(),
            detail: None,
            correlation_id: None,
        };
        Self { exit_code, output: serialize_payload(payload) }
    }

    /// Renders the generic user-facing message, keeping the underlying error
    /// as `detail` for operators.
    pub fn from_error(command: &str, error: ApplicationError, correlation_id: &str) -> Self {
        let error_class = error.error_class();
        let exit_code = match error {
            ApplicationError::Configuration(_) => 2,
            _ => 1,
        };
        let detail = error.to_string();
        let interface = error.into_interface(correlation_id);

        tracing::warn!(
            event_name = "cli.command.failed",
            command,
            error_class,
            correlation_id,
            detail = %detail,
            "command failed"
        );

        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            message: interface.user_message().to_string(),
            detail: Some(detail),
            correlation_id: Some(interface.correlation_id().to_string()),
        };
        Self { exit_code, output: serialize_payload(payload) }
    }
}

fn serialize_payload(payload: CommandOutcome) -> String {
    serde_json::to_string(&payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}
