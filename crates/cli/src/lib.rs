pub mod commands;
pub mod logging;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use intake_core::config::{AppConfig, ConfigOverrides, LoadOptions};
use intake_core::{ApplicationError, SystemClock};
use uuid::Uuid;

use crate::commands::process::ProcessRequest;
use crate::commands::{CommandContext, CommandResult, InputArgs};

#[derive(Debug, Parser)]
#[command(
    name = "intake",
    about = "Classify and extract JSON or email-style input",
    long_about = "Classify free-form input as json or email, tag it as rfq or inquiry, and print the extracted record.",
    after_help = "Examples:\n  intake process --sample rfq-email\n  intake process --file order.json --schema rfq.toml\n  cat message.eml | intake classify\n  intake config"
)]
pub struct Cli {
    #[arg(long, global = true, value_name = "PATH", help = "Config file (defaults to intake.toml or config/intake.toml)")]
    config: Option<PathBuf>,
    #[arg(long, global = true, value_name = "LEVEL", help = "Override logging.level")]
    log_level: Option<String>,
    #[arg(long, global = true, help = "Emit single-line JSON instead of pretty output")]
    compact: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Classify input and print the extracted record as JSON")]
    Process {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long, value_name = "PATH", help = "TOML field schema checked against JSON input")]
        schema: Option<PathBuf>,
    },
    #[command(about = "Print only the format and intent of the input")]
    Classify {
        #[command(flatten)]
        input: InputArgs,
    },
    #[command(about = "List the built-in sample inputs")]
    Samples,
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let result = execute(cli);
    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}

fn execute(cli: Cli) -> CommandResult {
    let correlation_id = Uuid::new_v4().to_string();
    let overrides = ConfigOverrides {
        log_level: cli.log_level.clone(),
        pretty: cli.compact.then_some(false),
        ..ConfigOverrides::default()
    };
    let config = match AppConfig::load(LoadOptions {
        config_path: cli.config.clone(),
        require_file: cli.config.is_some(),
        overrides,
    }) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::from_error(
                command_name(&cli.command),
                ApplicationError::from(error),
                &correlation_id,
            );
        }
    };
    logging::init_logging(&config.logging);

    let context = CommandContext { config: &config, clock: &SystemClock, correlation_id };
    tracing::debug!(
        event_name = "cli.command.started",
        command = command_name(&cli.command),
        correlation_id = %context.correlation_id,
        "command started"
    );

    let mut stdin = io::stdin().lock();
    match cli.command {
        Command::Process { input, schema } => {
            commands::process::run(&ProcessRequest { input, schema }, &context, &mut stdin)
        }
        Command::Classify { input } => commands::classify::run(&input, &context, &mut stdin),
        Command::Samples => commands::samples::run(config.output.pretty),
        Command::Config => CommandResult {
            exit_code: 0,
            output: commands::config::run(&config, cli.config.as_deref()),
        },
    }
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Process { .. } => "process",
        Command::Classify { .. } => "classify",
        Command::Samples => "samples",
        Command::Config => "config",
    }
}
