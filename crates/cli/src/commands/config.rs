use std::env;
use std::fs;
use std::path::Path;

use intake_core::config::{resolve_config_path, AppConfig};
use toml::Value;

/// Effective configuration, one line per key, with where each value came from.
pub fn run(config: &AppConfig, explicit_path: Option<&Path>) -> String {
    let config_file_path = resolve_config_path(explicit_path);
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());
    let source = |key_path: &str, env_keys: &[&str]| {
        field_source(key_path, env_keys, config_file_doc.as_ref(), config_file_path.as_deref())
    };

    let lines = [
        "effective config (source precedence: env > file > default; command-line flags win over all):".to_string(),
        render_line(
            "intake.max_input_bytes",
            &config.intake.max_input_bytes.to_string(),
            source("intake.max_input_bytes", &["INTAKE_MAX_INPUT_BYTES"]),
        ),
        render_line(
            "output.pretty",
            &config.output.pretty.to_string(),
            source("output.pretty", &["INTAKE_OUTPUT_PRETTY"]),
        ),
        render_line(
            "logging.level",
            &config.logging.level,
            source("logging.level", &["INTAKE_LOGGING_LEVEL", "INTAKE_LOG_LEVEL"]),
        ),
        render_line(
            "logging.format",
            &format!("{:?}", config.logging.format),
            source("logging.format", &["INTAKE_LOGGING_FORMAT", "INTAKE_LOG_FORMAT"]),
        ),
    ];

    lines.join("\n")
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    key_path: &str,
    env_keys: &[&str],
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    // The loader skips blank env values.
    let in_effect = |key: &&&str| env::var(key).is_ok_and(|value| !value.trim().is_empty());
    if let Some(env_key) = env_keys.iter().find(in_effect) {
        return format!("env ({env_key})");
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, key_path) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn render_line(key: &str, value: &str, source: String) -> String {
    format!("- {key} = {value} (source: {source})")
}
