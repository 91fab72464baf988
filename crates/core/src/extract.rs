//! Format-specific field extraction.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ParseError;

const FROM_PREFIX: &str = "From:";
const TO_PREFIX: &str = "To:";
const SUBJECT_PREFIX: &str = "Subject:";

/// Header-ish fields pulled out of a raw email block.
///
/// Missing headers stay `None` and are left out of the serialized record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub body: String,
}

/// Line-prefix extraction. Never fails: absent headers resolve to `None`.
///
/// The body is every line that is not a `From:`, `To:` or `Subject:` header,
/// rejoined with `\n`, so blank lines and relative order survive.
pub fn extract_email(input: &str) -> EmailRecord {
    let lines: Vec<&str> = input.split('\n').collect();

    let from = header_value(&lines, FROM_PREFIX);
    let subject = header_value(&lines, SUBJECT_PREFIX);
    let body = lines
        .iter()
        .filter(|line| !is_header_line(line))
        .copied()
        .collect::<Vec<_>>()
        .join("\n");

    EmailRecord { from, subject, body }
}

/// Nesting depth is unbounded; deep documents grow the stack on demand.
/// Numbers outside the `f64` range are rejected.
pub fn parse_json(input: &str) -> Result<Value, ParseError> {
    let mut deserializer = serde_json::Deserializer::from_str(input);
    deserializer.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(value)
}

fn header_value(lines: &[&str], prefix: &str) -> Option<String> {
    lines
        .iter()
        .find_map(|line| line.strip_prefix(prefix))
        .map(|value| value.trim().to_string())
}

fn is_header_line(line: &str) -> bool {
    [FROM_PREFIX, TO_PREFIX, SUBJECT_PREFIX].iter().any(|prefix| line.starts_with(prefix))
}
