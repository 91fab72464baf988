//! Classify-then-extract pipeline for a single input.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use serde_json::Value;
use tracing::debug;

use crate::classify::{classify, Classification, InputFormat};
use crate::clock::{Clock, SystemClock};
use crate::errors::ParseError;
use crate::extract::{extract_email, parse_json, EmailRecord};

/// Format-dependent record produced by extraction.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Processed {
    Json(Value),
    Email(EmailRecord),
}

impl Processed {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Email(_) => None,
        }
    }

    pub fn as_email(&self) -> Option<&EmailRecord> {
        match self {
            Self::Email(record) => Some(record),
            Self::Json(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProcessingResult {
    pub classification: Classification,
    pub processed: Processed,
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: DateTime<Utc>,
}

impl ProcessingResult {
    /// Timestamp rendered the way it appears in serialized output.
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Classifies `input`, extracts the format-specific record and stamps it
/// with `clock`.
///
/// Fails only when the input is classified as JSON and does not parse; there
/// is no fallback to the email path.
pub fn process_input(input: &str, clock: &dyn Clock) -> Result<ProcessingResult, ParseError> {
    let classification = classify(input);
    debug!(
        event_name = "core.process.classified",
        format = classification.format.as_str(),
        intent = classification.intent.as_str(),
        input_bytes = input.len(),
        "input classified"
    );

    let processed = match classification.format {
        InputFormat::Json => match parse_json(input) {
            Ok(value) => Processed::Json(value),
            Err(error) => {
                debug!(
                    event_name = "core.process.parse_failed",
                    line = error.line,
                    column = error.column,
                    "json input rejected"
                );
                return Err(error);
            }
        },
        InputFormat::Email => Processed::Email(extract_email(input)),
    };

    Ok(ProcessingResult { classification, processed, timestamp: clock.now() })
}

/// [`process_input`] against the system clock.
pub fn process_input_now(input: &str) -> Result<ProcessingResult, ParseError> {
    process_input(input, &SystemClock)
}

fn serialize_timestamp<S: Serializer>(
    timestamp: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use super::{process_input, process_input_now, Processed};
    use crate::classify::{InputFormat, Intent};
    use crate::clock::FixedClock;

    fn clock() -> FixedClock {
        FixedClock::new(Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 0).single().expect("instant"))
    }

    #[test]
    fn json_input_is_parsed() {
        let result = process_input("{\"a\":1}", &clock()).expect("valid json");
        assert_eq!(result.classification.format, InputFormat::Json);
        assert_eq!(result.classification.intent, Intent::Inquiry);
        assert_eq!(result.processed, Processed::Json(json!({ "a": 1 })));
    }

    #[test]
    fn email_input_is_extracted() {
        let result = process_input("From: a@b.com\nhi", &clock()).expect("email never fails");
        let record = result.processed.as_email().expect("email record");
        assert_eq!(record.from.as_deref(), Some("a@b.com"));
        assert!(result.processed.as_json().is_none());
    }

    #[test]
    fn invalid_json_does_not_fall_back_to_email() {
        let error = process_input("{bad", &clock()).expect_err("parse failure");
        assert_eq!(error.line, 1);
    }

    #[test]
    fn timestamp_comes_from_the_clock() {
        let result = process_input("hello", &clock()).expect("email");
        assert_eq!(result.timestamp_iso(), "2024-06-01T12:30:00.000Z");
    }

    #[test]
    fn serialized_shape_matches_display_contract() {
        let result = process_input("Subject: Quote please\nThanks", &clock()).expect("email");
        let value = serde_json::to_value(&result).expect("serialize");
        assert_eq!(
            value,
            json!({
                "classification": { "format": "email", "intent": "rfq" },
                "processed": { "subject": "Quote please", "body": "Thanks" },
                "timestamp": "2024-06-01T12:30:00.000Z"
            })
        );
    }

    #[test]
    fn system_clock_variant_stamps_current_time() {
        let before = Utc::now();
        let result = process_input_now("hello").expect("email");
        assert!(result.timestamp >= before);
    }
}
