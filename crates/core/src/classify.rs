//! Format and intent classification.
//!
//! Both checks are cheap syntactic scans over the raw text. The format is
//! decided from the first non-whitespace character, the intent from a single
//! keyword anywhere in the input.

use serde::{Deserialize, Serialize};

/// Keyword that marks a request for quotation.
pub const RFQ_KEYWORD: &str = "quote";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputFormat {
    Json,
    Email,
}

impl InputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Email => "email",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Request for quotation.
    Rfq,
    Inquiry,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rfq => "rfq",
            Self::Inquiry => "inquiry",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub format: InputFormat,
    pub intent: Intent,
}

pub fn classify(input: &str) -> Classification {
    Classification { format: detect_format(input), intent: detect_intent(input) }
}

pub fn detect_format(input: &str) -> InputFormat {
    if input.trim_start().starts_with('{') {
        InputFormat::Json
    } else {
        InputFormat::Email
    }
}

/// Runs regardless of format, so a JSON document mentioning a quote is an RFQ.
pub fn detect_intent(input: &str) -> Intent {
    if input.to_lowercase().contains(RFQ_KEYWORD) {
        Intent::Rfq
    } else {
        Intent::Inquiry
    }
}
