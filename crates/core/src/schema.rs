//! Caller-supplied top-level field schema for JSON payloads.
//!
//! Processing never validates JSON on its own. Callers that want stronger
//! guarantees hand in a [`FieldSchema`] and check the parsed value against it.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ApplicationError;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSchema {
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(default)]
    pub optional: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SchemaReport {
    pub valid: bool,
    pub missing_required: Vec<String>,
    pub optional_present: Vec<String>,
}

impl FieldSchema {
    pub fn new<R, O>(required: R, optional: O) -> Self
    where
        R: IntoIterator,
        R::Item: Into<String>,
        O: IntoIterator,
        O::Item: Into<String>,
    {
        Self {
            required: required.into_iter().map(Into::into).collect(),
            optional: optional.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ApplicationError> {
        toml::from_str(raw).map_err(|error| ApplicationError::Schema(error.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, ApplicationError> {
        let raw = fs::read_to_string(path).map_err(|error| {
            ApplicationError::Schema(format!("could not read `{}`: {error}", path.display()))
        })?;
        Self::from_toml_str(&raw)
    }

    /// Checks top-level keys only. A non-object value has none of the fields.
    pub fn check(&self, value: &Value) -> SchemaReport {
        let object = value.as_object();
        let has = |field: &str| object.is_some_and(|map| map.contains_key(field));

        let missing_required: Vec<String> =
            self.required.iter().filter(|field| !has(field.as_str())).cloned().collect();
        let optional_present =
            self.optional.iter().filter(|field| has(field.as_str())).cloned().collect();

        SchemaReport { valid: missing_required.is_empty(), missing_required, optional_present }
    }
}
