//! Loading raw input text from the places a caller can select it.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::errors::InputError;
use crate::samples;

const PDF_MAGIC: &[u8] = b"%PDF-";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSource {
    Text(String),
    File(PathBuf),
    Sample(String),
    Stdin,
}

/// What the file name or leading bytes suggest. Advisory only: the text
/// classifier has the final say on format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentHint {
    Json,
    Email,
    Pdf,
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedInput {
    pub origin: String,
    pub hint: DocumentHint,
    pub text: String,
}

impl InputSource {
    pub fn describe(&self) -> String {
        match self {
            Self::Text(_) => "text".to_string(),
            Self::File(path) => format!("file:{}", path.display()),
            Self::Sample(name) => format!("sample:{name}"),
            Self::Stdin => "stdin".to_string(),
        }
    }

    /// Reads the source, rejecting PDFs, non-UTF-8 data, blank text and
    /// anything over `max_input_bytes`. `stdin` is only touched for
    /// [`InputSource::Stdin`].
    pub fn load(
        &self,
        stdin: &mut dyn Read,
        max_input_bytes: usize,
    ) -> Result<LoadedInput, InputError> {
        let origin = self.describe();
        let (hint, bytes, full_size) = match self {
            Self::Text(text) => (DocumentHint::Unknown, text.clone().into_bytes(), None),
            Self::Sample(name) => {
                (DocumentHint::Unknown, samples::find(name)?.content.as_bytes().to_vec(), None)
            }
            Self::File(path) => {
                let read_error = |error: io::Error| InputError::ReadFile {
                    path: path.clone(),
                    reason: error.to_string(),
                };
                let file = File::open(path).map_err(read_error)?;
                let full_size = file
                    .metadata()
                    .ok()
                    .and_then(|metadata| usize::try_from(metadata.len()).ok());
                let bytes = read_capped(file, max_input_bytes).map_err(read_error)?;
                (detect_document_hint(Some(path.as_path()), &bytes), bytes, full_size)
            }
            Self::Stdin => {
                let bytes = read_capped(stdin, max_input_bytes).map_err(|error| {
                    InputError::ReadFile { path: PathBuf::from("-"), reason: error.to_string() }
                })?;
                (detect_document_hint(None, &bytes), bytes, None)
            }
        };

        if hint == DocumentHint::Pdf {
            return Err(InputError::UnsupportedDocument { name: display_name(self) });
        }
        if bytes.len() > max_input_bytes {
            let size = full_size.map_or(bytes.len(), |size| size.max(bytes.len()));
            return Err(InputError::TooLarge { size, limit: max_input_bytes });
        }

        let text = String::from_utf8(bytes).map_err(|_| InputError::NotUtf8)?;
        if text.trim().is_empty() {
            return Err(InputError::Empty);
        }

        Ok(LoadedInput { origin, hint, text })
    }
}

/// Extension first, then content sniffing on the leading bytes.
pub fn detect_document_hint(path: Option<&Path>, bytes: &[u8]) -> DocumentHint {
    let extension = path
        .and_then(Path::extension)
        .and_then(|extension| extension.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("json") => return DocumentHint::Json,
        Some("eml" | "msg") => return DocumentHint::Email,
        Some("pdf") => return DocumentHint::Pdf,
        _ => {}
    }

    if bytes.starts_with(PDF_MAGIC) {
        return DocumentHint::Pdf;
    }

    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(1024)]);
    let trimmed = head.trim_start();
    let looks_like_email =
        trimmed.starts_with("From:") || trimmed.starts_with("To:") || head.contains("Subject:");
    if trimmed.starts_with('{') {
        DocumentHint::Json
    } else if looks_like_email {
        DocumentHint::Email
    } else {
        DocumentHint::Unknown
    }
}

/// Reads at most one byte past `max_input_bytes` so oversize input is detectable
/// without buffering all of it.
fn read_capped(reader: impl Read, max_input_bytes: usize) -> io::Result<Vec<u8>> {
    let limit = u64::try_from(max_input_bytes).unwrap_or(u64::MAX).saturating_add(1);
    let mut bytes = Vec::new();
    reader.take(limit).read_to_end(&mut bytes)?;
    Ok(bytes)
}

fn display_name(source: &InputSource) -> String {
    match source {
        InputSource::File(path) => path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string()),
        other => other.describe(),
    }
}
