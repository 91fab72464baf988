use intake_core::samples;
use serde::Serialize;

use crate::commands::CommandResult;

#[derive(Debug, Serialize)]
struct SampleEntry {
    name: &'static str,
    description: &'static str,
    format: &'static str,
    intent: &'static str,
}

pub fn run(pretty: bool) -> CommandResult {
    let entries: Vec<SampleEntry> = samples::all()
        .iter()
        .map(|sample| {
            let classification = intake_core::classify(sample.content);
            SampleEntry {
                name: sample.name,
                description: sample.description,
                format: classification.format.as_str(),
                intent: classification.intent.as_str(),
            }
        })
        .collect();

    CommandResult::json("samples", &entries, pretty)
}
