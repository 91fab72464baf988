pub mod classify;
pub mod clock;
pub mod config;
pub mod errors;
pub mod extract;
pub mod process;
pub mod samples;
pub mod schema;
pub mod source;

pub use classify::{classify, Classification, InputFormat, Intent};
pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::{ApplicationError, InputError, InterfaceError, ParseError};
pub use extract::{extract_email, parse_json, EmailRecord};
pub use process::{process_input, process_input_now, Processed, ProcessingResult};
pub use samples::Sample;
pub use schema::{FieldSchema, SchemaReport};
pub use source::{DocumentHint, InputSource, LoadedInput};
