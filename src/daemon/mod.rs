//! Daemon document domain: acquisition, parsing, and the typed record.

pub mod parser;
pub mod record;
pub mod source;

pub use parser::{Clock, DaemonParser, SystemClock};
pub use record::{DaemonRecord, FieldValue, ProfileField};
pub use source::{DocumentSource, FileProbeSource, SourceError};
