//! Section-delimited daemon document parser.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::daemon::record::{DaemonRecord, ProfileField};

/// Time source for the record's derived `last_updated` field. Injected so
/// parsing stays deterministic under test.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Parses daemon documents into records.
#[derive(Clone)]
pub struct DaemonParser {
    clock: Arc<dyn Clock>,
}

impl DaemonParser {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Parser backed by the system clock.
    pub fn system() -> Self {
        Self::new(Arc::new(SystemClock))
    }

    /// Parse one document. Never fails: input with no recognizable headers
    /// yields a record with every field absent except `last_updated`.
    pub fn parse(&self, text: &str) -> DaemonRecord {
        let sections = split_sections(text);
        let mut record = DaemonRecord::empty(self.clock.now());

        for field in ProfileField::ALL {
            if let Some(body) = sections.get(field.section_key()) {
                record.populate(field, body);
            }
        }

        record
    }
}

/// Collect `[header]` sections into a key -> trimmed-body map.
///
/// A header line carries the brackets as its first and last characters,
/// untrimmed; whitespace around the brackets demotes the line to body text.
/// Text before the first header is discarded, and a re-declared header
/// overwrites the earlier body.
fn split_sections(text: &str) -> HashMap<String, String> {
    let mut sections = HashMap::new();
    let mut current_key: Option<String> = None;
    let mut body: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        if line.starts_with('[') && line.ends_with(']') {
            if let Some(key) = current_key.take() {
                sections.insert(key, body.join("\n").trim().to_string());
            }
            current_key = Some(line[1..line.len() - 1].to_lowercase());
            body.clear();
        } else if current_key.is_some() {
            body.push(line);
        }
    }

    if let Some(key) = current_key {
        sections.insert(key, body.join("\n").trim().to_string());
    }

    sections
}
