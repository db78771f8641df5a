//! Document acquisition: ordered filesystem candidate probing.

use std::env;
use std::fs;
use std::path::PathBuf;

use log::info;
use thiserror::Error;

/// Environment variable overriding the document location.
pub const DOCUMENT_PATH_ENV: &str = "DAEMON_MD_PATH";

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("no readable daemon document among {candidates} candidate path(s)")]
    NotFound { candidates: usize },
}

/// Supplies raw document text to the parser.
pub trait DocumentSource: Send + Sync {
    fn load(&self) -> Result<String, SourceError>;
}

/// Probes an ordered list of filesystem locations and returns the content of
/// the first readable one. Unreadable candidates are skipped, not retried.
pub struct FileProbeSource {
    candidates: Vec<PathBuf>,
}

impl FileProbeSource {
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    /// Conventional candidate order: the `DAEMON_MD_PATH` override, the
    /// bundled-deployment location, then the working directory.
    pub fn from_env() -> Self {
        let mut candidates = Vec::new();
        if let Ok(path) = env::var(DOCUMENT_PATH_ENV) {
            candidates.push(PathBuf::from(path));
        }
        candidates.push(PathBuf::from("/var/task/daemon.md"));
        if let Ok(cwd) = env::current_dir() {
            candidates.push(cwd.join("daemon.md"));
        }
        candidates.push(PathBuf::from("./daemon.md"));
        Self::new(candidates)
    }
}

impl DocumentSource for FileProbeSource {
    fn load(&self) -> Result<String, SourceError> {
        for path in &self.candidates {
            if let Ok(content) = fs::read_to_string(path) {
                info!("loaded daemon document from {}", path.display());
                return Ok(content);
            }
        }

        Err(SourceError::NotFound {
            candidates: self.candidates.len(),
        })
    }
}
