//! Result types returned by the batch loop.
//!
//! Everything here is plain serialisable data: the CLI prints it, `--json`
//! dumps it verbatim, and library callers can inspect per-file outcomes
//! without re-parsing any console output.

use serde::Serialize;
use std::path::PathBuf;

/// Outcome of one document's conversion attempt.
#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    /// Path of the Markdown source.
    pub source: PathBuf,
    /// Path of the produced PDF, when conversion succeeded.
    pub output: Option<PathBuf>,
    /// Size of the produced PDF in bytes, when conversion succeeded.
    pub size_bytes: Option<u64>,
    /// Human-readable failure description, when conversion failed.
    pub error: Option<String>,
}

impl FileOutcome {
    /// True when the document produced a PDF.
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Aggregate counters for a batch run.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BatchStats {
    /// Documents discovered by enumeration.
    pub found: usize,
    /// Documents that produced a PDF.
    pub converted: usize,
    /// Documents that failed.
    pub failed: usize,
    /// Wall-clock duration of the whole batch.
    pub duration_ms: u64,
}

/// Full result of a batch run: per-file outcomes plus the summary counters.
#[derive(Debug, Clone, Serialize)]
pub struct BatchOutcome {
    /// Name of the backend that performed the conversions.
    pub backend: String,
    /// Directory the PDFs were written to.
    pub output_dir: PathBuf,
    /// One entry per enumerated document, in processing order.
    pub files: Vec<FileOutcome>,
    /// Aggregate counters.
    pub stats: BatchStats,
}

impl BatchOutcome {
    /// True when no document failed. An empty batch counts as success.
    pub fn all_converted(&self) -> bool {
        self.stats.failed == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BatchOutcome {
        BatchOutcome {
            backend: "pandoc".into(),
            output_dir: PathBuf::from("pdfs"),
            files: vec![
                FileOutcome {
                    source: PathBuf::from("docs/setup.md"),
                    output: Some(PathBuf::from("pdfs/setup.pdf")),
                    size_bytes: Some(2048),
                    error: None,
                },
                FileOutcome {
                    source: PathBuf::from("docs/faq.md"),
                    output: None,
                    size_bytes: None,
                    error: Some("pandoc failed: missing wkhtmltopdf".into()),
                },
            ],
            stats: BatchStats {
                found: 2,
                converted: 1,
                failed: 1,
                duration_ms: 1234,
            },
        }
    }

    #[test]
    fn all_converted_tracks_failures() {
        let mut outcome = sample();
        assert!(!outcome.all_converted());
        outcome.stats.failed = 0;
        assert!(outcome.all_converted());
    }

    #[test]
    fn empty_batch_is_success() {
        let outcome = BatchOutcome {
            backend: "styled".into(),
            output_dir: PathBuf::from("pdfs"),
            files: vec![],
            stats: BatchStats {
                found: 0,
                converted: 0,
                failed: 0,
                duration_ms: 3,
            },
        };
        assert!(outcome.all_converted());
    }

    #[test]
    fn serialises_per_file_detail() {
        let json = serde_json::to_string_pretty(&sample()).unwrap();
        assert!(json.contains("\"converted\": 1"));
        assert!(json.contains("setup.pdf"));
        assert!(json.contains("missing wkhtmltopdf"));
    }

    #[test]
    fn succeeded_reflects_error_presence() {
        let outcome = sample();
        assert!(outcome.files[0].succeeded());
        assert!(!outcome.files[1].succeeded());
    }
}
