//! Error types for the workshop-pdfgen library.
//!
//! Two distinct error types reflect two distinct failure modes:
//!
//! * [`PdfGenError`] — **Fatal**: the run cannot proceed at all (no usable
//!   backend on this machine, output directory cannot be created, invalid
//!   configuration). Returned as `Err(PdfGenError)` from [`crate::backend`]
//!   probing and [`crate::batch::run_batch`], and reported once before any
//!   conversion is attempted.
//!
//! * [`FileError`] — **Non-fatal**: a single document failed (unreadable
//!   source, backend exited non-zero, output never appeared). Caught by the
//!   batch loop, counted, and stored as text inside
//!   [`crate::report::FileOutcome`] so the remaining documents are still
//!   attempted.
//!
//! The separation mirrors the two error tiers of the tool: environment
//! problems end the run with installation guidance, document problems only
//! mark that document as failed.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the workshop-pdfgen library.
///
/// Per-document failures use [`FileError`] and are stored in
/// [`crate::report::FileOutcome`] rather than propagated here.
#[derive(Debug, Error)]
pub enum PdfGenError {
    /// None of the probed conversion backends is usable on this machine.
    #[error(
        "No PDF generation tool found!\n\n\
Install one of the following:\n\
  1. The built-in styling engine (recommended):\n\
     reinstall with the default `styled` feature enabled\n\
  2. markdown-pdf (Node.js):\n\
     npm install -g markdown-pdf\n\
  3. Pandoc + wkhtmltopdf:\n\
     https://pandoc.org/installing.html\n\
     https://wkhtmltopdf.org/downloads.html"
    )]
    NoBackendFound,

    /// A specific backend was requested but is not available.
    #[error("Backend '{name}' is not available on this machine.\n{hint}")]
    BackendUnavailable { name: String, hint: String },

    /// No Chrome/Chromium executable was found at any well-known path.
    #[error(
        "Google Chrome not found!\n\n\
Install Google Chrome from:\n\
  https://www.google.com/chrome/\n\n\
Or point --browser (env: PDFGEN_BROWSER) at an existing\n\
Chrome or Chromium executable."
    )]
    BrowserNotFound,

    /// An explicitly supplied browser path does not exist.
    #[error("Browser executable not found at '{path}'")]
    BrowserPathMissing { path: PathBuf },

    /// Could not create the output directory.
    #[error("Failed to create output directory '{path}': {source}")]
    OutputDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// A non-fatal error for a single document.
///
/// The batch loop records it in [`crate::report::FileOutcome`] and moves on;
/// one failing document never aborts the run.
#[derive(Debug, Error)]
pub enum FileError {
    /// The Markdown source could not be read.
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An intermediate file could not be written.
    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backend process could not be launched at all.
    #[error("failed to launch '{tool}': {source}\nIs it still installed and on PATH?")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// The backend process ran but exited non-zero.
    #[error("{tool} failed: {stderr}")]
    Backend { tool: String, stderr: String },

    /// The in-process styling engine rejected the document.
    #[error("styling engine failed: {detail}")]
    Render { detail: String },

    /// The backend reported success but the PDF is missing or empty.
    #[error("backend reported success but '{path}' is missing or empty")]
    MissingOutput { path: PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_backend_guidance_lists_install_options() {
        let msg = PdfGenError::NoBackendFound.to_string();
        assert!(msg.contains("npm install -g markdown-pdf"), "got: {msg}");
        assert!(msg.contains("pandoc.org"), "got: {msg}");
        assert!(msg.contains("wkhtmltopdf.org"), "got: {msg}");
    }

    #[test]
    fn browser_guidance_mentions_override() {
        let msg = PdfGenError::BrowserNotFound.to_string();
        assert!(msg.contains("google.com/chrome"), "got: {msg}");
        assert!(msg.contains("PDFGEN_BROWSER"), "got: {msg}");
    }

    #[test]
    fn backend_unavailable_display() {
        let e = PdfGenError::BackendUnavailable {
            name: "pandoc".into(),
            hint: "https://pandoc.org/installing.html".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("'pandoc'"));
        assert!(msg.contains("pandoc.org"));
    }

    #[test]
    fn file_error_surfaces_backend_stderr() {
        let e = FileError::Backend {
            tool: "markdown-pdf".into(),
            stderr: "SyntaxError: unexpected token".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("markdown-pdf"));
        assert!(msg.contains("unexpected token"));
    }

    #[test]
    fn missing_output_names_the_path() {
        let e = FileError::MissingOutput {
            path: PathBuf::from("pdfs/setup.pdf"),
        };
        assert!(e.to_string().contains("setup.pdf"));
    }
}
