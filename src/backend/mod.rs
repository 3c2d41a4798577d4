//! Conversion backends.
//!
//! Each submodule implements exactly one adapter with the same contract:
//! given a Markdown source and an output directory, produce
//! `<output_dir>/<stem>.pdf` or fail with a [`FileError`]. Keeping the
//! adapters separate makes each independently testable and lets the probe
//! pick whichever facility the host machine actually has.
//!
//! ## Probe order
//!
//! ```text
//! gen-pdfs:         styled ──▶ markdown-pdf ──▶ pandoc ──▶ (give up)
//!                   (in-process)  (npm tool)     (converter)
//! gen-pdfs-chrome:  --browser override ──▶ well-known install paths
//! ```
//!
//! A backend is chosen once per process and never revisited; a missing tool
//! is a terminal condition for the run, not a per-file failure.

pub mod chrome;
pub mod markdown_pdf;
pub mod pandoc;
pub mod probe;
#[cfg(feature = "styled")]
pub mod styled;

pub use probe::{detect_backend, find_browser};

use crate::error::FileError;
use std::fmt;
use std::path::{Path, PathBuf};

/// Identifier for a conversion facility, independent of whether it is
/// actually installed. Used to force a backend instead of probing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// The in-process `markdown2pdf` styling engine.
    Styled,
    /// The Node-based `markdown-pdf` command.
    MarkdownPdf,
    /// The `pandoc` universal converter (with wkhtmltopdf as PDF engine).
    Pandoc,
    /// A headless Chrome/Chromium executable.
    Chrome,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Styled => "styled",
            BackendKind::MarkdownPdf => "markdown-pdf",
            BackendKind::Pandoc => "pandoc",
            BackendKind::Chrome => "chrome",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A usable conversion backend, as established by the prober.
#[derive(Debug, Clone)]
pub enum Backend {
    /// Convert with the compiled-in styling engine.
    #[cfg(feature = "styled")]
    Styled,
    /// Convert by invoking the `markdown-pdf` command.
    MarkdownPdf,
    /// Convert by invoking `pandoc`.
    Pandoc,
    /// Convert by driving the headless browser at this path.
    Chrome(PathBuf),
}

impl Backend {
    pub fn kind(&self) -> BackendKind {
        match self {
            #[cfg(feature = "styled")]
            Backend::Styled => BackendKind::Styled,
            Backend::MarkdownPdf => BackendKind::MarkdownPdf,
            Backend::Pandoc => BackendKind::Pandoc,
            Backend::Chrome(_) => BackendKind::Chrome,
        }
    }

    /// Human-readable name for log lines and the summary.
    pub fn name(&self) -> &'static str {
        match self {
            #[cfg(feature = "styled")]
            Backend::Styled => "styling engine (markdown2pdf)",
            Backend::MarkdownPdf => "markdown-pdf",
            Backend::Pandoc => "pandoc",
            Backend::Chrome(_) => "Chrome headless",
        }
    }

    /// Convert one document, producing `<output_dir>/<stem>.pdf`.
    pub fn convert_file(&self, source: &Path, output_dir: &Path) -> Result<PathBuf, FileError> {
        match self {
            #[cfg(feature = "styled")]
            Backend::Styled => styled::convert(source, output_dir),
            Backend::MarkdownPdf => markdown_pdf::convert(source, output_dir),
            Backend::Pandoc => pandoc::convert(source, output_dir),
            Backend::Chrome(browser) => chrome::convert(browser, source, output_dir),
        }
    }
}

/// Output path for a source document: the source's stem with a `.pdf`
/// extension, inside the output directory.
pub(crate) fn output_path(source: &Path, output_dir: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    output_dir.join(format!("{stem}.pdf"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_uses_the_stem() {
        let out = output_path(Path::new("docs/day1/01-intro.md"), Path::new("pdfs"));
        assert_eq!(out, PathBuf::from("pdfs/01-intro.pdf"));
    }

    #[test]
    fn kind_names_are_cli_friendly() {
        assert_eq!(BackendKind::MarkdownPdf.to_string(), "markdown-pdf");
        assert_eq!(BackendKind::Styled.as_str(), "styled");
    }

    #[test]
    fn backend_reports_its_kind() {
        assert_eq!(Backend::Pandoc.kind(), BackendKind::Pandoc);
        assert_eq!(
            Backend::Chrome(PathBuf::from("/usr/bin/chromium")).kind(),
            BackendKind::Chrome
        );
    }
}
