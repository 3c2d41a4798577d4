//! # workshop-pdfgen
//!
//! Batch-convert the workshop's Markdown lesson files into styled PDF
//! documents, using whichever conversion backend the host machine has.
//!
//! ## Why this crate?
//!
//! The training material is written in Markdown and served as a website, but
//! participants keep asking for printable handouts. No single PDF toolchain
//! can be assumed on trainer laptops (Linux, macOS, Windows, often without
//! admin rights), so instead of demanding one specific tool this crate probes
//! for several and uses the first that works.
//!
//! ## Pipeline Overview
//!
//! ```text
//! docs/
//!  │
//!  ├─ 1. Probe      pick a backend once: styling engine / markdown-pdf /
//!  │                pandoc, or a headless Chrome install
//!  ├─ 2. Enumerate  day1…day5 lesson files + setup/prerequisites/resources/faq
//!  ├─ 3. Convert    one file at a time through the chosen adapter
//!  └─ 4. Report     per-file ✓/✗ plus a converted/failed summary
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use workshop_pdfgen::{detect_backend, run_batch, BatchConfig};
//!
//! fn main() -> Result<(), workshop_pdfgen::PdfGenError> {
//!     let backend = detect_backend(None)?;
//!     let config = BatchConfig::default();
//!     let outcome = run_batch(&backend, &config)?;
//!     println!(
//!         "{}/{} converted into {}",
//!         outcome.stats.converted,
//!         outcome.stats.found,
//!         outcome.output_dir.display()
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature  | Default | Description |
//! |----------|---------|-------------|
//! | `cli`    | on      | Enables the `gen-pdfs` and `gen-pdfs-chrome` binaries (clap + anyhow + indicatif + tracing-subscriber) |
//! | `styled` | on      | Compiles in the `markdown2pdf` styling engine as the highest-priority backend |
//!
//! Disable both when using only the library against external tools:
//! ```toml
//! workshop-pdfgen = { version = "0.3", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod backend;
pub mod batch;
pub mod config;
pub mod error;
pub mod progress;
pub mod report;
pub mod template;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use backend::{detect_backend, find_browser, Backend, BackendKind};
pub use batch::{collect_documents, run_batch};
pub use config::{BatchConfig, BatchConfigBuilder};
pub use error::{FileError, PdfGenError};
pub use progress::{BatchProgress, NoopProgress, ProgressHook};
pub use report::{BatchOutcome, BatchStats, FileOutcome};
