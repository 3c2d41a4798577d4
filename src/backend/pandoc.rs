//! Conversion via `pandoc` with wkhtmltopdf as the PDF engine.
//!
//! Styling goes through pandoc variables rather than the HTML template:
//! 2 cm margins and 11 pt body text to match the other backends, plus a
//! table of contents and coloured links.

use crate::backend::output_path;
use crate::error::FileError;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Command name probed for and invoked.
pub const TOOL: &str = "pandoc";

const PANDOC_ARGS: &[&str] = &[
    "--pdf-engine=wkhtmltopdf",
    "--variable",
    "geometry:margin=2cm",
    "--variable",
    "fontsize=11pt",
    "--toc",
    "--toc-depth=3",
    "-V",
    "colorlinks=true",
    "-V",
    "linkcolor=blue",
    "-V",
    "urlcolor=blue",
];

/// Convert one document by invoking `pandoc <source> -o <output> …`.
pub fn convert(source: &Path, output_dir: &Path) -> Result<PathBuf, FileError> {
    let output = output_path(source, output_dir);

    let cmd = Command::new(TOOL)
        .arg(source)
        .arg("-o")
        .arg(&output)
        .args(PANDOC_ARGS)
        .output()
        .map_err(|e| FileError::Spawn {
            tool: TOOL.into(),
            source: e,
        })?;

    if !cmd.status.success() {
        return Err(FileError::Backend {
            tool: TOOL.into(),
            stderr: String::from_utf8_lossy(&cmd.stderr).trim().to_string(),
        });
    }

    debug!("{TOOL} wrote {}", output.display());
    Ok(output)
}
