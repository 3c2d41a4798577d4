//! Conversion via the Node-based `markdown-pdf` command.
//!
//! The tool takes the raw Markdown file and an `-o` output path; it applies
//! its own default styling, so no template is involved on this path.

use crate::backend::output_path;
use crate::error::FileError;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Command name probed for and invoked.
pub const TOOL: &str = "markdown-pdf";

/// Convert one document by invoking `markdown-pdf <source> -o <output>`.
pub fn convert(source: &Path, output_dir: &Path) -> Result<PathBuf, FileError> {
    let output = output_path(source, output_dir);

    let cmd = Command::new(TOOL)
        .arg(source)
        .arg("-o")
        .arg(&output)
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
