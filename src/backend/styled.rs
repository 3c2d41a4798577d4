//! In-process conversion via the `markdown2pdf` styling engine.
//!
//! No external process is involved: the document is wrapped in the workshop
//! title block and footer (Markdown form, since the engine typesets Markdown
//! itself) and handed straight to the library.

use crate::backend::output_path;
use crate::error::FileError;
use crate::template;
use markdown2pdf::config::ConfigSource;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Convert one document with the styling engine.
pub fn convert(source: &Path, output_dir: &Path) -> Result<PathBuf, FileError> {
    let markdown = fs::read_to_string(source).map_err(|e| FileError::Read {
        path: source.to_path_buf(),
        source: e,
    })?;

    let styled = template::styled_markdown(&markdown);
    let output = output_path(source, output_dir);

    markdown2pdf::parse_into_file(
        styled,
        &output.to_string_lossy(),
        ConfigSource::Default,
        Default::default(),
    )
    .map_err(|e| FileError::Render {
        detail: e.to_string(),
    })?;

    debug!("styling engine wrote {}", output.display());
    Ok(output)
}
