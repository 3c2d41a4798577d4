//! Document enumeration and the sequential conversion loop.
//!
//! The loop is deliberately boring: enumerate, sort, convert one file at a
//! time, count. One document's failure is recorded and the loop moves on —
//! the batch only reports, it never aborts. Conversions run strictly
//! sequentially; every call blocks until the backend library call or child
//! process returns.

use crate::backend::Backend;
use crate::config::BatchConfig;
use crate::error::{FileError, PdfGenError};
use crate::report::{BatchOutcome, BatchStats, FileOutcome};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Enumerate the documents of a run: every `*.md` file in each existing
/// lesson subdirectory, plus each existing auxiliary page at the docs root,
/// sorted by full path. Missing directories and pages are skipped silently.
pub fn collect_documents(config: &BatchConfig) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for dir_name in &config.lesson_dirs {
        let dir = config.docs_dir.join(dir_name);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(_) => {
                debug!("skipping missing lesson directory {}", dir.display());
                continue;
            }
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "md") {
                files.push(path);
            }
        }
    }

    for page in &config.key_pages {
        let path = config.docs_dir.join(page);
        if path.is_file() {
            files.push(path);
        } else {
            debug!("skipping missing page {}", path.display());
        }
    }

    files.sort();
    files
}

/// Run the whole batch with an already-detected backend.
///
/// Returns `Ok(BatchOutcome)` even when documents failed — check
/// [`BatchOutcome::all_converted`]. Only environment-level problems
/// (the output directory cannot be created) are `Err`.
pub fn run_batch(backend: &Backend, config: &BatchConfig) -> Result<BatchOutcome, PdfGenError> {
    let start = Instant::now();
    info!("starting batch conversion via {}", backend.name());

    // ── Step 1: Enumerate documents ──────────────────────────────────────
    let documents = collect_documents(config);
    info!("found {} files to convert", documents.len());

    // ── Step 2: Prepare the output directory ─────────────────────────────
    fs::create_dir_all(&config.output_dir).map_err(|e| PdfGenError::OutputDirFailed {
        path: config.output_dir.clone(),
        source: e,
    })?;

    if let Some(ref hook) = config.progress {
        hook.on_batch_start(documents.len());
    }

    // ── Step 3: Convert sequentially ─────────────────────────────────────
    let mut files = Vec::with_capacity(documents.len());
    let mut converted = 0usize;
    let mut failed = 0usize;

    for (index, source) in documents.iter().enumerate() {
        let name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| source.display().to_string());

        if let Some(ref hook) = config.progress {
            hook.on_file_start(&name, index, documents.len());
        }

        match convert_one(backend, source, &config.output_dir) {
            Ok((output, size_bytes)) => {
                converted += 1;
                debug!("converted {} ({} bytes)", name, size_bytes);
                if let Some(ref hook) = config.progress {
                    hook.on_file_converted(&name, size_bytes);
                }
                files.push(FileOutcome {
                    source: source.clone(),
                    output: Some(output),
                    size_bytes: Some(size_bytes),
                    error: None,
                });
            }
            Err(err) => {
                failed += 1;
                warn!("conversion failed for {}: {}", source.display(), err);
                if let Some(ref hook) = config.progress {
                    hook.on_file_failed(&name, &err.to_string());
                }
                files.push(FileOutcome {
                    source: source.clone(),
                    output: None,
                    size_bytes: None,
                    error: Some(err.to_string()),
                });
            }
        }
    }

    // ── Step 4: Summarise ────────────────────────────────────────────────
    let stats = BatchStats {
        found: documents.len(),
        converted,
        failed,
        duration_ms: start.elapsed().as_millis() as u64,
    };

    if let Some(ref hook) = config.progress {
        hook.on_batch_complete(converted, failed);
    }

    info!(
        "batch complete: {}/{} converted, {} failed, {}ms",
        converted,
        documents.len(),
        failed,
        stats.duration_ms
    );

    Ok(BatchOutcome {
        backend: backend.name().to_string(),
        output_dir: config.output_dir.clone(),
        files,
        stats,
    })
}

/// Convert one document and verify the backend actually delivered: the PDF
/// must exist and be non-empty before the file is counted as converted.
fn convert_one(
    backend: &Backend,
    source: &Path,
    output_dir: &Path,
) -> Result<(PathBuf, u64), FileError> {
    let output = backend.convert_file(source, output_dir)?;

    let size_bytes = fs::metadata(&output).map(|m| m.len()).unwrap_or(0);
    if size_bytes == 0 {
        return Err(FileError::MissingOutput { path: output });
    }

    Ok((output, size_bytes))
}
