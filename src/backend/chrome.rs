//! Conversion via a headless Chrome/Chromium executable.
//!
//! Chrome prints HTML, not Markdown, so this adapter renders the document
//! through the full styled page template first, persists it as
//! `<stem>_temp.html` beside the output, and points the browser at it. The
//! intermediate file is deleted best-effort whether or not the conversion
//! succeeded — a leftover HTML file must never survive into the output
//! directory listing.

use crate::backend::output_path;
use crate::error::FileError;
use crate::template;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Convert one document by printing the styled page with `--print-to-pdf`.
pub fn convert(browser: &Path, source: &Path, output_dir: &Path) -> Result<PathBuf, FileError> {
    let markdown = fs::read_to_string(source).map_err(|e| FileError::Read {
        path: source.to_path_buf(),
        source: e,
    })?;

    let page = template::render_page(&markdown);
    let output = output_path(source, output_dir);

    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    let temp_html = output_dir.join(format!("{stem}_temp.html"));

    fs::write(&temp_html, page).map_err(|e| FileError::Write {
        path: temp_html.clone(),
        source: e,
    })?;

    let mut pdf_flag = OsString::from("--print-to-pdf=");
    pdf_flag.push(output.as_os_str());

    let result = Command::new(browser)
        .arg("--headless")
        .arg("--disable-gpu")
        .arg(pdf_flag)
        .arg("--no-margins")
        .arg(&temp_html)
        .output();

    // Best-effort cleanup, success or not.
    if let Err(e) = fs::remove_file(&temp_html) {
        debug!("could not remove {}: {e}", temp_html.display());
    }

    let cmd = result.map_err(|e| FileError::Spawn {
        tool: browser.display().to_string(),
        source: e,
    })?;

    if !cmd.status.success() {
        return Err(FileError::Backend {
            tool: browser.display().to_string(),
            stderr: String::from_utf8_lossy(&cmd.stderr).trim().to_string(),
        });
    }

    debug!("browser wrote {}", output.display());
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    fn fake_browser(dir: &Path, script: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join("chrome");
        fs::write(&path, script).unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
        path
    }

    #[cfg(unix)]
    #[test]
    fn temp_html_is_removed_after_success() {
        let tmp = tempfile::tempdir().unwrap();
        let out_dir = tmp.path().join("pdfs");
        fs::create_dir_all(&out_dir).unwrap();
        let source = tmp.path().join("setup.md");
        fs::write(&source, "# Setup\n").unwrap();

        // Writes a fake PDF to whatever --print-to-pdf names.
        let browser = fake_browser(
            tmp.path(),
            "#!/bin/sh\nfor a in \"$@\"; do case \"$a\" in --print-to-pdf=*) \
             printf '%%PDF-1.4 fake' > \"${a#--print-to-pdf=}\";; esac; done\n",
        );

        let output = convert(&browser, &source, &out_dir).unwrap();
        assert_eq!(output, out_dir.join("setup.pdf"));
        assert!(output.exists());
        assert!(!out_dir.join("setup_temp.html").exists());
    }

    #[cfg(unix)]
    #[test]
    fn temp_html_is_removed_after_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let out_dir = tmp.path().join("pdfs");
        fs::create_dir_all(&out_dir).unwrap();
        let source = tmp.path().join("faq.md");
        fs::write(&source, "# FAQ\n").unwrap();

        let browser = fake_browser(tmp.path(), "#!/bin/sh\necho 'render crash' >&2\nexit 1\n");

        let err = convert(&browser, &source, &out_dir).unwrap_err();
        assert!(matches!(err, FileError::Backend { .. }));
        assert!(err.to_string().contains("render crash"));
        assert!(!out_dir.join("faq_temp.html").exists());
    }

    #[test]
    fn missing_source_is_a_read_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = convert(
            Path::new("/usr/bin/true"),
            &tmp.path().join("nope.md"),
            tmp.path(),
        )
        .unwrap_err();
        assert!(matches!(err, FileError::Read { .. }));
    }
}
