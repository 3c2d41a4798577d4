//! Backend detection, run once per process.
//!
//! Probing an external tool means spawning its `--version` command with all
//! output captured; the tool is usable when the process launches and exits
//! zero. The browser is probed differently — Chrome has no reliable
//! `--version` contract across platforms, so well-known install paths are
//! checked instead.

use crate::backend::{Backend, BackendKind};
use crate::error::PdfGenError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// Leading version token of a `--version` banner, e.g. "3.1.11" in
/// "pandoc 3.1.11".
static RE_VERSION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+(?:\.\d+)+").unwrap());

/// Probe an external command by running `<tool> --version`.
///
/// Returns the version token when the tool is usable, `None` when it is
/// missing or exits non-zero.
pub fn probe_command(tool: &str) -> Option<String> {
    let output = Command::new(tool)
        .arg("--version")
        .stdin(Stdio::null())
        .output()
        .ok()?;

    if !output.status.success() {
        debug!("{tool} --version exited with {}", output.status);
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let banner = stdout.lines().next().unwrap_or("").trim();
    let version = RE_VERSION
        .find(banner)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| banner.to_string());
    debug!("{tool} found, version {version}");
    Some(version)
}

/// The in-process styling engine, when it was compiled in.
#[cfg(feature = "styled")]
fn probe_styled() -> Option<Backend> {
    info!("styling engine compiled in, using markdown2pdf");
    Some(Backend::Styled)
}

#[cfg(not(feature = "styled"))]
fn probe_styled() -> Option<Backend> {
    None
}

/// Determine which conversion backend to use, in priority order: the
/// compiled-in styling engine, then `markdown-pdf`, then `pandoc`.
///
/// Pass `forced` to skip probing and require one specific backend; a forced
/// backend that is not available is a fatal error, exactly like finding
/// nothing.
///
/// # Errors
/// [`PdfGenError::NoBackendFound`] (with installation guidance) when nothing
/// usable exists, [`PdfGenError::BackendUnavailable`] when a forced backend
/// is missing.
pub fn detect_backend(forced: Option<BackendKind>) -> Result<Backend, PdfGenError> {
    if let Some(kind) = forced {
        return require_backend(kind);
    }

    if let Some(backend) = probe_styled() {
        return Ok(backend);
    }
    if let Some(version) = probe_command(super::markdown_pdf::TOOL) {
        info!("markdown-pdf found, version {version}");
        return Ok(Backend::MarkdownPdf);
    }
    if let Some(version) = probe_command(super::pandoc::TOOL) {
        info!("pandoc found, version {version}");
        return Ok(Backend::Pandoc);
    }

    Err(PdfGenError::NoBackendFound)
}

fn require_backend(kind: BackendKind) -> Result<Backend, PdfGenError> {
    match kind {
        BackendKind::Styled => probe_styled().ok_or_else(|| PdfGenError::BackendUnavailable {
            name: "styled".into(),
            hint: "This binary was built without the `styled` feature; \
                   reinstall with default features enabled."
                .into(),
        }),
        BackendKind::MarkdownPdf => match probe_command(super::markdown_pdf::TOOL) {
            Some(version) => {
                info!("markdown-pdf found, version {version}");
                Ok(Backend::MarkdownPdf)
            }
            None => Err(PdfGenError::BackendUnavailable {
                name: "markdown-pdf".into(),
                hint: "Install it with: npm install -g markdown-pdf".into(),
            }),
        },
        BackendKind::Pandoc => match probe_command(super::pandoc::TOOL) {
            Some(version) => {
                info!("pandoc found, version {version}");
                Ok(Backend::Pandoc)
            }
            None => Err(PdfGenError::BackendUnavailable {
                name: "pandoc".into(),
                hint: "Install it from https://pandoc.org/installing.html \
                       (plus wkhtmltopdf from https://wkhtmltopdf.org/downloads.html)"
                    .into(),
            }),
        },
        BackendKind::Chrome => Err(PdfGenError::BackendUnavailable {
            name: "chrome".into(),
            hint: "The headless-browser backend is selected with gen-pdfs-chrome \
                   (library: find_browser), not by the tool prober."
                .into(),
        }),
    }
}

/// Locate a Chrome/Chromium executable.
///
/// An explicit path wins and is an error if it does not exist; otherwise the
/// per-OS list of well-known install locations is walked and the first
/// existing path is returned.
pub fn find_browser(explicit: Option<&Path>) -> Result<PathBuf, PdfGenError> {
    if let Some(path) = explicit {
        return if path.exists() {
            info!("using browser at {}", path.display());
            Ok(path.to_path_buf())
        } else {
            Err(PdfGenError::BrowserPathMissing {
                path: path.to_path_buf(),
            })
        };
    }

    for candidate in browser_candidates() {
        if candidate.exists() {
            info!("browser found at {}", candidate.display());
            return Ok(candidate);
        }
        debug!("no browser at {}", candidate.display());
    }

    Err(PdfGenError::BrowserNotFound)
}

#[cfg(target_os = "windows")]
fn browser_candidates() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from(r"C:\Program Files\Google\Chrome\Application\chrome.exe"),
        PathBuf::from(r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe"),
    ];
    // Per-user installs land under %LOCALAPPDATA%.
    if let Some(local) = dirs::data_local_dir() {
        paths.push(local.join(r"Google\Chrome\Application\chrome.exe"));
    }
    paths
}

#[cfg(target_os = "macos")]
fn browser_candidates() -> Vec<PathBuf> {
    vec![
        PathBuf::from("/Applications/Google Chrome.app/Contents/MacOS/Google Chrome"),
        PathBuf::from("/Applications/Chromium.app/Contents/MacOS/Chromium"),
    ]
}

#[cfg(all(unix, not(target_os = "macos")))]
fn browser_candidates() -> Vec<PathBuf> {
    vec![
        PathBuf::from("/usr/bin/google-chrome"),
        PathBuf::from("/usr/bin/google-chrome-stable"),
        PathBuf::from("/usr/bin/chromium"),
        PathBuf::from("/usr/bin/chromium-browser"),
        PathBuf::from("/snap/bin/chromium"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_regex_extracts_the_token() {
        assert_eq!(
            RE_VERSION.find("pandoc 3.1.11.1").unwrap().as_str(),
            "3.1.11.1"
        );
        assert_eq!(RE_VERSION.find("markdown-pdf 11.0").unwrap().as_str(), "11.0");
        assert!(RE_VERSION.find("no digits here").is_none());
    }

    #[test]
    fn probing_a_missing_tool_returns_none() {
        assert!(probe_command("definitely-not-a-real-converter-xyz").is_none());
    }

    #[test]
    fn candidate_list_is_never_empty() {
        assert!(!browser_candidates().is_empty());
    }

    #[test]
    fn explicit_browser_path_must_exist() {
        let err = find_browser(Some(Path::new("/definitely/not/a/browser"))).unwrap_err();
        assert!(matches!(err, PdfGenError::BrowserPathMissing { .. }));
    }

    #[cfg(feature = "styled")]
    #[test]
    fn probe_prefers_the_styling_engine() {
        let backend = detect_backend(None).unwrap();
        assert_eq!(backend.kind(), BackendKind::Styled);
    }

    #[test]
    fn forcing_chrome_through_the_tool_prober_is_rejected() {
        let err = require_backend(BackendKind::Chrome).unwrap_err();
        assert!(matches!(err, PdfGenError::BackendUnavailable { .. }));
    }
}
