//! Configuration for a batch conversion run.
//!
//! All behaviour is controlled through [`BatchConfig`], built via its
//! [`BatchConfigBuilder`]. The defaults reproduce the workshop layout — a
//! `docs/` tree with five day-named lesson directories and four auxiliary
//! pages, converted into `pdfs/` — so the common case is
//! `BatchConfig::default()`.

use crate::error::PdfGenError;
use crate::progress::ProgressHook;
use std::fmt;
use std::path::PathBuf;

/// Lesson subdirectories enumerated under the docs directory, in order.
pub const LESSON_DIRS: [&str; 5] = ["day1", "day2", "day3", "day4", "day5"];

/// Auxiliary pages picked up from the docs directory root.
pub const KEY_PAGES: [&str; 4] = ["setup.md", "prerequisites.md", "resources.md", "faq.md"];

/// Configuration for a batch conversion run.
///
/// # Example
/// ```rust
/// use workshop_pdfgen::BatchConfig;
///
/// let config = BatchConfig::builder()
///     .docs_dir("material/docs")
///     .output_dir("material/pdfs")
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct BatchConfig {
    /// Directory containing the Markdown sources. Default: `docs`.
    pub docs_dir: PathBuf,

    /// Directory the PDFs are written to, created idempotently before the
    /// loop. Default: `pdfs`.
    pub output_dir: PathBuf,

    /// Names of the lesson subdirectories enumerated under `docs_dir`.
    /// Missing directories are skipped silently. Default: [`LESSON_DIRS`].
    pub lesson_dirs: Vec<String>,

    /// File names of the auxiliary pages picked up from the `docs_dir` root.
    /// Missing pages are skipped silently. Default: [`KEY_PAGES`].
    pub key_pages: Vec<String>,

    /// Optional per-file progress hook. Default: none.
    pub progress: Option<ProgressHook>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            docs_dir: PathBuf::from("docs"),
            output_dir: PathBuf::from("pdfs"),
            lesson_dirs: LESSON_DIRS.iter().map(|d| d.to_string()).collect(),
            key_pages: KEY_PAGES.iter().map(|p| p.to_string()).collect(),
            progress: None,
        }
    }
}

impl fmt::Debug for BatchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BatchConfig")
            .field("docs_dir", &self.docs_dir)
            .field("output_dir", &self.output_dir)
            .field("lesson_dirs", &self.lesson_dirs)
            .field("key_pages", &self.key_pages)
            .field("progress", &self.progress.as_ref().map(|_| "<dyn BatchProgress>"))
            .finish()
    }
}

impl BatchConfig {
    /// Create a new builder for `BatchConfig`.
    pub fn builder() -> BatchConfigBuilder {
        BatchConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`BatchConfig`].
pub struct BatchConfigBuilder {
    config: BatchConfig,
}

impl BatchConfigBuilder {
    pub fn docs_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.docs_dir = dir.into();
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    pub fn lesson_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.lesson_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }

    pub fn key_pages<I, S>(mut self, pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.key_pages = pages.into_iter().map(Into::into).collect();
        self
    }

    pub fn progress_hook(mut self, hook: ProgressHook) -> Self {
        self.config.progress = Some(hook);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<BatchConfig, PdfGenError> {
        let c = &self.config;
        if c.docs_dir.as_os_str().is_empty() {
            return Err(PdfGenError::InvalidConfig("docs_dir must not be empty".into()));
        }
        if c.output_dir.as_os_str().is_empty() {
            return Err(PdfGenError::InvalidConfig("output_dir must not be empty".into()));
        }
        // Lesson-directory names are joined onto docs_dir; a name with a
        // separator would silently escape the docs tree.
        for name in c.lesson_dirs.iter().chain(c.key_pages.iter()) {
            if name.is_empty() || name.contains('/') || name.contains('\\') {
                return Err(PdfGenError::InvalidConfig(format!(
                    "'{name}' is not a plain file or directory name"
                )));
            }
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_reproduce_the_workshop_layout() {
        let config = BatchConfig::default();
        assert_eq!(config.docs_dir, PathBuf::from("docs"));
        assert_eq!(config.output_dir, PathBuf::from("pdfs"));
        assert_eq!(config.lesson_dirs, vec!["day1", "day2", "day3", "day4", "day5"]);
        assert_eq!(
            config.key_pages,
            vec!["setup.md", "prerequisites.md", "resources.md", "faq.md"]
        );
        assert!(config.progress.is_none());
    }

    #[test]
    fn builder_overrides_directories() {
        let config = BatchConfig::builder()
            .docs_dir("material")
            .output_dir("out")
            .lesson_dirs(["week1", "week2"])
            .build()
            .unwrap();
        assert_eq!(config.docs_dir, PathBuf::from("material"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.lesson_dirs, vec!["week1", "week2"]);
    }

    #[test]
    fn empty_docs_dir_is_rejected() {
        let err = BatchConfig::builder().docs_dir("").build().unwrap_err();
        assert!(matches!(err, PdfGenError::InvalidConfig(_)));
    }

    #[test]
    fn lesson_dir_with_separator_is_rejected() {
        let err = BatchConfig::builder()
            .lesson_dirs(["day1/../secrets"])
            .build()
            .unwrap_err();
        assert!(matches!(err, PdfGenError::InvalidConfig(_)));
    }
}
