//! Progress-callback trait for per-document batch events.
//!
//! Inject an [`Arc<dyn BatchProgress>`] via
//! [`crate::config::BatchConfigBuilder::progress_hook`] to receive events as
//! the batch loop works through the document list.
//!
//! # Why callbacks instead of return values?
//!
//! The batch loop already returns a full [`crate::report::BatchOutcome`], but
//! only after the last document. Conversions through an external process can
//! take seconds each, so interactive callers want per-file feedback while the
//! run is still going — a progress bar, a log line, a GUI update. The
//! callback is the least-invasive integration point: the library stays
//! ignorant of how the host application communicates.
//!
//! The loop is strictly sequential, so implementations are never called
//! concurrently; the `Send + Sync` bound only exists so hooks can be shared
//! via `Arc` across the configuration and the caller.

use std::sync::Arc;

/// Called by the batch loop as it processes each document.
///
/// All methods have default no-op implementations so callers only override
/// what they care about.
pub trait BatchProgress: Send + Sync {
    /// Called once after enumeration, before any conversion.
    ///
    /// # Arguments
    /// * `total_files` — number of documents that will be attempted
    fn on_batch_start(&self, total_files: usize) {
        let _ = total_files;
    }

    /// Called just before a document is handed to the backend.
    ///
    /// # Arguments
    /// * `name`  — file name of the source document
    /// * `index` — 0-based position in the batch
    /// * `total` — total documents in the batch
    fn on_file_start(&self, name: &str, index: usize, total: usize) {
        let _ = (name, index, total);
    }

    /// Called when a document converted successfully.
    ///
    /// # Arguments
    /// * `name`       — file name of the source document
    /// * `size_bytes` — size of the produced PDF
    fn on_file_converted(&self, name: &str, size_bytes: u64) {
        let _ = (name, size_bytes);
    }

    /// Called when a document failed; the batch continues regardless.
    fn on_file_failed(&self, name: &str, error: &str) {
        let _ = (name, error);
    }

    /// Called once after the last document has been attempted.
    fn on_batch_complete(&self, converted: usize, failed: usize) {
        let _ = (converted, failed);
    }
}

/// A no-op implementation for callers that don't need progress events.
///
/// This is the default when no hook is configured.
pub struct NoopProgress;

impl BatchProgress for NoopProgress {}

/// Convenience alias matching the type stored in [`crate::config::BatchConfig`].
pub type ProgressHook = Arc<dyn BatchProgress>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct TrackingHook {
        starts: AtomicUsize,
        conversions: AtomicUsize,
        failures: AtomicUsize,
        total_seen: AtomicUsize,
    }

    impl BatchProgress for TrackingHook {
        fn on_batch_start(&self, total_files: usize) {
            self.total_seen.store(total_files, Ordering::SeqCst);
        }

        fn on_file_start(&self, _name: &str, _index: usize, _total: usize) {
            self.starts.fetch_add(1, Ordering::SeqCst);
        }

        fn on_file_converted(&self, _name: &str, _size_bytes: u64) {
            self.conversions.fetch_add(1, Ordering::SeqCst);
        }

        fn on_file_failed(&self, _name: &str, _error: &str) {
            self.failures.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn noop_hook_does_not_panic() {
        let hook = NoopProgress;
        hook.on_batch_start(3);
        hook.on_file_start("setup.md", 0, 3);
        hook.on_file_converted("setup.md", 42);
        hook.on_file_failed("faq.md", "some error");
        hook.on_batch_complete(1, 1);
    }

    #[test]
    fn tracking_hook_receives_events() {
        let hook = TrackingHook {
            starts: AtomicUsize::new(0),
            conversions: AtomicUsize::new(0),
            failures: AtomicUsize::new(0),
            total_seen: AtomicUsize::new(0),
        };

        hook.on_batch_start(2);
        hook.on_file_start("01-intro.md", 0, 2);
        hook.on_file_converted("01-intro.md", 1024);
        hook.on_file_start("02-data.md", 1, 2);
        hook.on_file_failed("02-data.md", "pandoc failed");

        assert_eq!(hook.total_seen.load(Ordering::SeqCst), 2);
        assert_eq!(hook.starts.load(Ordering::SeqCst), 2);
        assert_eq!(hook.conversions.load(Ordering::SeqCst), 1);
        assert_eq!(hook.failures.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn arc_dyn_hook_works() {
        let hook: ProgressHook = Arc::new(NoopProgress);
        hook.on_batch_start(10);
        hook.on_file_converted("resources.md", 512);
    }
}
