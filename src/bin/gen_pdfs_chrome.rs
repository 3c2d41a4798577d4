//! CLI binary for the headless-browser variant.
//!
//! For machines where neither the styling engine's output nor the external
//! converters are an option (classically: Windows laptops without admin
//! rights), an existing Chrome install can print the styled HTML template
//! straight to PDF.

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use workshop_pdfgen::{
    find_browser, run_batch, Backend, BatchConfig, BatchOutcome, BatchProgress, ProgressHook,
};

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

/// Keep failure lines to one tidy row.
fn short_error(error: &str) -> String {
    let line = error.lines().next().unwrap_or(error);
    if line.chars().count() > 80 {
        let mut cut: String = line.chars().take(79).collect();
        cut.push('\u{2026}');
        cut
    } else {
        line.to_string()
    }
}

// ── Progress rendering ───────────────────────────────────────────────────────

/// Terminal progress: a live bar plus one ✓/✗ log line per file.
struct CliProgress {
    bar: ProgressBar,
    output_dir: PathBuf,
}

impl CliProgress {
    fn new(output_dir: PathBuf) -> Arc<Self> {
        let bar = ProgressBar::new(0); // length set in on_batch_start
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {prefix:.bold}  {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_prefix("Preparing");
        bar.enable_steady_tick(Duration::from_millis(80));
        Arc::new(Self { bar, output_dir })
    }
}

impl BatchProgress for CliProgress {
    fn on_batch_start(&self, total_files: usize) {
        let style = ProgressStyle::with_template(
            "{spinner:.cyan} {prefix:.bold}  [{bar:42.green/238}] {pos:>3}/{len} files",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏  ");

        self.bar.set_length(total_files as u64);
        self.bar.set_style(style);
        self.bar.set_prefix("Converting");
        self.bar
            .println(format!("\nFound {total_files} files to convert"));
        self.bar
            .println(format!("Output directory: {}\n", self.output_dir.display()));
    }

    fn on_file_start(&self, name: &str, _index: usize, _total: usize) {
        self.bar.set_message(name.to_string());
    }

    fn on_file_converted(&self, name: &str, size_bytes: u64) {
        self.bar.println(format!(
            "  {} {:<36} {}",
            green("✓"),
            name,
            dim(&format!("{:.1} KB", size_bytes as f64 / 1024.0)),
        ));
        self.bar.inc(1);
    }

    fn on_file_failed(&self, name: &str, error: &str) {
        self.bar.println(format!(
            "  {} {:<36} {}",
            red("✗"),
            name,
            red(&short_error(error)),
        ));
        self.bar.inc(1);
    }

    fn on_batch_complete(&self, _converted: usize, _failed: usize) {
        self.bar.finish_and_clear();
    }
}

/// Plain per-file lines for `--no-progress` (and dumb terminals).
struct PlainProgress {
    output_dir: PathBuf,
}

impl BatchProgress for PlainProgress {
    fn on_batch_start(&self, total_files: usize) {
        eprintln!("\nFound {total_files} files to convert");
        eprintln!("Output directory: {}\n", self.output_dir.display());
    }

    fn on_file_start(&self, name: &str, _index: usize, _total: usize) {
        eprint!("Converting: {name}... ");
    }

    fn on_file_converted(&self, _name: &str, size_bytes: u64) {
        eprintln!("✓ ({:.1} KB)", size_bytes as f64 / 1024.0);
    }

    fn on_file_failed(&self, _name: &str, error: &str) {
        eprintln!("✗ {}", short_error(error));
    }
}

fn print_summary(outcome: &BatchOutcome) {
    let line = "=".repeat(60);
    eprintln!("\n{line}");
    eprintln!("Conversion complete!");
    eprintln!(
        "  {} Converted: {} files",
        green("✓"),
        outcome.stats.converted
    );
    if outcome.stats.failed > 0 {
        eprintln!("  {} Failed: {} files", red("✗"), outcome.stats.failed);
    }
    eprintln!("  📁 Output: {}", outcome.output_dir.display());
    eprintln!("{line}\n");
}

// ── CLI definition ───────────────────────────────────────────────────────────

const AFTER_HELP: &str = r#"EXAMPLES:
  # Convert docs/ into pdfs/ with an auto-detected Chrome install
  gen-pdfs-chrome

  # Point at a specific Chromium binary
  gen-pdfs-chrome --browser /usr/bin/chromium

SEARCHED LOCATIONS (when --browser is not given):
  Linux    /usr/bin/google-chrome[-stable], /usr/bin/chromium[-browser],
           /snap/bin/chromium
  macOS    /Applications/Google Chrome.app, /Applications/Chromium.app
  Windows  Program Files, Program Files (x86), %LOCALAPPDATA%

EXIT STATUS:
  0  every discovered file converted (or nothing to convert)
  1  no browser found, or at least one file failed
"#;

/// Convert the workshop Markdown lessons to styled PDFs via headless Chrome.
#[derive(Parser, Debug)]
#[command(
    name = "gen-pdfs-chrome",
    version,
    about = "Convert the workshop Markdown lessons to styled PDFs via headless Chrome",
    long_about = "Batch-convert the workshop's Markdown lesson files into styled PDF documents \
by rendering each one through the styled HTML template and printing it with a headless \
Chrome/Chromium executable. Useful on machines where no other converter can be installed.",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Directory containing the workshop Markdown sources.
    #[arg(long, env = "PDFGEN_DOCS_DIR", default_value = "docs")]
    docs_dir: PathBuf,

    /// Directory the PDFs are written to.
    #[arg(short, long, env = "PDFGEN_OUTPUT_DIR", default_value = "pdfs")]
    output_dir: PathBuf,

    /// Path to a Chrome/Chromium executable (skips the well-known-path scan).
    #[arg(long, env = "PDFGEN_BROWSER")]
    browser: Option<PathBuf>,

    /// Print the batch summary as JSON on stdout.
    #[arg(long, env = "PDFGEN_JSON")]
    json: bool,

    /// Disable the progress bar (plain per-file lines instead).
    #[arg(long, env = "PDFGEN_NO_PROGRESS")]
    no_progress: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "PDFGEN_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "PDFGEN_QUIET")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let show_progress = !cli.quiet && !cli.json;
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet || show_progress {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Locate a browser ─────────────────────────────────────────────────
    if show_progress {
        eprintln!("{}", bold("Workshop PDF Generator (Chrome)"));
        eprintln!("Checking for Google Chrome...");
    }

    let browser = find_browser(cli.browser.as_deref())?;

    if show_progress {
        eprintln!("{} Chrome found: {}", green("✓"), browser.display());
    }

    let backend = Backend::Chrome(browser);

    // ── Build config ─────────────────────────────────────────────────────
    let hook: Option<ProgressHook> = if !show_progress {
        None
    } else if cli.no_progress {
        Some(Arc::new(PlainProgress {
            output_dir: cli.output_dir.clone(),
        }))
    } else {
        Some(CliProgress::new(cli.output_dir.clone()) as ProgressHook)
    };

    let mut builder = BatchConfig::builder()
        .docs_dir(&cli.docs_dir)
        .output_dir(&cli.output_dir);
    if let Some(hook) = hook {
        builder = builder.progress_hook(hook);
    }
    let config = builder.build().context("Invalid configuration")?;

    // ── Run the batch ────────────────────────────────────────────────────
    let outcome = run_batch(&backend, &config)?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&outcome).context("Failed to serialise summary")?
        );
    } else if !cli.quiet {
        print_summary(&outcome);
    }

    if !outcome.all_converted() {
        std::process::exit(1);
    }
    Ok(())
}
