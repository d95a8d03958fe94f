//! Logging utilities with colored output and a render progress bar.
//!
//! Provides:
//! - `log!` macro for formatted terminal output with colored `[module]` prefixes
//! - `Progress` for displaying a single in-place progress bar while pages render
//!
//! # Example
//!
//! ```ignore
//! log!("fetch"; "loading {} influencers", count);
//!
//! let progress = Progress::new("render", total);
//! progress.inc();
//! progress.finish();
//! ```

use colored::{ColoredString, Colorize};
use crossterm::{
    execute,
    terminal::{Clear, ClearType, size},
};
use std::{
    io::{Write, stdout},
    sync::{
        OnceLock,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
};

/// Cached terminal width (fetched once on first use)
static TERMINAL_WIDTH: OnceLock<u16> = OnceLock::new();

/// Whether a progress bar currently owns the bottom terminal line
static BAR_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Maximum progress bar width in characters
const MAX_BAR_WIDTH: usize = 40;

/// Get terminal width, cached after first call.
/// Falls back to 120 columns if detection fails.
fn get_terminal_width() -> u16 {
    *TERMINAL_WIDTH.get_or_init(|| size().map(|(w, _)| w).unwrap_or(120))
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix.
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a message with a colored module prefix.
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module);
    let mut stdout = stdout().lock();

    if BAR_ACTIVE.load(Ordering::SeqCst) {
        // The bar owns the current line; clear it, print the log line,
        // and leave the cursor where the bar will redraw itself.
        execute!(stdout, Clear(ClearType::CurrentLine)).ok();
        write!(stdout, "\r").ok();
    }

    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Apply color to a module prefix based on module type.
#[inline]
fn colorize_prefix(module: &str) -> ColoredString {
    let prefix = format!("[{module}]");
    match module.to_ascii_lowercase().as_str() {
        "serve" | "leads" => prefix.bright_blue().bold(),
        "check" => prefix.bright_green().bold(),
        "error" => prefix.bright_red().bold(),
        "warn" => prefix.bright_magenta().bold(),
        _ => prefix.bright_yellow().bold(),
    }
}

// ============================================================================
// Progress Bar
// ============================================================================

/// A single in-place progress bar: `[render] [████░░░░] 42/100`.
///
/// Updates are thread-safe; the counter is atomic and each `inc` redraws
/// the bottom line in place.
pub struct Progress {
    prefix: ColoredString,
    total: usize,
    current: AtomicUsize,
}

impl Progress {
    /// Create and draw a progress bar for `total` items.
    pub fn new(module: &str, total: usize) -> Self {
        let bar = Self {
            prefix: colorize_prefix(module),
            total,
            current: AtomicUsize::new(0),
        };
        BAR_ACTIVE.store(true, Ordering::SeqCst);
        bar.draw();
        bar
    }

    /// Increment the counter and redraw.
    pub fn inc(&self) {
        self.current.fetch_add(1, Ordering::SeqCst);
        self.draw();
    }

    fn draw(&self) {
        let current = self.current.load(Ordering::SeqCst).min(self.total);
        let counter = format!("{current}/{}", self.total);

        // Fit the bar between prefix and counter, bounded for wide terminals.
        let width = get_terminal_width() as usize;
        let reserved = self.prefix.len() + counter.len() + 4;
        let bar_width = width.saturating_sub(reserved).clamp(10, MAX_BAR_WIDTH);

        let filled = if self.total == 0 {
            bar_width
        } else {
            bar_width * current / self.total
        };
        let bar: String = "█".repeat(filled) + &"░".repeat(bar_width - filled);

        let mut stdout = stdout().lock();
        execute!(stdout, Clear(ClearType::CurrentLine)).ok();
        write!(stdout, "\r{} [{bar}] {counter}", self.prefix).ok();
        stdout.flush().ok();
    }

    /// Clear the bar from the terminal.
    pub fn finish(&self) {
        if !BAR_ACTIVE.swap(false, Ordering::SeqCst) {
            return;
        }
        let mut stdout = stdout().lock();
        execute!(stdout, Clear(ClearType::CurrentLine)).ok();
        write!(stdout, "\r").ok();
        stdout.flush().ok();
    }
}

impl Drop for Progress {
    fn drop(&mut self) {
        self.finish();
    }
}
