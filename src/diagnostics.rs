// Diagnostic sink
//
// One sink is built per run and handed to every input descriptor and to the
// render stage, so syntax problems and render diagnostics all surface through
// the same line-oriented channel.

use std::fmt;
use std::sync::{Arc, Mutex};

/// How serious a reported line is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A single line recorded by a [`MemorySink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub line: String,
}

/// Append-only destination for diagnostic lines.
///
/// Lines arrive unprefixed and without a trailing newline.
pub trait Sink: Send + Sync + fmt::Debug {
    fn emit(&self, severity: Severity, line: &str);
}

/// Forwards every line to the process-wide console reporter (`tracing`).
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl Sink for ConsoleSink {
    fn emit(&self, severity: Severity, line: &str) {
        match severity {
            Severity::Warning => tracing::warn!("{}", line),
            Severity::Error => tracing::error!("{}", line),
        }
    }
}

/// Keeps every line in memory.
///
/// Used as the error log of interactive renders, where diagnostics are
/// streamed back to the caller instead of aborting the render.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far, in arrival order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    /// Just the text of every recorded line
    pub fn lines(&self) -> Vec<String> {
        self.diagnostics().into_iter().map(|d| d.line).collect()
    }
}

impl Sink for MemorySink {
    fn emit(&self, severity: Severity, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(Diagnostic {
                severity,
                line: line.to_string(),
            });
        }
    }
}

/// Shared handle to the run's sink.
///
/// Cloning is cheap; every clone writes to the same underlying sink.
#[derive(Clone)]
pub struct Diagnostics {
    sink: Arc<dyn Sink>,
}

impl Diagnostics {
    pub fn new(sink: Arc<dyn Sink>) -> Self {
        Self { sink }
    }

    /// Handle backed by [`ConsoleSink`]
    pub fn console() -> Self {
        Self::new(Arc::new(ConsoleSink))
    }

    pub fn warn(&self, message: impl fmt::Display) {
        self.write(Severity::Warning, &message.to_string());
    }

    pub fn error(&self, message: impl fmt::Display) {
        self.write(Severity::Error, &message.to_string());
    }

    /// Splits `text` into lines and emits each one separately.
    pub fn write(&self, severity: Severity, text: &str) {
        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            self.sink.emit(severity, line);
        }
    }

    /// True when both handles write to the same sink
    pub fn same_sink(&self, other: &Diagnostics) -> bool {
        Arc::ptr_eq(&self.sink, &other.sink)
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::console()
    }
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics").field("sink", &self.sink).finish()
    }
}
