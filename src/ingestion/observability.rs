use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::error::{ErrorCategory, ExtractError};

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoadSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (the load failed on its input).
    Error,
    /// Critical error (the input could not be accessed at all).
    Critical,
}

/// Which source a load reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Near-Earth objects (CSV).
    Neos,
    /// Close approaches (JSON).
    Approaches,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Neos => f.write_str("neos"),
            SourceKind::Approaches => f.write_str("approaches"),
        }
    }
}

/// Context about a load attempt.
#[derive(Debug, Clone)]
pub struct LoadContext {
    /// The input path.
    pub path: PathBuf,
    /// The source being loaded.
    pub source: SourceKind,
}

/// Minimal stats reported on a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    /// Number of records produced.
    pub records: usize,
}

/// Observer interface for load outcomes.
///
/// The loaders themselves never log; the driver in [`super::unified`] reports to observers.
pub trait LoadObserver: Send + Sync {
    /// Called when a load succeeds.
    fn on_success(&self, _ctx: &LoadContext, _stats: LoadStats) {}

    /// Called when a load fails.
    fn on_failure(&self, _ctx: &LoadContext, _severity: LoadSeverity, _error: &ExtractError) {}

    /// Called when a load failure meets the alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &ExtractError) {
        self.on_failure(ctx, severity, error)
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn LoadObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn LoadObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl LoadObserver for CompositeObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &ExtractError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &ExtractError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Emits load events through `tracing`.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl LoadObserver for TracingObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        tracing::info!(
            source = %ctx.source,
            path = %ctx.path.display(),
            records = stats.records,
            "load succeeded"
        );
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &ExtractError) {
        match severity {
            LoadSeverity::Info => tracing::info!(source = %ctx.source, path = %ctx.path.display(), %error, "load failed"),
            LoadSeverity::Warning => tracing::warn!(source = %ctx.source, path = %ctx.path.display(), %error, "load failed"),
            LoadSeverity::Error | LoadSeverity::Critical => tracing::error!(
                source = %ctx.source,
                path = %ctx.path.display(),
                ?severity,
                %error,
                "load failed"
            ),
        }
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &ExtractError) {
        tracing::error!(
            alert = true,
            source = %ctx.source,
            path = %ctx.path.display(),
            ?severity,
            %error,
            "load failed"
        );
    }
}

/// Appends load events to a local log file, one line per event:
///
/// ```text
/// 2026-10-19T12:00:00+00:00 neos: loaded 3 records from data/neos.csv
/// 2026-10-19T12:00:00+00:00 approaches: load of data/cad.json failed [Error, structural]: ...
/// 2026-10-19T12:00:00+00:00 approaches: alert: load of data/cad.json failed [Critical, resource]: ...
/// ```
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn record(&self, ctx: &LoadContext, event: fmt::Arguments<'_>) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{} {}: {event}", chrono::Utc::now().to_rfc3339(), ctx.source);
        }
    }

    fn record_failure(&self, ctx: &LoadContext, prefix: &str, severity: LoadSeverity, error: &ExtractError) {
        let category = match error.category() {
            ErrorCategory::Resource => "resource",
            ErrorCategory::Structural => "structural",
            ErrorCategory::Coercion => "coercion",
        };
        self.record(
            ctx,
            format_args!(
                "{prefix}load of {} failed [{severity:?}, {category}]: {error}",
                ctx.path.display()
            ),
        );
    }
}

impl LoadObserver for FileObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        self.record(
            ctx,
            format_args!("loaded {} records from {}", stats.records, ctx.path.display()),
        );
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &ExtractError) {
        self.record_failure(ctx, "", severity, error);
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &ExtractError) {
        self.record_failure(ctx, "alert: ", severity, error);
    }
}
