//! Load driver.
//!
//! The format-specific loaders in [`super::csv`] and [`super::json`] are pure: they return their
//! result and nothing else. The functions here wrap them for callers that want outcomes reported
//! to an [`super::observability::LoadObserver`], and [`LoadRequest`] loads both sources at once.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{ErrorCategory, ExtractError, ExtractResult};
use crate::factory::{ApproachFactory, BodyFactory};
use crate::types::Records;

use super::observability::{LoadContext, LoadObserver, LoadSeverity, LoadStats, SourceKind};
use super::{csv, json};

/// Options controlling observed loads.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct LoadOptions {
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: LoadSeverity,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            observer: None,
            alert_at_or_above: LoadSeverity::Critical,
        }
    }
}

/// Load near-Earth objects with [`csv::load_neos`], reporting the outcome to the configured
/// observer.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with the record count
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// The result is returned unchanged.
///
/// ```no_run
/// use std::sync::Arc;
///
/// use neo_extract::ingestion::{load_neos_from_path, LoadOptions, LoadSeverity, TracingObserver};
/// use neo_extract::models::StandardFactory;
///
/// # fn main() -> Result<(), neo_extract::ExtractError> {
/// let opts = LoadOptions {
///     observer: Some(Arc::new(TracingObserver)),
///     alert_at_or_above: LoadSeverity::Critical,
/// };
/// let neos = load_neos_from_path("data/neos.csv", &StandardFactory, &opts)?;
/// println!("neos={}", neos.len());
/// # Ok(())
/// # }
/// ```
pub fn load_neos_from_path<F: BodyFactory>(
    path: impl AsRef<Path>,
    factory: &F,
    options: &LoadOptions,
) -> ExtractResult<Records<F::Output>> {
    let path = path.as_ref();
    let result = csv::load_neos(path, factory);
    report(path, SourceKind::Neos, &result, options);
    result
}

/// Load close approaches with [`json::load_approaches`], reporting the outcome to the configured
/// observer. See [`load_neos_from_path`] for the reporting rules.
pub fn load_approaches_from_path<F: ApproachFactory>(
    path: impl AsRef<Path>,
    factory: &F,
    options: &LoadOptions,
) -> ExtractResult<Records<F::Output>> {
    let path = path.as_ref();
    let result = json::load_approaches(path, factory);
    report(path, SourceKind::Approaches, &result, options);
    result
}

fn report<T>(path: &Path, source: SourceKind, result: &ExtractResult<Records<T>>, options: &LoadOptions) {
    let Some(obs) = options.observer.as_ref() else {
        return;
    };

    let ctx = LoadContext {
        path: path.to_path_buf(),
        source,
    };
    match result {
        Ok(records) => obs.on_success(&ctx, LoadStats { records: records.len() }),
        Err(e) => {
            let sev = severity_for_error(e);
            obs.on_failure(&ctx, sev, e);
            if sev >= options.alert_at_or_above {
                obs.on_alert(&ctx, sev, e);
            }
        }
    }
}

fn severity_for_error(e: &ExtractError) -> LoadSeverity {
    match e.category() {
        ErrorCategory::Resource => LoadSeverity::Critical,
        ErrorCategory::Structural | ErrorCategory::Coercion => LoadSeverity::Error,
    }
}

/// Both collections produced by a [`LoadRequest`].
#[derive(Debug, Clone)]
pub struct Catalog<N, A> {
    /// Near-Earth objects, in file order.
    pub neos: Records<N>,
    /// Close approaches, in file order.
    pub approaches: Records<A>,
}

/// Paths and options for loading both sources.
///
/// This can be useful if you want to hand the whole load to a job system.
#[derive(Debug, Clone)]
pub struct LoadRequest {
    /// Path to the NEO CSV file.
    pub neo_path: PathBuf,
    /// Path to the close-approach JSON file.
    pub cad_path: PathBuf,
    /// Options applied to both loads.
    pub options: LoadOptions,
}

impl LoadRequest {
    pub fn new(neo_path: impl Into<PathBuf>, cad_path: impl Into<PathBuf>) -> Self {
        Self {
            neo_path: neo_path.into(),
            cad_path: cad_path.into(),
            options: LoadOptions::default(),
        }
    }

    /// Replace the load options.
    pub fn with_options(mut self, options: LoadOptions) -> Self {
        self.options = options;
        self
    }

    /// Load both sources with a factory that builds both entity kinds.
    pub fn run<F>(&self, factory: &F) -> ExtractResult<Catalog<<F as BodyFactory>::Output, <F as ApproachFactory>::Output>>
    where
        F: BodyFactory + ApproachFactory + Sync,
        <F as BodyFactory>::Output: Send + Sync,
        <F as ApproachFactory>::Output: Send + Sync,
    {
        self.run_with(factory, factory)
    }

    /// Load both sources concurrently, each with its own factory.
    ///
    /// The two loads share no state, so they run side by side on the rayon pool. If both fail,
    /// the NEO error is returned.
    pub fn run_with<B, A>(&self, neo_factory: &B, cad_factory: &A) -> ExtractResult<Catalog<B::Output, A::Output>>
    where
        B: BodyFactory + Sync,
        A: ApproachFactory + Sync,
        B::Output: Send + Sync,
        A::Output: Send + Sync,
    {
        let (neos, approaches) = rayon::join(
            || load_neos_from_path(&self.neo_path, neo_factory, &self.options),
            || load_approaches_from_path(&self.cad_path, cad_factory, &self.options),
        );

        Ok(Catalog {
            neos: neos?,
            approaches: approaches?,
        })
    }
}
