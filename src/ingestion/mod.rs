//! Extraction entrypoints and implementations.
//!
//! The two loaders are independent, side-effect-free leaves:
//!
//! - [`csv`]: near-Earth objects from a header-bearing CSV file ([`load_neos`])
//! - [`json`]: close approaches from a `{"fields": [...], "data": [[...], ...]}` document
//!   ([`load_approaches`])
//!
//! [`unified`] wraps them for callers that want outcomes reported to a [`LoadObserver`], and can
//! load both sources concurrently via [`LoadRequest`].

pub mod columns;
pub mod csv;
pub mod json;
pub mod observability;
pub mod source;
pub mod unified;

pub use columns::ColumnIndex;
pub use csv::{load_neos, load_neos_from_reader};
pub use json::{load_approaches, load_approaches_from_reader, load_approaches_from_str};
pub use observability::{
    CompositeObserver, FileObserver, LoadContext, LoadObserver, LoadSeverity, LoadStats, SourceKind, TracingObserver,
};
pub use unified::{load_approaches_from_path, load_neos_from_path, Catalog, LoadOptions, LoadRequest};
