//! `neo-extract` loads near-Earth object data from two sources into immutable, order-preserving
//! in-memory collections ready for indexing:
//!
//! - a **CSV** file of near-Earth objects (header with at least `pdes`, `name`, `diameter`, `pha`)
//! - a **JSON** close-approach document with an explicit `fields` schema and positional `data`
//!   rows (`des`, `cd`, `dist`, `v_rel` are required)
//!
//! The loaders only select fields and marshal raw values. Turning those values into entities is
//! delegated to a factory ([`factory::BodyFactory`] / [`factory::ApproachFactory`]); the
//! [`models::StandardFactory`] builds [`models::NearEarthObject`]s and
//! [`models::CloseApproach`]es.
//!
//! ## Quick example
//!
//! ```no_run
//! use neo_extract::ingestion::{load_approaches, load_neos};
//! use neo_extract::models::StandardFactory;
//!
//! # fn main() -> Result<(), neo_extract::ExtractError> {
//! let neos = load_neos("data/neos.csv", &StandardFactory)?;
//! let approaches = load_approaches("data/cad.json", &StandardFactory)?;
//! println!("neos={} approaches={}", neos.len(), approaches.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom factories
//!
//! Any closure with the right signature is a factory, which is handy for tests or for building
//! your own entity types:
//!
//! ```rust
//! use neo_extract::factory::FieldError;
//! use neo_extract::ingestion::load_neos_from_reader;
//!
//! let input = "pdes,name,diameter,pha\n433,Eros,16.84,N\n";
//! let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(input.as_bytes());
//!
//! let designations = load_neos_from_reader(&mut rdr, &|pdes: &str, _: &str, _: &str, _: &str| {
//!     Ok::<_, FieldError>(pdes.to_string())
//! })
//! .unwrap();
//! assert_eq!(designations.to_vec(), vec!["433".to_string()]);
//! ```
//!
//! ## Errors
//!
//! Loads are fail-fast: any error aborts the whole load and no partial collection is returned.
//! [`ExtractError::category`] classifies errors as resource (missing/unreadable file), structural
//! (input doesn't match the documented shape) or coercion (a factory rejected a value).
//!
//! ## Modules
//!
//! - [`ingestion`]: the two loaders, the load driver and observers
//! - [`factory`]: entity factory traits
//! - [`models`]: default entities and [`models::StandardFactory`]
//! - [`types`]: shared data-shape types
//! - [`error`]: error types

pub mod error;
pub mod factory;
pub mod ingestion;
pub mod models;
pub mod types;

pub use error::{ErrorCategory, ExtractError, ExtractResult};
