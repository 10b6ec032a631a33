//! Core data-shape types shared by the loaders and the entity factories.

use std::borrow::Cow;
use std::sync::Arc;

use crate::error::{ExtractError, ExtractResult};

/// Immutable, order-preserving output of a loader.
///
/// Built append-only during a load and frozen before it is returned.
pub type Records<T> = Arc<[T]>;

/// Columns the NEO (CSV) loader selects, in factory argument order.
pub const NEO_COLUMNS: [&str; 4] = ["pdes", "name", "diameter", "pha"];

/// Fields the close-approach (JSON) loader resolves, named as the factory expects them.
pub const APPROACH_FIELDS: [&str; 4] = ["des", "cd", "dist", "v_rel"];

/// Raw keyword arguments for one close-approach record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApproachArgs<'a> {
    /// Designation of the approaching body.
    pub des: Cow<'a, str>,
    /// Calendar date/time of the approach (`2025-Jan-01 00:00`).
    pub cd: Cow<'a, str>,
    /// Nominal approach distance (au).
    pub dist: Cow<'a, str>,
    /// Velocity relative to the approach body (km/s).
    pub v_rel: Cow<'a, str>,
}

impl<'a> ApproachArgs<'a> {
    /// Build keyword arguments from a projected name -> value mapping.
    ///
    /// Every name in [`APPROACH_FIELDS`] must be present; unrelated names are ignored.
    pub fn from_kwargs<I>(kwargs: I) -> ExtractResult<Self>
    where
        I: IntoIterator<Item = (&'a str, Cow<'a, str>)>,
    {
        let (mut des, mut cd, mut dist, mut v_rel) = (None, None, None, None);
        for (name, value) in kwargs {
            match name {
                "des" => des = Some(value),
                "cd" => cd = Some(value),
                "dist" => dist = Some(value),
                "v_rel" => v_rel = Some(value),
                _ => {}
            }
        }

        match (des, cd, dist, v_rel) {
            (Some(des), Some(cd), Some(dist), Some(v_rel)) => Ok(Self { des, cd, dist, v_rel }),
            (des, cd, dist, v_rel) => {
                let present = [des.is_some(), cd.is_some(), dist.is_some(), v_rel.is_some()];
                let missing: Vec<&str> = APPROACH_FIELDS
                    .iter()
                    .zip(present)
                    .filter(|(_, p)| !p)
                    .map(|(name, _)| *name)
                    .collect();
                Err(ExtractError::SchemaMismatch {
                    message: format!("missing approach keyword(s) {missing:?}"),
                })
            }
        }
    }

    /// Look up a keyword argument by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        match name {
            "des" => Some(self.des.as_ref()),
            "cd" => Some(self.cd.as_ref()),
            "dist" => Some(self.dist.as_ref()),
            "v_rel" => Some(self.v_rel.as_ref()),
            _ => None,
        }
    }

    /// Iterate `(name, value)` pairs in [`APPROACH_FIELDS`] order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("des", self.des.as_ref()),
            ("cd", self.cd.as_ref()),
            ("dist", self.dist.as_ref()),
            ("v_rel", self.v_rel.as_ref()),
        ]
        .into_iter()
    }
}
