//! Resolution of required column/field names to row positions.

use crate::error::{ExtractError, ExtractResult};

/// Positions of a fixed set of required names within a header or schema.
///
/// Resolved once per load; rows are then projected through the stored positions instead of
/// searching the names again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnIndex {
    // (position, name), in the order the names were required.
    entries: Vec<(usize, &'static str)>,
}

impl ColumnIndex {
    /// Resolve every name in `required` against `available`.
    ///
    /// The first occurrence of a name wins. If any required name is absent, the error lists all
    /// of them; `kind` ("column", "field") is only used for that message.
    pub fn resolve<'a, I>(available: I, required: &[&'static str], kind: &str) -> ExtractResult<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let available: Vec<&str> = available.into_iter().collect();

        let mut entries = Vec::with_capacity(required.len());
        let mut missing = Vec::new();
        for &name in required {
            match available.iter().position(|h| *h == name) {
                Some(idx) => entries.push((idx, name)),
                None => missing.push(format!("'{name}'")),
            }
        }

        if !missing.is_empty() {
            return Err(ExtractError::SchemaMismatch {
                message: format!(
                    "missing required {kind} {}. available={available:?}",
                    missing.join(", ")
                ),
            });
        }

        Ok(Self { entries })
    }

    /// `(position, name)` pairs in required-name order.
    pub fn positions(&self) -> impl Iterator<Item = (usize, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    /// Largest resolved position, i.e. the minimum row length is this plus one.
    pub fn max_position(&self) -> Option<usize> {
        self.entries.iter().map(|(idx, _)| *idx).max()
    }

    /// Position of a resolved name.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(_, n)| *n == name)
            .map(|(idx, _)| *idx)
    }

    /// Project `row` to `(name, value)` pairs for the resolved names.
    ///
    /// Returns `None` if the row is too short to reach every resolved position.
    pub fn project<'r, T>(&self, row: &'r [T]) -> Option<Vec<(&'static str, &'r T)>> {
        self.entries
            .iter()
            .map(|&(idx, name)| row.get(idx).map(|v| (name, v)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUIRED: [&str; 2] = ["b", "d"];

    #[test]
    fn resolves_positions_in_required_order() {
        let idx = ColumnIndex::resolve(["a", "b", "c", "d"], &REQUIRED, "field").unwrap();
        assert_eq!(idx.positions().collect::<Vec<_>>(), vec![(1, "b"), (3, "d")]);
        assert_eq!(idx.max_position(), Some(3));
        assert_eq!(idx.position_of("d"), Some(3));
        assert_eq!(idx.position_of("a"), None);
    }

    #[test]
    fn first_occurrence_wins() {
        let idx = ColumnIndex::resolve(["d", "b", "d"], &REQUIRED, "field").unwrap();
        assert_eq!(idx.position_of("d"), Some(0));
    }

    #[test]
    fn lists_every_missing_name() {
        let err = ColumnIndex::resolve(["a", "c"], &REQUIRED, "column").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("missing required column 'b', 'd'"));
    }

    #[test]
    fn project_selects_and_renames() {
        let idx = ColumnIndex::resolve(["a", "b", "c", "d"], &REQUIRED, "field").unwrap();
        let row = vec![10, 11, 12, 13];
        assert_eq!(idx.project(row.as_slice()), Some(vec![("b", &11), ("d", &13)]));
        assert_eq!(idx.project(&row[..3]), None);
    }
}
