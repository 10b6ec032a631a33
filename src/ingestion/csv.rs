//! NEO (CSV) extraction.

use std::path::Path;

use crate::error::{ExtractError, ExtractResult};
use crate::factory::BodyFactory;
use crate::types::{Records, NEO_COLUMNS};

use super::columns::ColumnIndex;
use super::source::open_regular_file;

/// Load near-Earth objects from a CSV file.
///
/// Rules:
///
/// - The file must have a header row containing `pdes`, `name`, `diameter` and `pha` (in any
///   order, alongside any other columns).
/// - Each data row yields exactly one entity, in file order; a header-only file yields none.
/// - Values reach the factory verbatim, as `(designation, name, diameter, hazardous)`.
pub fn load_neos<F: BodyFactory>(path: impl AsRef<Path>, factory: &F) -> ExtractResult<Records<F::Output>> {
    let file = open_regular_file(path.as_ref())?;
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(file);
    load_neos_from_reader(&mut rdr, factory)
}

/// Load near-Earth objects from an existing CSV reader.
///
/// Useful when the input needs a non-default delimiter or quoting. The reader must be configured
/// with headers.
pub fn load_neos_from_reader<R: std::io::Read, F: BodyFactory>(
    rdr: &mut csv::Reader<R>,
    factory: &F,
) -> ExtractResult<Records<F::Output>> {
    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Err(ExtractError::SchemaMismatch {
            message: "csv input has no header row".to_string(),
        });
    }

    // Name-based selection: unrelated or re-ordered columns don't matter.
    let columns = ColumnIndex::resolve(headers.iter(), &NEO_COLUMNS, "column")?;
    let max_position = columns.max_position().unwrap_or_default();

    let mut neos = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        // 1-based data row number (the header is not counted).
        let row = row_idx0 + 1;
        let record = result?;

        // A flexible reader can hand over records shorter than the header.
        let mut values = [""; 4];
        for (slot, (idx, _)) in values.iter_mut().zip(columns.positions()) {
            *slot = record.get(idx).ok_or(ExtractError::RowTooShort {
                row,
                required: max_position,
                len: record.len(),
            })?;
        }
        let [designation, name, diameter, hazardous] = values;

        let neo = factory
            .build(designation, name, diameter, hazardous)
            .map_err(|e| ExtractError::from_field(row, e))?;
        neos.push(neo);
    }

    Ok(neos.into())
}
