//! Close-approach (JSON) extraction.
//!
//! The input is a self-describing document:
//!
//! ```json
//! {"fields": ["des", "orbit_id", "cd", "dist", "v_rel"], "data": [["2000433", "659", ...], ...]}
//! ```
//!
//! `fields` names the positional columns of every `data` row. The required field positions are
//! resolved once per document, then each row is projected through them.

use std::borrow::Cow;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::error::{ExtractError, ExtractResult};
use crate::factory::ApproachFactory;
use crate::types::{ApproachArgs, Records, APPROACH_FIELDS};

use super::columns::ColumnIndex;
use super::source::open_regular_file;

/// Top-level document shape. Other keys (`signature`, `count`, ...) are ignored.
#[derive(Debug, Deserialize)]
struct CadDocument {
    fields: Vec<String>,
    data: Vec<Vec<serde_json::Value>>,
}

/// Load close approaches from a JSON file.
///
/// The whole document is parsed before any entity is built.
pub fn load_approaches<F: ApproachFactory>(
    path: impl AsRef<Path>,
    factory: &F,
) -> ExtractResult<Records<F::Output>> {
    let file = open_regular_file(path.as_ref())?;
    load_approaches_from_reader(BufReader::new(file), factory)
}

/// Load close approaches from any reader.
pub fn load_approaches_from_reader<R: Read, F: ApproachFactory>(
    reader: R,
    factory: &F,
) -> ExtractResult<Records<F::Output>> {
    let doc: CadDocument = serde_json::from_reader(reader)?;
    approaches_from_document(&doc, factory)
}

/// Load close approaches from an in-memory JSON string.
pub fn load_approaches_from_str<F: ApproachFactory>(
    input: &str,
    factory: &F,
) -> ExtractResult<Records<F::Output>> {
    let doc: CadDocument = serde_json::from_str(input)?;
    approaches_from_document(&doc, factory)
}

fn approaches_from_document<F: ApproachFactory>(
    doc: &CadDocument,
    factory: &F,
) -> ExtractResult<Records<F::Output>> {
    let index = ColumnIndex::resolve(doc.fields.iter().map(String::as_str), &APPROACH_FIELDS, "field")?;
    let max_position = index.max_position().unwrap_or_default();

    let mut approaches = Vec::with_capacity(doc.data.len());
    for (idx0, values) in doc.data.iter().enumerate() {
        let row = idx0 + 1;
        let projected = index.project(values.as_slice()).ok_or(ExtractError::RowTooShort {
            row,
            required: max_position,
            len: values.len(),
        })?;

        let kwargs = projected
            .into_iter()
            .map(|(name, v)| cell_text(row, name, v).map(|text| (name, text)))
            .collect::<ExtractResult<Vec<_>>>()?;
        let args = ApproachArgs::from_kwargs(kwargs)?;

        approaches.push(factory.build(&args).map_err(|e| ExtractError::from_field(row, e))?);
    }

    Ok(approaches.into())
}

// Strings pass through verbatim; `null` means "unknown" and is handed over as an empty string.
fn cell_text<'a>(row: usize, field: &str, v: &'a serde_json::Value) -> ExtractResult<Cow<'a, str>> {
    match v {
        serde_json::Value::String(s) => Ok(Cow::Borrowed(s.as_str())),
        serde_json::Value::Null => Ok(Cow::Borrowed("")),
        serde_json::Value::Number(n) => Ok(Cow::Owned(n.to_string())),
        serde_json::Value::Bool(b) => Ok(Cow::Owned(b.to_string())),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => Err(ExtractError::SchemaMismatch {
            message: format!("row {row} field '{field}' is not a scalar value"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::FieldError;

    fn owned(args: &ApproachArgs<'_>) -> Result<Vec<String>, FieldError> {
        Ok(args.iter().map(|(_, v)| v.to_string()).collect())
    }

    #[test]
    fn null_and_number_cells_are_marshaled_to_text() {
        let input = r#"{"fields":["des","cd","dist","v_rel"],"data":[["433","2025-Jan-01 00:00",0.15,null]]}"#;
        let out = load_approaches_from_str(input, &owned).unwrap();
        assert_eq!(out[0], vec!["433", "2025-Jan-01 00:00", "0.15", ""]);
    }

    #[test]
    fn nested_cells_are_rejected() {
        let input = r#"{"fields":["des","cd","dist","v_rel"],"data":[["433",["x"],"0.15","5.2"]]}"#;
        let err = load_approaches_from_str(input, &owned).unwrap_err();
        assert!(err.to_string().contains("row 1 field 'cd' is not a scalar value"));
    }

    #[test]
    fn short_row_reports_required_position() {
        let input = r#"{"fields":["des","cd","dist","v_rel"],"data":[["433","2025-Jan-01 00:00"]]}"#;
        let err = load_approaches_from_str(input, &owned).unwrap_err();
        match err {
            ExtractError::RowTooShort { row, required, len } => {
                assert_eq!((row, required, len), (1, 3, 2));
            }
            other => panic!("expected RowTooShort, got {other:?}"),
        }
    }
}
