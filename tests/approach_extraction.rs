use std::sync::Mutex;

use neo_extract::factory::{ApproachFactory, FieldError};
use neo_extract::ingestion::json::{load_approaches, load_approaches_from_str};
use neo_extract::models::StandardFactory;
use neo_extract::types::ApproachArgs;
use neo_extract::{ErrorCategory, ExtractError};

/// Records the keyword arguments it receives as `(name, value)` pairs.
#[derive(Default)]
struct RecordingFactory {
    calls: Mutex<Vec<Vec<(String, String)>>>,
}

impl ApproachFactory for RecordingFactory {
    type Output = String;

    fn build(&self, kwargs: &ApproachArgs<'_>) -> Result<String, FieldError> {
        self.calls
            .lock()
            .unwrap()
            .push(kwargs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect());
        Ok(kwargs.des.to_string())
    }
}

fn kw(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[test]
fn extra_fields_are_ignored() {
    let factory = RecordingFactory::default();
    let input = r#"{"fields":["des","cd","dist","v_rel","other"],"data":[["2000433","2025-Jan-01 00:00","0.15","5.2","ignored"]]}"#;
    let out = load_approaches_from_str(input, &factory).unwrap();

    assert_eq!(out.len(), 1);
    assert_eq!(
        factory.calls.lock().unwrap()[0],
        kw(&[("des", "2000433"), ("cd", "2025-Jan-01 00:00"), ("dist", "0.15"), ("v_rel", "5.2")])
    );
}

#[test]
fn missing_field_fails_before_any_row() {
    let factory = RecordingFactory::default();
    let input = r#"{"fields":["des","cd","dist"],"data":[["2000433","2025-Jan-01 00:00","0.15"]]}"#;
    let err = load_approaches_from_str(input, &factory).unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("schema mismatch"));
    assert!(msg.contains("missing required field 'v_rel'"));
    assert!(factory.calls.lock().unwrap().is_empty());
}

#[test]
fn missing_field_fails_even_if_rows_are_malformed() {
    // Resolution happens before rows are looked at, so the short row is never reported.
    let input = r#"{"fields":["des"],"data":[[]]}"#;
    let err = load_approaches_from_str(input, &RecordingFactory::default()).unwrap_err();
    assert!(matches!(err, ExtractError::SchemaMismatch { .. }));
}

#[test]
fn field_order_does_not_change_output() {
    let a = r#"{"fields":["des","cd","dist","v_rel"],"data":[
        ["433","1900-Dec-27 01:30","0.0314","5.83"],
        ["99942","2029-Apr-13 21:46","0.000254","7.42"]]}"#;
    let b = r#"{"fields":["v_rel","dist","des","cd"],"data":[
        ["5.83","0.0314","433","1900-Dec-27 01:30"],
        ["7.42","0.000254","99942","2029-Apr-13 21:46"]]}"#;

    let out_a = load_approaches_from_str(a, &StandardFactory).unwrap();
    let out_b = load_approaches_from_str(b, &StandardFactory).unwrap();
    assert_eq!(out_a, out_b);
}

#[test]
fn fixture_rows_are_loaded_in_order() {
    let out = load_approaches("tests/fixtures/cad.json", &StandardFactory).unwrap();

    let designations: Vec<&str> = out.iter().map(|c| c.designation.as_str()).collect();
    assert_eq!(designations, vec!["170903", "2005 OE3", "2000433"]);
    assert_eq!(out[0].time_str(), "1900-01-01 00:11");
    assert_eq!(out[2].distance, 0.0314);
    assert_eq!(out[2].velocity, 5.83);
}

#[test]
fn empty_data_yields_empty_sequence() {
    let input = r#"{"fields":["des","cd","dist","v_rel"],"data":[]}"#;
    let out = load_approaches_from_str(input, &RecordingFactory::default()).unwrap();
    assert!(out.is_empty());
}

#[test]
fn duplicate_field_name_uses_first_occurrence() {
    let factory = RecordingFactory::default();
    let input = r#"{"fields":["des","cd","dist","v_rel","des"],"data":[["first","2025-Jan-01 00:00","0.1","1.0","second"]]}"#;
    let out = load_approaches_from_str(input, &factory).unwrap();
    assert_eq!(out[0], "first");
}

#[test]
fn short_row_is_an_out_of_range_error() {
    let input = r#"{"fields":["des","cd","dist","v_rel"],"data":[
        ["433","1900-Dec-27 01:30","0.0314","5.83"],
        ["99942","2029-Apr-13 21:46"]]}"#;
    let err = load_approaches_from_str(input, &RecordingFactory::default()).unwrap_err();

    assert!(matches!(err, ExtractError::RowTooShort { row: 2, required: 3, len: 2 }));
    assert_eq!(err.category(), ErrorCategory::Structural);
}

#[test]
fn wrong_top_level_shape_is_a_json_error() {
    for input in [r#"{"fields":["des","cd","dist","v_rel"]}"#, r#"{"data":[]}"#, "[]", "{not json"] {
        let err = load_approaches_from_str(input, &RecordingFactory::default()).unwrap_err();
        assert!(matches!(err, ExtractError::Json(_)), "input {input}: {err:?}");
        assert_eq!(err.category(), ErrorCategory::Structural);
    }
}

#[test]
fn factory_rejection_carries_row_number() {
    let input = r#"{"fields":["des","cd","dist","v_rel"],"data":[
        ["433","1900-Dec-27 01:30","0.0314","5.83"],
        ["99942","13 April 2029","0.000254","7.42"]]}"#;
    let err = load_approaches_from_str(input, &StandardFactory).unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("row 2 column 'cd'"));
    assert_eq!(err.category(), ErrorCategory::Coercion);
}

#[test]
fn plain_functions_are_factories() {
    fn dist_only(args: &ApproachArgs<'_>) -> Result<String, FieldError> {
        Ok(args.get("dist").unwrap_or_default().to_string())
    }

    let input = r#"{"fields":["des","cd","dist","v_rel"],"data":[["433","1900-Dec-27 01:30","0.0314","5.83"]]}"#;
    let out = load_approaches_from_str(input, &dist_only).unwrap();
    assert_eq!(out[0], "0.0314");
}

#[test]
fn missing_file_is_a_resource_error() {
    let err = load_approaches("tests/fixtures/does_not_exist.json", &StandardFactory).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Resource);
}
