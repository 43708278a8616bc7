use polarmetrics_lib::report::{compile, LocalPoliticalReport};
use polarmetrics_lib::{correlator, matcher, normalize, resolver, DistrictInfo};
use serde_json::Value;
use std::path::{Path, PathBuf};

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("CLI crate should be inside workspace")
        .to_path_buf()
}

fn load_fixture(name: &str) -> Value {
    let path = workspace_root()
        .join("polarmetrics_api/tests/fixtures")
        .join(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read fixture {}: {}", path.display(), e));
    serde_json::from_str(&text).expect("fixture is valid JSON")
}

fn load_schema() -> Value {
    let path = workspace_root().join("schema").join("report.schema.json");
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read schema {}: {}", path.display(), e));
    serde_json::from_str(&text).expect("schema is valid JSON")
}

/// Run the pure pipeline stages over the fixtures, the way the service does.
fn fixture_report() -> LocalPoliticalReport {
    let civic = normalize::civic_response(&load_fixture("civic_representatives.json"))
        .expect("civic fixture has data");
    let info = resolver::district_from_civic(&civic);
    let roster = normalize::legislators(&load_fixture("members_tx.json")).unwrap();
    let bills = normalize::bills(&load_fixture("bills.json")).unwrap();
    let votes = normalize::votes(&load_fixture("house_votes.json")).unwrap();

    let reps = matcher::match_representatives(info.state.as_deref(), info.district, &roster);
    let local_bills = correlator::correlate(&reps, &bills, 10);
    compile("110 Congress Ave, Austin, TX 78701", info, reps, local_bills, votes)
}

fn report_json(report: &LocalPoliticalReport) -> Value {
    serde_json::to_value(report).expect("report serializes")
}

// ---------------------------------------------------------------------------
// Positive validation: reports conform to the schema
// ---------------------------------------------------------------------------

#[test]
fn test_fixture_report_conforms_to_schema() {
    let schema = load_schema();
    let data = report_json(&fixture_report());

    let validator = jsonschema::draft202012::new(&schema).expect("report schema compiles");
    let result = validator.validate(&data);
    if let Err(e) = &result {
        panic!("fixture report failed validation: {e}");
    }
}

#[test]
fn test_empty_report_conforms_to_schema() {
    let schema = load_schema();
    let report = compile("nowhere at all", DistrictInfo::default(), vec![], vec![], vec![]);
    let data = report_json(&report);

    let validator = jsonschema::draft202012::new(&schema).expect("report schema compiles");
    let result = validator.validate(&data);
    if let Err(e) = &result {
        panic!("empty report failed validation: {e}");
    }
}

// ---------------------------------------------------------------------------
// Negative validation: schema rejects invalid data
// ---------------------------------------------------------------------------

#[test]
fn test_schema_rejects_missing_summary() {
    let schema = load_schema();
    let mut data = report_json(&fixture_report());

    data.as_object_mut()
        .expect("report is an object")
        .remove("summary");

    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    assert!(
        validator.validate(&data).is_err(),
        "schema should reject report missing summary"
    );
}

#[test]
fn test_schema_rejects_negative_counts() {
    let schema = load_schema();
    let mut data = report_json(&fixture_report());

    data["summary"]["totalLocalReps"] = Value::from(-1);

    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    assert!(
        validator.validate(&data).is_err(),
        "schema should reject a negative representative count"
    );
}

#[test]
fn test_schema_rejects_lowercase_state() {
    let schema = load_schema();
    let mut data = report_json(&fixture_report());

    data["location"]["state"] = Value::String("tx".to_string());

    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    assert!(
        validator.validate(&data).is_err(),
        "schema should reject a lower-case state code"
    );
}

// ---------------------------------------------------------------------------
// Edge cases
// ---------------------------------------------------------------------------

#[test]
fn test_schema_rejects_additional_properties() {
    let schema = load_schema();
    let mut data = report_json(&fixture_report());

    data["summary"]
        .as_object_mut()
        .expect("summary is an object")
        .insert("bogusField".to_string(), Value::Number(123.into()));

    let validator = jsonschema::draft202012::new(&schema).expect("schema compiles");
    assert!(
        validator.validate(&data).is_err(),
        "schema should reject additional properties"
    );
}

#[test]
fn test_summary_matches_sequences_in_json() {
    let data = report_json(&fixture_report());
    assert_eq!(
        data["summary"]["totalLocalReps"].as_u64(),
        data["representatives"]["fromCongress"].as_array().map(|a| a.len() as u64)
    );
    assert_eq!(
        data["summary"]["totalLocalBills"].as_u64(),
        data["legislation"]["localBills"].as_array().map(|a| a.len() as u64)
    );
}
