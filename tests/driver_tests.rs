//! Integration tests for the driver-side collaborators: file loading,
//! verification, and report rendering.

use std::io::Write;

use objective_reduction::prelude::*;

const SCENARIO: &str = "\
a 1 0 0
b 0 1 0
c 0 0 1
d 1 1 1
";

#[test]
fn test_end_to_end_from_text_to_report() {
    let table = read_table(SCENARIO.as_bytes()).unwrap();
    assert_eq!(table.n_individuals(), 4);
    assert_eq!(table.n_objectives(), 3);

    let outcome = search(&table, 2, ErrorVariant::Maximum).unwrap();
    let verification = verify(&outcome, &table).unwrap();
    assert!(!verification.any_drift());

    let report = render(&outcome, &verification, ErrorVariant::Maximum, 3);
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(
        lines[0],
        "Greedy algorithm for finding the best aggregation with 2 objectives"
    );
    assert_eq!(lines[1], " where the overall maximum delta error is optimized.");
    assert_eq!(lines[3], "Gives an overall error of delta = 1");

    // One weight row per aggregated objective, each followed by its label.
    assert_eq!(lines[7], "1 0 1 ");
    assert_eq!(lines[8], " ...aggregated objective 0");
    assert_eq!(lines[9], "0 1 0 ");
    assert_eq!(lines[10], " ...aggregated objective 1");
    assert_eq!(
        lines[11],
        "Elapsed time during computation: 3 milliseconds"
    );
}

#[test]
fn test_load_table_from_file() {
    let path = std::env::temp_dir().join("objective-reduction-loader-test.txt");
    {
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(SCENARIO.as_bytes()).unwrap();
    }

    let table = load_table(&path).unwrap();
    assert_eq!(table.n_individuals(), 4);
    assert_eq!(table.individual(3).id, "d");

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_load_table_missing_file_is_io_error() {
    let err = load_table("definitely-not-here.txt").unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_average_variant_report_wording() {
    let table = read_table(SCENARIO.as_bytes()).unwrap();
    let outcome = search(&table, 2, ErrorVariant::Average).unwrap();
    let verification = verify(&outcome, &table).unwrap();
    let report = render(&outcome, &verification, ErrorVariant::Average, 0);

    assert!(report.contains(" where the delta error averaged over all solution pairs is optimized."));
}

#[test]
fn test_drifted_error_is_starred_in_report() {
    let table = read_table(SCENARIO.as_bytes()).unwrap();
    let mut outcome = search(&table, 2, ErrorVariant::Maximum).unwrap();

    // Simulate bookkeeping drift in the carried value.
    outcome.error.max += 0.5;

    let verification = verify(&outcome, &table).unwrap();
    assert!(verification.max_drifted);

    let report = render(&outcome, &verification, ErrorVariant::Maximum, 0);
    assert!(report.contains("Gives an overall error of delta = 1 *"));
    assert!(report.contains(
        "* error has been incorrectly carried along during algorithm and has been recomputed in the end"
    ));
}

#[cfg(feature = "serde")]
#[test]
fn test_json_export_round_trips_the_weights() {
    let table = read_table(SCENARIO.as_bytes()).unwrap();
    let outcome = search(&table, 2, ErrorVariant::Maximum).unwrap();
    let verification = verify(&outcome, &table).unwrap();

    let json = objective_reduction::report::to_json(&outcome, &verification, ErrorVariant::Maximum)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["variant"], "Maximum");
    assert_eq!(value["max_drifted"], false);
    assert_eq!(value["recomputed_error"]["max"], 1.0);
}
