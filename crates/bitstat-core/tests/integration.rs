//! Integration tests for bitstat-core.
//!
//! Exercises the public API end to end: battery runs over known sequences,
//! report serialization, determinism, and the error surface callers are
//! expected to match on.

use bitstat_core::{
    LongestRunConfig, TestError, frequency_bitwise_test, longest_ones_sequence_test, run_battery,
    similar_sequences_test,
};

/// 130-bit reference sequence with independently computed p-values.
const REFERENCE_SEQUENCE: &str = "1100100100001111110110101010001000100001011010001100001000110100110001001100011001000101110111000000001101001101100101000101111101";

#[test]
fn battery_over_reference_sequence() {
    let report = run_battery(REFERENCE_SEQUENCE, &LongestRunConfig::default())
        .expect("reference sequence should be testable");

    assert_eq!(report.bits, 130);
    assert!(
        (report.frequency_p - 0.21949155770198786).abs() < 1e-12,
        "frequency_p = {}",
        report.frequency_p
    );
    assert!(
        (report.runs_p - 0.75560693706747006).abs() < 1e-12,
        "runs_p = {}",
        report.runs_p
    );
    assert!(
        (report.longest_run_p - 0.74353904215056366).abs() < 1e-10,
        "longest_run_p = {}",
        report.longest_run_p
    );
    assert!(report.passes(0.01));
}

#[test]
fn individual_tests_agree_with_battery() {
    let config = LongestRunConfig::default();
    let report = run_battery(REFERENCE_SEQUENCE, &config).expect("battery should run");

    let frequency = frequency_bitwise_test(REFERENCE_SEQUENCE).expect("frequency should run");
    let runs = similar_sequences_test(REFERENCE_SEQUENCE).expect("runs should run");
    let longest =
        longest_ones_sequence_test(REFERENCE_SEQUENCE, &config).expect("longest should run");

    assert_eq!(report.frequency_p.to_bits(), frequency.to_bits());
    assert_eq!(report.runs_p.to_bits(), runs.to_bits());
    assert_eq!(report.longest_run_p.to_bits(), longest.to_bits());
}

#[test]
fn report_serializes_to_json() {
    let report = run_battery(REFERENCE_SEQUENCE, &LongestRunConfig::default())
        .expect("battery should run");

    let json = serde_json::to_value(&report).expect("report should serialize");
    assert_eq!(json["bits"], 130);
    for field in ["frequency_p", "runs_p", "longest_run_p"] {
        let p = json[field].as_f64().unwrap_or(-1.0);
        assert!((0.0..=1.0).contains(&p), "{field} = {p}");
    }
}

#[test]
fn repeated_runs_are_bit_identical() {
    let config = LongestRunConfig::default();
    let first = run_battery(REFERENCE_SEQUENCE, &config).expect("battery should run");
    let second = run_battery(REFERENCE_SEQUENCE, &config).expect("battery should run");

    assert_eq!(first.frequency_p.to_bits(), second.frequency_p.to_bits());
    assert_eq!(first.runs_p.to_bits(), second.runs_p.to_bits());
    assert_eq!(first.longest_run_p.to_bits(), second.longest_run_p.to_bits());
}

#[test]
fn errors_name_the_failing_test_and_value() {
    let err = run_battery("", &LongestRunConfig::default()).unwrap_err();
    let msg = err.to_string();
    assert!(
        msg.contains("frequency_bitwise_test"),
        "message should name the test: {msg}"
    );

    let err = longest_ones_sequence_test("10101", &LongestRunConfig::default()).unwrap_err();
    let msg = err.to_string();
    assert!(
        msg.contains("longest_ones_sequence_test") && msg.contains("need at least 8"),
        "message should carry the diagnostic: {msg}"
    );

    let err = frequency_bitwise_test("01a1").unwrap_err();
    assert_eq!(
        err,
        TestError::InvalidSymbol {
            test: "frequency_bitwise_test",
            symbol: 'a',
            position: 2,
        }
    );
}

#[test]
fn config_constructor_enforces_invariants() {
    assert!(LongestRunConfig::new(8, [0.2148, 0.3672, 0.2305, 0.1875]).is_ok());
    assert!(LongestRunConfig::new(0, [0.25, 0.25, 0.25, 0.25]).is_err());
    assert!(LongestRunConfig::new(8, [0.7, 0.1, 0.1, 0.2]).is_err());
    assert!(LongestRunConfig::new(8, [-0.1, 0.5, 0.4, 0.2]).is_err());
}

#[test]
fn battery_rejects_sequences_shorter_than_one_block() {
    // Frequency and runs would both accept 7 bits; the longest-run test is
    // the one that rejects them.
    let err = run_battery("1010101", &LongestRunConfig::default()).unwrap_err();
    assert!(
        matches!(
            err,
            TestError::SequenceTooShort {
                test: "longest_ones_sequence_test",
                length: 7,
                min: 8,
            }
        ),
        "got {err:?}"
    );
}
