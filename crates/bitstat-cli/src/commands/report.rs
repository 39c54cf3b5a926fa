//! The `report` subcommand: full battery over every loaded sequence.

use std::collections::BTreeMap;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use bitstat_core::{LongestRunConfig, SequenceReport, TestError, run_battery};
use serde_json::json;

use super::load_sequences;

pub fn run(file: &str, alpha: f64, output: Option<&str>, json_output: bool) {
    let sequences = load_sequences(file);
    if sequences.is_empty() {
        eprintln!("No sequences loaded from {file}");
        process::exit(1);
    }

    println!("🔬 Testing {} sequence(s) from {file}...", sequences.len());
    println!();

    let config = LongestRunConfig::default();
    let mut outcomes: BTreeMap<String, Result<SequenceReport, TestError>> = BTreeMap::new();
    for (name, sequence) in &sequences {
        let outcome = run_battery(sequence, &config);
        match &outcome {
            Ok(report) => {
                let mark = if report.passes(alpha) { "✓" } else { "✗" };
                println!(
                    "  {mark} {name}: {} bits, min p = {:.6}",
                    report.bits,
                    report.min_p()
                );
            }
            Err(err) => println!("  ✗ {name}: {err}"),
        }
        outcomes.insert(name.clone(), outcome);
    }
    println!();

    let text = build_report(&outcomes, alpha);
    if json_output {
        println!("{:#}", to_json(&outcomes));
    } else {
        println!("{text}");
    }

    if let Some(path) = output {
        if let Err(err) = std::fs::write(path, &text) {
            eprintln!("Failed to write {path}: {err}");
            process::exit(1);
        }
        println!("📄 Report saved to: {path}");
    }

    let all_passed = outcomes
        .values()
        .all(|outcome| matches!(outcome, Ok(report) if report.passes(alpha)));
    if !all_passed {
        process::exit(1);
    }
}

/// Render results as a fixed-width text table.
fn build_report(
    outcomes: &BTreeMap<String, Result<SequenceReport, TestError>>,
    alpha: f64,
) -> String {
    let mut out = String::new();
    out.push_str("bitstat battery report\n");
    out.push_str(&format!("generated: {} (unix)\n", unix_now()));
    out.push_str(&format!("significance level: {alpha}\n\n"));
    out.push_str(&format!(
        "{:<20} {:>8} {:>12} {:>12} {:>12}  {}\n",
        "sequence", "bits", "frequency", "runs", "longest run", "verdict"
    ));
    out.push_str(&"-".repeat(78));
    out.push('\n');

    for (name, outcome) in outcomes {
        match outcome {
            Ok(report) => {
                let verdict = if report.passes(alpha) { "pass" } else { "FAIL" };
                out.push_str(&format!(
                    "{:<20} {:>8} {:>12.6} {:>12.6} {:>12.6}  {}\n",
                    name,
                    report.bits,
                    report.frequency_p,
                    report.runs_p,
                    report.longest_run_p,
                    verdict
                ));
            }
            Err(err) => {
                out.push_str(&format!("{:<20} {:>8}  error: {}\n", name, "-", err));
            }
        }
    }
    out
}

/// Render results as a JSON object keyed by sequence name.
fn to_json(outcomes: &BTreeMap<String, Result<SequenceReport, TestError>>) -> serde_json::Value {
    let mut map = serde_json::Map::new();
    for (name, outcome) in outcomes {
        let value = match outcome {
            Ok(report) => json!({
                "bits": report.bits,
                "frequency_p": report.frequency_p,
                "runs_p": report.runs_p,
                "longest_run_p": report.longest_run_p,
            }),
            Err(err) => json!({ "error": err.to_string() }),
        };
        map.insert(name.clone(), value);
    }
    serde_json::Value::Object(map)
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0)
}
