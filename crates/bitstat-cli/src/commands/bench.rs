//! The `bench` subcommand: wall-clock timing of each test.

use std::process;
use std::time::Instant;

use bitstat_core::{
    LongestRunConfig, frequency_bitwise_test, longest_ones_sequence_test, run_battery,
    similar_sequences_test,
};

use super::load_sequences;

pub fn run(file: &str, iterations: u32) {
    let sequences = load_sequences(file);
    if sequences.is_empty() {
        eprintln!("No sequences loaded from {file}");
        process::exit(1);
    }
    let iterations = iterations.max(1);
    let config = LongestRunConfig::default();

    println!("Timing {iterations} invocations of each test");
    println!("{}", "=".repeat(60));

    for (name, sequence) in &sequences {
        // One untimed battery pass surfaces errors before the clock starts.
        let report = match run_battery(sequence, &config) {
            Ok(report) => report,
            Err(err) => {
                println!();
                println!("{name}: skipped ({err})");
                continue;
            }
        };

        let frequency_us = time_calls(iterations, || {
            let _ = frequency_bitwise_test(sequence);
        });
        let runs_us = time_calls(iterations, || {
            let _ = similar_sequences_test(sequence);
        });
        let longest_us = time_calls(iterations, || {
            let _ = longest_ones_sequence_test(sequence, &config);
        });

        println!();
        println!(
            "{name}: {} bits, min p = {:.6}",
            report.bits,
            report.min_p()
        );
        println!("  {:<28} {:>8.2}µs", "frequency_bitwise_test", frequency_us);
        println!("  {:<28} {:>8.2}µs", "similar_sequences_test", runs_us);
        println!("  {:<28} {:>8.2}µs", "longest_ones_sequence_test", longest_us);
    }
}

/// Average wall-clock microseconds per call.
fn time_calls<F: FnMut()>(iterations: u32, mut call: F) -> f64 {
    let start = Instant::now();
    for _ in 0..iterations {
        call();
    }
    start.elapsed().as_secs_f64() / f64::from(iterations) * 1e6
}
