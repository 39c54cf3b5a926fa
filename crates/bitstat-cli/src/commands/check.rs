//! The `check` subcommand: battery over one command-line sequence.

use std::process;

use bitstat_core::{LongestRunConfig, run_battery};

pub fn run(sequence: &str, alpha: f64) {
    match run_battery(sequence, &LongestRunConfig::default()) {
        Ok(report) => {
            println!("bits:        {}", report.bits);
            println!("frequency:   {:.6}", report.frequency_p);
            println!("runs:        {:.6}", report.runs_p);
            println!("longest run: {:.6}", report.longest_run_p);
            println!();
            if report.passes(alpha) {
                println!("✓ consistent with randomness at alpha = {alpha}");
            } else {
                println!("✗ rejected at alpha = {alpha}");
                process::exit(1);
            }
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}
