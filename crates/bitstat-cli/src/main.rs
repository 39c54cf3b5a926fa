use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "bitstat")]
#[command(about = "Statistical randomness tests for '0'/'1' bit sequences")]
#[command(version = bitstat_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full battery over every sequence in a JSON file
    Report {
        /// JSON file mapping generator names to bit sequences
        #[arg(long, default_value = "sequences.json")]
        file: String,
        /// Significance level a p-value must clear to pass
        #[arg(long, default_value = "0.01")]
        alpha: f64,
        /// Write the plain-text report to this path
        #[arg(long)]
        output: Option<String>,
        /// Print machine-readable JSON instead of the table
        #[arg(long)]
        json: bool,
    },
    /// Test a single sequence given on the command line
    Check {
        /// The '0'/'1' sequence to test
        sequence: String,
        /// Significance level a p-value must clear to pass
        #[arg(long, default_value = "0.01")]
        alpha: f64,
    },
    /// Time each test over the sequences in a JSON file
    Bench {
        /// JSON file mapping generator names to bit sequences
        #[arg(long, default_value = "sequences.json")]
        file: String,
        /// Timed invocations of each test
        #[arg(long, default_value = "1000")]
        iterations: u32,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            file,
            alpha,
            output,
            json,
        } => commands::report::run(&file, alpha, output.as_deref(), json),
        Commands::Check { sequence, alpha } => commands::check::run(&sequence, alpha),
        Commands::Bench { file, iterations } => commands::bench::run(&file, iterations),
    }
}
