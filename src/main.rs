use std::{path::PathBuf, process};

use clap::Parser;
use log::{error, info};
use treebench::{
    config::{ExperimentConfig, DEFAULT_OUTPUT, DEFAULT_SIZES},
    dataset::load_records,
    harness::run_experiments,
    report::{CsvReporter, Reporter},
    Result,
};

#[derive(Parser)]
#[command(name = "treebench")]
#[command(about = "Time BST and AVL insertion and lookup over sorted and shuffled records")]
#[command(version)]
struct Cli {
    /// Comma-separated dataset whose first row is a header
    input: PathBuf,

    /// Record counts to trial, in order
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SIZES.to_vec())]
    sizes: Vec<usize>,

    /// Results file that receives one CSV row per trial
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Seed for the shuffled ordering; omit for a fresh one each run
    #[arg(long)]
    seed: Option<u64>,

    /// Do not print the per-trial summary
    #[arg(long, short)]
    quiet: bool,
}

fn run(cli: Cli) -> Result<()> {
    let config = ExperimentConfig {
        sizes: cli.sizes,
        output: cli.output,
        seed: cli.seed,
    };

    let records = load_records(&cli.input, config.max_size())?;
    info!(
        "loaded {} records from {}",
        records.len(),
        cli.input.display()
    );

    let dataset = cli.input.display().to_string();
    let mut reporter = Reporter::new(CsvReporter::new(&config.output), cli.quiet);

    run_experiments(&config, &dataset, &records, &mut reporter)
}

fn main() {
    env_logger::init();

    if let Err(err) = run(Cli::parse()) {
        error!("{}", err);
        eprintln!("treebench: {}", err);
        process::exit(1);
    }
}
