mod cli;

use clap::Parser;
use log::{error, LevelFilter};
use regionfilter::{Client, Result};
use std::process::ExitCode;

/*-------------------------------------------------------------------------------------------------
  Main CLI Function
-------------------------------------------------------------------------------------------------*/

fn main() -> ExitCode {
    let args = cli::Args::parse();

    let log_level = args.verbose.log_level_filter();
    if let Err(error) = stderrlog::new()
        .module(module_path!())
        .quiet(log_level == LevelFilter::Off)
        .verbosity((log_level as usize).saturating_sub(1))
        .init()
    {
        eprintln!("Failed to initialize logging: {error}");
        return ExitCode::FAILURE;
    }

    match filter_region(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn filter_region(args: &cli::Args) -> Result<()> {
    let client = Client::new();
    let report = cli::run(args, &client)?;

    cli::log::match_results(&report);
    cli::output::matches(&report.matches);

    if let Some(csv_file) = &args.csv_file {
        cli::csv::save(&report.matches, csv_file)?;
    }

    if args.summary {
        cli::output::summary(&report);
    }

    Ok(())
}
