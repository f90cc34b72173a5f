use std::fs::File;
use std::io;
use std::process::ExitCode;

use clap::Parser;
use scantime::cli::Cli;
use scantime::{ScanError, Scanner};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp_secs()
        .try_init();
}

fn run(cli: &Cli) -> Result<(), ScanError> {
    let scanner = Scanner::new(cli.scan_config())?;
    let report = scanner.scan(&cli.root)?;

    if report.is_empty() {
        log::warn!(
            "No series found under {}. Check the folder structure or DICOM file validity.",
            cli.root.display()
        );
    }

    match &cli.output {
        Some(path) => {
            report.write_csv(File::create(path)?)?;
            log::info!("Wrote {} rows to {}", report.rows.len(), path.display());
        }
        None => report.write_csv(io::stdout().lock())?,
    }

    eprintln!("{}", report.stats);
    Ok(())
}
