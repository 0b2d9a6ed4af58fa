use clap::Parser;
use clap_num::si_number;
use std::path::PathBuf;

use colortable::logger::{StderrLogger, level_from_verbosity};
use colortable::*;

mod error;
use error::CliError;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Configuration file (.json, .ron or .yaml).
    ///
    /// Options given on the command line take precedence over the file.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Number of intervals per table (accepts SI postfixes); tables hold one more row.
    #[arg(short = 'n', long, value_parser = si_number::<usize>)]
    samples: Option<usize>,
    /// Directory the tables are written to.
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
    /// Only generate these palettes (repeatable).
    #[arg(short, long, value_enum)]
    palette: Vec<PaletteName>,
    /// Number of parallel threads.
    #[arg(short, long)]
    threads: Option<usize>,
    /// Log more detail (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Suppress log output.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn gen_config(&self) -> Result<GenConfig, CliError> {
        let mut cfg = match &self.config {
            Some(path) => GenConfig::from_file(path)?,
            None => GenConfig::default(),
        };

        if let Some(samples) = self.samples {
            cfg.samples = samples;
        }
        if let Some(dir) = &self.output_dir {
            cfg.output_dir = dir.clone();
        }
        if !self.palette.is_empty() {
            cfg.palettes = self.palette.clone();
        }
        if let Some(threads) = self.threads {
            cfg.threads = threads;
        }

        cfg.validate()?;
        Ok(cfg)
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let cfg = cli.gen_config()?;

    std::fs::create_dir_all(&cfg.output_dir)
        .map_err(|e| CliError::OutputDirError(cfg.output_dir.display().to_string(), e))?;

    let before_run = std::time::Instant::now();

    let outcomes = generate(&cfg);

    let dur = before_run.elapsed();
    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();

    log::info!(
        "Completed! Generated {} of {} tables in {}.{:03} seconds",
        outcomes.len() - failed,
        outcomes.len(),
        dur.as_secs(),
        dur.subsec_millis()
    );

    if failed > 0 {
        return Err(CliError::TablesFailed { failed, total: outcomes.len() });
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = StderrLogger::init(level_from_verbosity(cli.verbose, cli.quiet)) {
        eprintln!("Error: {}", e);
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
