mod args;
mod logger;

use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use log::info;
use math_random_core_rs::{MathRandom, RandomConfig, RandomError};
use thiserror::Error;

use crate::args::Opt;

#[derive(Debug, Error)]
enum CliError {
    #[error("Could not read config {path}: {source}")]
    ConfigRead {
        path: String,
        source: std::io::Error,
    },

    #[error(transparent)]
    Random(#[from] RandomError),

    #[error("Could not write output: {0}")]
    Output(#[from] io::Error),

    #[error("Logger setup failed: {0}")]
    Logger(String),
}

fn load_config(opt: &Opt) -> Result<RandomConfig, CliError> {
    let mut config = match &opt.config {
        Some(path) => {
            let json = fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
                path: path.clone(),
                source,
            })?;
            RandomConfig::from_json(&json)?
        }
        None => RandomConfig::default(),
    };
    // --seed wins over the config file
    if opt.seed.is_some() {
        config.seed = opt.seed;
    }
    Ok(config)
}

fn draw<W: Write>(opt: &Opt, out: &mut W) -> Result<(), CliError> {
    let config = load_config(opt)?;
    info!("config: {:?}", config);
    let mut math = MathRandom::from_config(&config);

    for _ in 0..opt.count {
        writeln!(out, "{}", math.random(&opt.args)?)?;
    }

    if opt.dump_state {
        match math.snapshot() {
            Some(snapshot) => writeln!(out, "{}", snapshot.to_json()?)?,
            None => writeln!(out, "null")?,
        }
    }
    Ok(())
}

fn run(opt: &Opt) -> Result<(), CliError> {
    logger::init(opt.verbose).map_err(|e| CliError::Logger(e.to_string()))?;

    let stdout = io::stdout();
    draw(opt, &mut stdout.lock())
}

fn main() -> ExitCode {
    let opt = Opt::parse();
    match run(&opt) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
