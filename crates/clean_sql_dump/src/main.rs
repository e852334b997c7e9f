// crates/clean_sql_dump/src/main.rs

use anyhow::{Context, Result};
use clap::{Arg, Command};
use std::path::PathBuf;
use std::time::Instant;

use clean_sql_dump::services;
use clean_sql_dump::{run, CleanConfig, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};

fn main() -> Result<()> {
    let matches = Command::new("clean_sql_dump")
        .version("0.1.0")
        .about("Cleans a SQLite dictionary dump: drops unistr( lines and the transaction wrapper")
        .arg(
            Arg::new("input")
                .long("input")
                .value_name("FILE")
                .num_args(1)
                .default_value(DEFAULT_INPUT_FILE)
                .help("Dump to clean; removed after a successful run"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .value_name("FILE")
                .num_args(1)
                .default_value(DEFAULT_OUTPUT_FILE)
                .help("Where the cleaned dump is written"),
        )
        .get_matches();

    let config = CleanConfig {
        input: PathBuf::from(matches.get_one::<String>("input").unwrap()),
        output: PathBuf::from(matches.get_one::<String>("output").unwrap()),
    };

    let started = Instant::now();
    run(&config)?;
    println!("Finished in {:.2?}", started.elapsed());

    // Success and the recovered missing-input path both pause; a hard error
    // has already returned above without pausing.
    services::exit_pause()
        .wait()
        .context("failed to wait for the exit keypress")?;

    Ok(())
}
