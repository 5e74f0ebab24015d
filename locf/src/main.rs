use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use locf::config::SimConfig;
use locf::io;
use locf::io::cli::Cli;
use locf::simulator::Simulator;
use log::{info, warn};
use rand::SeedableRng;
use rand::prelude::SmallRng;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            SimConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("Successfully parsed SimConfig: {config:?}");

    let rng = match config.prng_seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let report_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&args.report_file)
        .with_context(|| format!("could not open report file: {:?}", args.report_file))?;

    println!("Experiments are started.");

    let summary = {
        let mut sink = BufWriter::new(report_file);
        let mut simulator = Simulator::new(config, rng);
        simulator.run_experiments(args.experiments, args.items, &mut sink)?
    };

    info!("report appended to {:?}", args.report_file);

    println!("Minimum container count: {}", summary.min_containers);
    println!("Maximum container count: {}", summary.max_containers);
    println!("Experiments are finished.");

    Ok(())
}
