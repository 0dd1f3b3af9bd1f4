use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use ffd::config::FFDConfig;
use ffd::io;
use ffd::io::cli::Cli;
use ffd::io::output::FFDOutput;
use ffd::opt::solve_instance;
use log::{info, warn};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config: FFDConfig = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            FFDConfig::default()
        }
        Some(config_file) => {
            let file = File::open(&config_file)
                .with_context(|| format!("could not open config file: {}", config_file.display()))?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("Successfully parsed FFDConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?
        .to_string();

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let ext_instance = io::read_instance(args.input_file.as_path())?;
    let instance = stockcut::io::import(&ext_instance)?;

    let start = Instant::now();
    let results = solve_instance(&instance, &config)?;
    let run_time_ms = start.elapsed().as_millis() as u64;

    let output = FFDOutput {
        solution: stockcut::io::export(&instance, &results),
        instance: ext_instance,
        config,
        run_time_ms,
    };

    let solution_path = args
        .solution_folder
        .join(format!("sol_{input_file_stem}.json"));
    io::write_json(&output, &solution_path)?;

    Ok(())
}
