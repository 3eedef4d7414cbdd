use anyhow::Result;
use clap::Parser as ClapParser;
use loadplan::config::LoadPlanConfig;
use loadplan::io::cli::Cli;
use loadplan::io::output::LoadPlanOutput;
use loadplan::{io, report};
use log::{info, warn};
use stage_dp::solve;
use std::time::Instant;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            LoadPlanConfig::default()
        }
        Some(config_file) => io::read_config(&config_file)?,
    };

    info!("Successfully parsed LoadPlanConfig: {config:?}");

    let ext_instance = io::read_instance(&args.input_file)?;
    let instance = stage_dp::io::import(&ext_instance)?;
    info!(
        "[MAIN] loaded instance {:?} with {} item types",
        ext_instance.name.as_deref().unwrap_or("-"),
        instance.items().len()
    );

    let start = Instant::now();
    let result = solve(&instance, config.solver);
    info!(
        "[MAIN] solved in {:.3}ms",
        start.elapsed().as_secs_f64() * 1000.0
    );
    report::log_result(&result);

    let output = LoadPlanOutput {
        instance: ext_instance,
        result: stage_dp::io::export(&result),
        config,
    };
    io::write_json(&output, args.output_file.as_deref(), config.pretty)
}
