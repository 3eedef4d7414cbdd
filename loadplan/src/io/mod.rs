use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::{LevelFilter, info};
use serde::Serialize;
use serde::de::DeserializeOwned;
use stage_dp::io::ext_repr::ExtLoadInstance;

use crate::EPOCH;
use crate::config::LoadPlanConfig;

pub mod cli;
pub mod output;

pub fn read_instance(path: &Path) -> Result<ExtLoadInstance> {
    read_json(path).with_context(|| format!("could not read instance file: {}", path.display()))
}

pub fn read_config(path: &Path) -> Result<LoadPlanConfig> {
    read_json(path).with_context(|| format!("incorrect config file format: {}", path.display()))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

/// Writes `value` as JSON to `path`, or to stdout if no path is given.
pub fn write_json<T: Serialize>(value: &T, path: Option<&Path>, pretty: bool) -> Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("could not open output file: {}", path.display()))?;
            write_json_to(value, BufWriter::new(file), pretty)?;
            info!("result written to {:?}", path.canonicalize()?);
        }
        None => write_json_to(value, std::io::stdout().lock(), pretty)?,
    }
    Ok(())
}

fn write_json_to<T: Serialize, W: Write>(value: &T, mut writer: W, pretty: bool) -> Result<()> {
    match pretty {
        true => serde_json::to_writer_pretty(&mut writer, value)?,
        false => serde_json::to_writer(&mut writer, value)?,
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}]",
                record.level(),
                hours,
                min,
                sec,
            );

            out.finish(format_args!("{prefix:<19}{message}"))
        })
        // Add blanket level filter -
        .level(level_filter)
        // stdout is reserved for the result
        .chain(std::io::stderr())
        .apply()?;
    info!("time: {}", jiff::Timestamp::now());
    Ok(())
}
