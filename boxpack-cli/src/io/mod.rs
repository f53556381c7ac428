use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use boxpack::entities::{Item, PackingSolution};
use boxpack::io::import::import_items;
use boxpack::util::PackConfig;
use log::{LevelFilter, debug, info, warn};
use serde::Serialize;

use crate::EPOCH;
use crate::config::BoxPackConfig;

pub mod cli;
pub mod output;

pub const PROMPT: &str = "Please enter a list of items (without spaces - between 1 and {max}): ";

pub fn read_config(path: &Path) -> Result<BoxPackConfig> {
    let file = File::open(path)
        .with_context(|| format!("could not open config file: {}", path.display()))?;
    let reader = BufReader::new(file);
    let config: BoxPackConfig =
        serde_json::from_reader(reader).context("incorrect config file format")?;
    config.validate()?;
    Ok(config)
}

pub fn write_json(output: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open solution file: {}", path.display()))?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, output)
        .with_context(|| format!("could not write solution file: {}", path.display()))?;

    info!("[MAIN] solution written to {}", path.display());
    Ok(())
}

/// Keeps asking for a line of items until a valid one is entered.
/// An invalid line is discarded as a whole.
pub fn prompt_items(
    input: &mut impl BufRead,
    output: &mut impl Write,
    config: &PackConfig,
) -> Result<Vec<Item>> {
    let prompt = PROMPT.replace("{max}", &config.max_item_size.to_string());
    loop {
        writeln!(output, "{prompt}")?;
        output.flush()?;

        let mut buf = vec![];
        if input.read_until(b'\n', &mut buf)? == 0 {
            bail!("input closed before a valid list of items was entered");
        }
        // undecodable bytes become U+FFFD, which the import rejects like any other non-digit
        let line = String::from_utf8_lossy(&buf);

        match import_items(&line, config) {
            Ok(items) => {
                debug!("[MAIN] read {} items", items.len());
                return Ok(items);
            }
            Err(e) => {
                warn!("[MAIN] discarding input line: {e}");
                writeln!(output, "ERROR - {e}")?;
            }
        }
    }
}

/// Writes the report of every solution, framed by a header naming the strategy
pub fn write_reports(solutions: &[PackingSolution], output: &mut impl Write) -> Result<()> {
    for solution in solutions {
        let header = format!("---{}", solution.strategy.label());
        writeln!(output, "{header}")?;
        writeln!(output, "{}", solution.report())?;
        writeln!(output, "{}", "-".repeat(header.len()))?;
    }
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        .level(level_filter)
        // stdout carries the reports
        .chain(std::io::stderr())
        .apply()?;
    info!("time: {}", jiff::Timestamp::now());
    Ok(())
}
