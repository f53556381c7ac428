use std::path::PathBuf;

use boxpack::strategy::StrategyKind;
use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Line of digits, one item per digit. If neither this nor --generate is given, the line is read from stdin
    #[arg(short, long, value_name = "DIGITS", conflicts_with = "generate")]
    pub items: Option<String>,
    /// Pack this many randomly generated items instead
    #[arg(short, long, value_name = "N")]
    pub generate: Option<usize>,
    /// Strategies to run, overrides the ones in the config file
    #[arg(short = 's', long, value_enum)]
    pub strategy: Vec<StrategyArg>,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Write all solutions as JSON to this file
    #[arg(short = 'o', long, value_name = "FILE")]
    pub solution_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyArg {
    DescendingFit,
    SinglePassFit,
    SizeClassGreedy,
}

impl From<StrategyArg> for StrategyKind {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::DescendingFit => StrategyKind::DescendingFit,
            StrategyArg::SinglePassFit => StrategyKind::SinglePassFit,
            StrategyArg::SizeClassGreedy => StrategyKind::SizeClassGreedy,
        }
    }
}
