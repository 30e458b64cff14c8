use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Project width in feet
    #[arg(short = 'W', long, value_name = "FEET")]
    pub width: f64,
    /// Project length in feet
    #[arg(short = 'L', long, value_name = "FEET")]
    pub length: f64,
    /// Quote pet turf (heavier infill application rate)
    #[arg(long)]
    pub pet: bool,
    /// Include an infill plan in the quote
    #[arg(long)]
    pub infill: bool,
    /// Product price per square foot, in cents
    #[arg(short, long, value_name = "CENTS")]
    pub price_per_sqft_cents: Option<u64>,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Write the quote JSON here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
