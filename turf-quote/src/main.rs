use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use turf_estimator::Estimator;
use turf_estimator::entities::{EstimateOptions, ProjectDimensions};
use turf_estimator::io::{export, to_cart_line_item};
use turf_estimator::util::EstimatorConfig;
use turf_quote::io;
use turf_quote::io::cli::Cli;
use turf_quote::io::output::QuoteOutput;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            EstimatorConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("Successfully parsed EstimatorConfig: {config:?}");

    let estimator = Estimator::new(config)?;
    let dims = ProjectDimensions::new(args.width, args.length);
    let opts = EstimateOptions {
        is_pet_turf: args.pet,
        include_infill: args.infill,
        price_per_sq_ft_cents: args.price_per_sqft_cents,
    };

    let estimate = estimator.estimate(dims, &opts)?;

    for note in &estimate.notes {
        info!("[QUOTE] {note}");
    }
    info!(
        "[QUOTE] {} roll(s), {} linear ft ({} sqft ordered for {} sqft of project), {}% waste",
        estimate.turf.rolls_needed,
        estimate.turf.linear_feet_total,
        estimate.total_cut_area_sq_ft,
        estimate.project_area_sq_ft,
        estimate.turf.waste_percentage,
    );
    if let Some(total_price_cents) = estimate.total_price_cents {
        info!(
            "[QUOTE] total price: ${:.2}",
            total_price_cents as f64 / 100.0
        );
    }

    let output = QuoteOutput {
        config,
        estimate: export(&estimate),
        cart_line_item: to_cart_line_item(&estimate, dims, "Cut #1", opts.price_per_sq_ft_cents),
    };

    match &args.output_file {
        Some(path) => io::write_json(&output, path)?,
        None => println!("{}", serde_json::to_string_pretty(&output)?),
    }

    Ok(())
}
