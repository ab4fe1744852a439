//! Fills a `ChainedHashMap` with random keys and charts how the entries spread over its
//! buckets.

use std::path::PathBuf;

use chainmap::{BUCKET_COUNT, ChainedHashMap, logger};
use clap::Parser;
use log::{info, warn};
use plotters::prelude::*;
use rand::{Rng, distr::Alphanumeric};

/// Font used for captions and axis labels
const FONT_FAMILY: &str = "sans-serif";

/// Charts how random keys spread over the buckets of a `ChainedHashMap`
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of random keys to insert
    #[arg(short, long, default_value_t = 1000)]
    keys: usize,

    /// Length of every generated key
    #[arg(short = 'l', long, default_value_t = 8)]
    key_length: usize,

    /// Where to write the PNG chart
    #[arg(short, long, default_value = "bucket_distribution.png")]
    output: PathBuf,
}

/// Generates a random alphanumeric key
fn random_key(rng: &mut impl Rng, length: usize) -> String {
    rng.sample_iter(Alphanumeric).take(length).map(char::from).collect()
}

/// Renders one bar per bucket, sized by its chain length
fn draw_chart(lengths: &[usize; BUCKET_COUNT], args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(&args.output, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let tallest = lengths.iter().copied().max().unwrap_or(0);

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Chain Length per Bucket ({} keys)", args.keys),
            (FONT_FAMILY, 35),
        )
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d((0..BUCKET_COUNT).into_segmented(), 0..tallest.saturating_add(1))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Bucket")
        .y_desc("Entries in chain")
        .axis_desc_style((FONT_FAMILY, 16))
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(RGBColor(50, 90, 220).filled())
            .margin(10)
            .data(lengths.iter().copied().enumerate()),
    )?;

    root.present()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::initialize_logger();
    let args = Args::parse();

    if args.key_length == 0 && args.keys > 1 {
        warn!("zero-length keys all collapse onto the empty key");
    }

    let mut rng = rand::rng();
    let mut map = ChainedHashMap::new();
    for _ in 0..args.keys {
        let key = random_key(&mut rng, args.key_length);
        map.insert(&key, rng.random_range(0..i32::MAX));
    }

    let lengths = map.chain_lengths();
    info!("inserted {} distinct keys out of {} generated", map.len(), args.keys);
    for (bucket, length) in lengths.iter().enumerate() {
        println!("bucket {bucket}: {length} entries");
    }

    draw_chart(&lengths, &args)?;
    println!("Generated bucket distribution chart: {}", args.output.display());

    Ok(())
}
