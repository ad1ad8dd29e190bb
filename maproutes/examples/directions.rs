//! Print turn-by-turn directions between two places.
//!
//! Run with: OUTREACH_MAPS_KEY=... cargo run --example directions -- Sudbury Ottawa [mode]

use anyhow::{Context, Result};
use maproutes::{Mode, Operation, Region, RoutesBuilder};
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "maproutes=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = env::args().skip(1);
    let (origin, destination) = match (args.next(), args.next()) {
        (Some(origin), Some(destination)) => (origin, destination),
        _ => {
            eprintln!("Usage: cargo run --example directions -- <origin> <destination> [mode]");
            std::process::exit(1);
        }
    };

    let mut builder = RoutesBuilder::from_env()
        .context("OUTREACH_MAPS_KEY environment variable not set")?
        .origin(origin.as_str())
        .destination(destination.as_str())
        .region(Region::En)
        .operation(Operation::Directions);

    if let Some(mode) = args.next() {
        builder = builder.mode(mode.parse::<Mode>()?);
    }

    let steps = builder
        .build()
        .context("Directions request failed")?
        .directions()?;

    println!("{} -> {}", origin, destination);
    println!("{:-<50}", "");
    for (i, step) in steps.iter().enumerate() {
        println!("{:>3}. {}", i + 1, step);
    }

    Ok(())
}
