//! Geocode a street address.
//!
//! Run with: OUTREACH_MAPS_KEY=... cargo run --example geocode -- 1600 "Amphitheatre Parkway" "Mountain View" CA

use anyhow::{bail, Context, Result};
use maproutes::{Operation, RoutesBuilder};
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

    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() != 4 {
        bail!("Usage: cargo run --example geocode -- <number> <street> <city> <state>");
    }

    let street_number: u32 = args[0]
        .parse()
        .with_context(|| format!("Invalid street number: {}", args[0]))?;

    let location = RoutesBuilder::from_env()
        .context("OUTREACH_MAPS_KEY environment variable not set")?
        .street_number(street_number)
        .street_name(args[1].as_str())
        .city(args[2].as_str())
        .state_or_province(args[3].as_str())
        .operation(Operation::Geocode)
        .build()
        .context("Geocode request failed")?
        .geocode()?;

    println!("{}", serde_json::to_string(&location)?);

    Ok(())
}
