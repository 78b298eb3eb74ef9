//! vermak: command-line previews for vermak-core
//!
//! This binary runs captured provider payloads through the same controller
//! the browser uses, and prints what the page would show.
//!
//! Usage examples
//! --------------
//!
//! - List country profiles
//!   $ vermak profiles
//!   $ vermak --config my-config.json profiles
//!
//! - Show markers and rows for a saved nearby-search response
//!   $ vermak results nearby.json
//!
//! - Show the info panel for a saved place-details response
//!   $ vermak details details.json
//!
//! Set `RUST_LOG=debug` to see the controller's events.
mod args;
mod preview;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use vermak_core::prelude::*;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    let config = match &args.config {
        Some(path) => ControllerConfig::load_from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ControllerConfig::default(),
    };
    tracing::debug!(countries = config.countries.len(), "config ready");

    match args.command {
        Commands::Profiles => {
            println!("Country profiles (default: {}):", config.default_country);
            for (code, p) in &config.countries {
                println!(
                    "  {code:<6} center {}  zoom {:<5} restrict [{}]",
                    p.center,
                    p.zoom,
                    p.restriction_for(code).join(", ")
                );
            }
            println!(
                "  {ALL_COUNTRIES:<6} center {}  zoom {:<5} restrict []",
                config.world.center, config.world.zoom
            );
        }

        Commands::Results { file } => {
            let response = NearbySearchResponse::load_from_path(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let mut controller = preview::controller(config)?;
            let request = controller.begin_search()?;
            match controller.complete_search(request.generation, response) {
                SearchOutcome::Rendered(n) => {
                    println!("{n} result(s) for {:?} / \"{}\":", request.types, request.keyword);
                    for (marker, row) in controller.map().markers.iter().zip(&controller.results().rows) {
                        println!(
                            "  {} {:>5}ms {:<4} {}  ({})",
                            marker.label,
                            marker.drop_delay.as_millis(),
                            if row.stripe == RowStripe::Even { "even" } else { "odd" },
                            row.name,
                            marker.position
                        );
                    }
                }
                SearchOutcome::Cleared(status) => println!("No results ({status})"),
                SearchOutcome::Stale => println!("Response was superseded"),
            }
        }

        Commands::Details { file } => {
            let response = PlaceDetailsResponse::load_from_path(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            match (response.status, &response.result) {
                (PlacesStatus::Ok, Some(place)) => print!("{}", InfoContent::from_details(place)),
                (status, _) => println!("Details unavailable ({status}); panel stays closed"),
            }
        }
    }

    Ok(())
}
