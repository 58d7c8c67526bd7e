//! Sea route CLI - command line tools for the sea route planner.
//!
//! Binaries:
//! - plan_route: plan a route (or alternatives) through a running server
//! - inspect_route: build a route offline and check every waypoint

pub mod client;

pub use client::{PlanRequest, RouteClient};

use anyhow::{bail, Context, Result};
use searoute_core::{Coordinate, ShipType, StaticPortCatalog};

/// Parse a position given as `lon,lat` or as a built-in port name.
pub fn parse_position(input: &str, ports: &StaticPortCatalog) -> Result<Coordinate> {
    if let Some(port) = ports.find(input.trim()) {
        return Ok(port.coordinates);
    }

    let (lon, lat) = input
        .split_once(',')
        .with_context(|| format!("expected 'lon,lat' or a port name, got '{input}'"))?;
    let lon: f64 = lon.trim().parse().context("invalid longitude")?;
    let lat: f64 = lat.trim().parse().context("invalid latitude")?;
    let point = Coordinate::new(lon, lat);
    if !point.is_valid() {
        bail!("position {point} is out of range");
    }
    Ok(point)
}

/// Parse a ship type name (container, bulk, tanker, cruise, ferry).
pub fn parse_ship_type(input: &str) -> Result<ShipType> {
    serde_json::from_value(serde_json::Value::String(input.trim().to_ascii_lowercase()))
        .with_context(|| format!("unknown ship type '{input}'"))
}

/// Install a stderr logger when `verbose` is set.
pub fn init_logging(verbose: bool) {
    if verbose {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("searoute_core=debug")),
            )
            .init();
    }
}
