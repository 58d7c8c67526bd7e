use anyhow::Result;
use clap::Parser;
use searoute_cli::{init_logging, parse_position, parse_ship_type, PlanRequest, RouteClient};
use searoute_core::{RouteResult, StaticPortCatalog};

#[derive(Parser, Debug)]
#[command(author, version, about = "Plan a sea route through the route server", long_about = None)]
struct Args {
    /// Route server URL
    #[arg(long, default_value = "http://localhost:3000")]
    url: String,

    /// Origin as 'lon,lat' or a port name
    #[arg(long)]
    from: String,

    /// Destination as 'lon,lat' or a port name
    #[arg(long)]
    to: String,

    /// Cruise speed in knots
    #[arg(long, default_value_t = 15.0)]
    speed: f64,

    /// container, bulk, tanker, cruise or ferry
    #[arg(long, default_value = "container")]
    ship_type: String,

    #[arg(long)]
    consider_weather: bool,

    #[arg(long)]
    fuel_efficient: bool,

    /// Request standard, weather-optimized and fuel-efficient variants
    #[arg(long)]
    alternatives: bool,

    /// Print the raw JSON response
    #[arg(long)]
    json: bool,

    #[arg(long, short)]
    verbose: bool,
}

fn print_summary(route: &RouteResult) {
    let label = route.route_type.map(|t| t.label()).unwrap_or("Route");
    println!("{label}");
    println!("  Distance:  {} km", route.distance_km);
    println!("  Duration:  {}", route.duration);
    println!("  Fuel:      {} t (${})", route.fuel_consumption, route.journey_details.fuel_cost_estimate);
    println!("  Arrival:   {}", route.journey_details.estimated_arrival.to_rfc3339());
    println!(
        "  Weather:   {} - {}",
        route.weather_risk.level, route.weather_risk.description
    );
    for recommendation in &route.weather_risk.recommendations {
        println!("             * {recommendation}");
    }
    println!("  Waypoints: {}", route.waypoints.len());
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let ports = StaticPortCatalog::builtin();
    let request = PlanRequest {
        start: parse_position(&args.from, &ports)?,
        end: parse_position(&args.to, &ports)?,
        ship_speed: args.speed,
        ship_type: parse_ship_type(&args.ship_type)?,
        consider_weather: args.consider_weather,
        fuel_efficient: args.fuel_efficient,
    };
    let client = RouteClient::new(args.url);

    let routes = if args.alternatives {
        client.alternatives(&request)?
    } else {
        vec![client.plan(&request)?]
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&routes)?);
        return Ok(());
    }

    println!("{} -> {}", request.start, request.end);
    for route in &routes {
        print_summary(route);
    }
    Ok(())
}
