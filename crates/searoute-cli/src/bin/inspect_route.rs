use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use searoute_cli::{init_logging, parse_position, parse_ship_type};
use searoute_core::spatial::path_length_km;
use searoute_core::{
    JourneyRules, JourneySynthesizer, LandModel, NavigationRules, RouteOptions, RoutePlanner,
    RouteStrategy, StaticPortCatalog, StaticWeather,
};
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(author, version, about = "Build a sea route offline and check every waypoint", long_about = None)]
struct Args {
    /// Origin as 'lon,lat' or a port name
    #[arg(long)]
    from: String,

    /// Destination as 'lon,lat' or a port name
    #[arg(long)]
    to: String,

    /// Use curved legs instead of segmented ones
    #[arg(long)]
    curved: bool,

    /// Also synthesize the journey with calm offline weather
    #[arg(long)]
    journey: bool,

    #[arg(long, default_value_t = 15.0)]
    speed: f64,

    #[arg(long, default_value = "container")]
    ship_type: String,

    #[arg(long, short)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let ports = Arc::new(StaticPortCatalog::builtin());
    let start = parse_position(&args.from, &ports)?;
    let end = parse_position(&args.to, &ports)?;

    let journey = JourneySynthesizer::new(
        JourneyRules::default(),
        ports.clone(),
        Arc::new(StaticWeather::calm()),
    );
    let planner = RoutePlanner::new(Arc::new(LandModel::world()), NavigationRules::default(), journey);

    let strategy = if args.curved {
        RouteStrategy::Curved
    } else {
        RouteStrategy::Segmented
    };
    let route = planner.build_route(start, end, strategy);
    let classifier = planner.classifier();

    println!("{start} -> {end} ({strategy:?})");
    let mut on_land = 0;
    for (i, point) in route.iter().enumerate() {
        let water = classifier.is_water(*point);
        if !water {
            on_land += 1;
        }
        println!("  {i:>3}  {point}  {}", if water { "water" } else { "LAND" });
    }
    println!(
        "{} waypoints, {:.0} km, {} outside navigable water",
        route.len(),
        path_length_km(&route),
        on_land
    );

    if args.journey {
        let mut options = RouteOptions::new(args.speed, Utc::now(), parse_ship_type(&args.ship_type)?);
        options.consider_weather = args.curved;
        let result = planner.plan_route(start, end, &options).await?;
        println!(
            "Journey: {} km, {}, {} t fuel, arrival {}",
            result.distance_km,
            result.duration,
            result.fuel_consumption,
            result.journey_details.estimated_arrival.to_rfc3339()
        );
    }

    Ok(())
}
