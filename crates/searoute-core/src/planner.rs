//! Route planning entry points: a single route or labelled alternatives.

use crate::error::RouteError;
use crate::journey::JourneySynthesizer;
use crate::land::LandModel;
use crate::models::{Coordinate, RouteOptions, RouteResult, RouteType};
use crate::route_engine::{RouteStrategy, SeaRouteBuilder};
use crate::rules::NavigationRules;
use crate::water::WaterClassifier;
use futures::future::try_join3;
use std::sync::Arc;

/// Endpoints closer than this are the same position.
const IDENTICAL_EPS_DEG: f64 = 1e-9;

#[derive(Clone)]
pub struct RoutePlanner {
    land: Arc<LandModel>,
    navigation: NavigationRules,
    journey: JourneySynthesizer,
}

impl RoutePlanner {
    pub fn new(land: Arc<LandModel>, navigation: NavigationRules, journey: JourneySynthesizer) -> Self {
        Self {
            land,
            navigation,
            journey,
        }
    }

    pub fn land(&self) -> &LandModel {
        &self.land
    }

    pub fn classifier(&self) -> WaterClassifier<'_> {
        WaterClassifier::new(&self.land, &self.navigation)
    }

    /// Waypoints only, without journey synthesis.
    pub fn build_route(&self, start: Coordinate, end: Coordinate, strategy: RouteStrategy) -> Vec<Coordinate> {
        SeaRouteBuilder::new(&self.land, &self.navigation).build_sea_route(start, end, strategy)
    }

    /// Build a sea route and synthesize its journey report.
    pub async fn plan_route(
        &self,
        start: Coordinate,
        end: Coordinate,
        options: &RouteOptions,
    ) -> Result<RouteResult, RouteError> {
        validate_request(start, end, options)?;

        let strategy = RouteStrategy::for_options(options);
        let waypoints = self.build_route(start, end, strategy);
        self.journey.synthesize(&waypoints, options, start, end).await
    }

    /// Standard, weather-optimized and fuel-efficient variants, in that
    /// order.
    ///
    /// If the batch fails, only the standard route is returned.
    pub async fn compute_alternatives(
        &self,
        start: Coordinate,
        end: Coordinate,
        options: &RouteOptions,
    ) -> Result<Vec<RouteResult>, RouteError> {
        validate_request(start, end, options)?;

        let standard = RouteOptions {
            consider_weather: false,
            fuel_efficient: false,
            ..options.clone()
        };
        let weather = RouteOptions {
            consider_weather: true,
            fuel_efficient: false,
            ..options.clone()
        };
        let fuel = RouteOptions {
            consider_weather: false,
            fuel_efficient: true,
            ..options.clone()
        };

        let batch = try_join3(
            self.tagged(start, end, &standard, RouteType::Standard),
            self.tagged(start, end, &weather, RouteType::WeatherOptimized),
            self.tagged(start, end, &fuel, RouteType::FuelEfficient),
        )
        .await;

        match batch {
            Ok((standard, weather, fuel)) => Ok(vec![standard, weather, fuel]),
            Err(err) => {
                tracing::warn!(error = %err, "alternatives batch failed, returning standard route only");
                let standard = self.tagged(start, end, &standard, RouteType::Standard).await?;
                Ok(vec![standard])
            }
        }
    }

    async fn tagged(
        &self,
        start: Coordinate,
        end: Coordinate,
        options: &RouteOptions,
        route_type: RouteType,
    ) -> Result<RouteResult, RouteError> {
        let mut result = self.plan_route(start, end, options).await?;
        result.route_type = Some(route_type);
        Ok(result)
    }
}

fn validate_request(start: Coordinate, end: Coordinate, options: &RouteOptions) -> Result<(), RouteError> {
    options.validate()?;
    for point in [start, end] {
        if !point.is_valid() {
            return Err(RouteError::InvalidCoordinate {
                lon: point.lon,
                lat: point.lat,
            });
        }
    }
    if start.approx_eq(&end, IDENTICAL_EPS_DEG) {
        return Err(RouteError::IdenticalEndpoints);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::StaticPortCatalog;
    use crate::rules::JourneyRules;
    use crate::weather::StaticWeather;
    use chrono::{DateTime, Duration, Utc};

    fn open_sea_planner() -> RoutePlanner {
        let journey = JourneySynthesizer::new(
            JourneyRules::default(),
            Arc::new(StaticPortCatalog::builtin()),
            Arc::new(StaticWeather::calm()),
        );
        RoutePlanner::new(Arc::new(LandModel::default()), NavigationRules::default(), journey)
    }

    #[test]
    fn request_validation() {
        let options = RouteOptions::new(14.0, Utc::now(), Default::default());
        let a = Coordinate::new(60.0, 10.0);
        let b = Coordinate::new(65.0, 12.0);

        assert!(validate_request(a, b, &options).is_ok());
        assert_eq!(validate_request(a, a, &options), Err(RouteError::IdenticalEndpoints));
        assert!(matches!(
            validate_request(a, Coordinate::new(0.0, 95.0), &options),
            Err(RouteError::InvalidCoordinate { .. })
        ));

        let stopped = RouteOptions::new(-1.0, Utc::now(), Default::default());
        assert!(matches!(
            validate_request(a, b, &stopped),
            Err(RouteError::InvalidOptions(_))
        ));
    }

    #[tokio::test]
    async fn plan_route_over_open_sea() {
        let planner = open_sea_planner();
        let options = RouteOptions::new(14.0, Utc::now(), Default::default());
        let start = Coordinate::new(60.0, 10.0);
        let end = Coordinate::new(64.0, 10.0);

        let result = planner.plan_route(start, end, &options).await.unwrap();
        assert_eq!(result.waypoints.first(), Some(&start));
        assert_eq!(result.waypoints.last(), Some(&end));
        assert!(result.route_type.is_none());
        assert_eq!(result.journey_details.checkpoints.len(), result.waypoints.len());
    }

    #[tokio::test]
    async fn alternatives_are_tagged_in_order() {
        let planner = open_sea_planner();
        let options = RouteOptions::new(14.0, Utc::now(), Default::default());

        let routes = planner
            .compute_alternatives(Coordinate::new(60.0, 10.0), Coordinate::new(70.0, 10.0), &options)
            .await
            .unwrap();
        let kinds: Vec<_> = routes.iter().map(|r| r.route_type).collect();
        assert_eq!(
            kinds,
            vec![
                Some(RouteType::Standard),
                Some(RouteType::WeatherOptimized),
                Some(RouteType::FuelEfficient)
            ]
        );
        assert!(routes[2].fuel_consumption < routes[0].fuel_consumption);
    }

    #[tokio::test]
    async fn variants_ignore_the_callers_flags() {
        let planner = open_sea_planner();
        let mut options = RouteOptions::new(14.0, Utc::now(), Default::default());
        options.consider_weather = true;
        options.fuel_efficient = true;

        let routes = planner
            .compute_alternatives(Coordinate::new(60.0, 10.0), Coordinate::new(70.0, 10.0), &options)
            .await
            .unwrap();
        let rate = |r: &RouteResult| r.fuel_consumption / r.distance_km;

        assert_eq!(routes.len(), 3);
        assert!((rate(&routes[0]) - 0.30).abs() < 0.005);
        assert!((rate(&routes[1]) - 0.30).abs() < 0.005);
        assert!((rate(&routes[2]) - 0.255).abs() < 0.005);
        // Fuel-efficient follows the standard geometry, not the curve.
        assert_eq!(routes[2].waypoints, routes[0].waypoints);
        assert_ne!(routes[1].waypoints, routes[0].waypoints);
    }

    #[tokio::test]
    async fn failed_batch_falls_back_to_standard_route() {
        let planner = open_sea_planner();
        let start = Coordinate::new(60.0, 10.0);
        let end = Coordinate::new(70.0, 10.0);
        let mut sizing = RouteOptions::new(14.0, Utc::now(), Default::default());

        let straight = planner.plan_route(start, end, &sizing).await.unwrap();
        sizing.consider_weather = true;
        let curved = planner.plan_route(start, end, &sizing).await.unwrap();
        let straight_h = straight.journey_details.total_duration_hours;
        let curved_h = curved.journey_details.total_duration_hours;
        assert!(curved_h > straight_h + 0.1);

        // Only the longer curved voyage runs past the last representable instant.
        let midpoint_ms = ((straight_h + curved_h) / 2.0 * 3_600_000.0) as i64;
        let departure = DateTime::<Utc>::MAX_UTC - Duration::milliseconds(midpoint_ms);
        let options = RouteOptions::new(14.0, departure, Default::default());

        let routes = planner.compute_alternatives(start, end, &options).await.unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].route_type, Some(RouteType::Standard));
        assert_eq!(routes[0].waypoints, straight.waypoints);
    }
}
