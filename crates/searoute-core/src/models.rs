//! Core data models for sea route planning.

use crate::error::RouteError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in degrees, longitude first.
///
/// Serialized as a `[lon, lat]` pair, the order map renderers expect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    pub fn is_valid(&self) -> bool {
        self.lon.is_finite()
            && self.lat.is_finite()
            && (-180.0..=180.0).contains(&self.lon)
            && (-90.0..=90.0).contains(&self.lat)
    }

    /// True when both components are within `eps` degrees of `other`.
    pub fn approx_eq(&self, other: &Coordinate, eps: f64) -> bool {
        (self.lon - other.lon).abs() <= eps && (self.lat - other.lat).abs() <= eps
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lon, lat): (f64, f64)) -> Self {
        Self { lon, lat }
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(coord: Coordinate) -> Self {
        (coord.lon, coord.lat)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lon, self.lat)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShipType {
    #[default]
    Container,
    Bulk,
    Tanker,
    Cruise,
    Ferry,
}

/// Options controlling a single route computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteOptions {
    /// Cruise speed in knots. Must be > 0.
    pub ship_speed: f64,
    pub departure_time: DateTime<Utc>,
    #[serde(default)]
    pub consider_weather: bool,
    #[serde(default)]
    pub fuel_efficient: bool,
    #[serde(default)]
    pub ship_type: ShipType,
}

impl RouteOptions {
    pub fn new(ship_speed: f64, departure_time: DateTime<Utc>, ship_type: ShipType) -> Self {
        Self {
            ship_speed,
            departure_time,
            consider_weather: false,
            fuel_efficient: false,
            ship_type,
        }
    }

    pub fn validate(&self) -> Result<(), RouteError> {
        if !self.ship_speed.is_finite() || self.ship_speed <= 0.0 {
            return Err(RouteError::InvalidOptions(format!(
                "ship speed must be a positive number of knots, got {}",
                self.ship_speed
            )));
        }
        Ok(())
    }
}

/// Ordinal weather hazard: low < medium < high.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherRisk {
    pub level: RiskLevel,
    pub description: String,
    pub recommendations: Vec<String>,
}

/// Forecast returned by a weather collaborator for one point and hour.
///
/// Units: temperature °C, wind knots, waves m, precipitation mm,
/// visibility km, pressure hPa, humidity %, current knots, directions degrees.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherForecast {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub wind_speed: Option<f64>,
    #[serde(default)]
    pub wind_direction: Option<f64>,
    #[serde(default)]
    pub wave_height: Option<f64>,
    #[serde(default)]
    pub precipitation: Option<f64>,
    #[serde(default)]
    pub visibility: Option<f64>,
    #[serde(default)]
    pub pressure: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub sea_temp: Option<f64>,
    #[serde(default)]
    pub current_speed: Option<f64>,
    #[serde(default)]
    pub current_direction: Option<f64>,
}

/// Weather as recorded on a checkpoint. Numeric fields are `None` when the
/// forecast for the checkpoint could not be fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub description: String,
    pub temperature: Option<f64>,
    pub wind_speed: Option<f64>,
    pub wind_direction: Option<f64>,
    pub wave_height: Option<f64>,
    pub precipitation: Option<f64>,
    pub visibility: Option<f64>,
    pub pressure: Option<f64>,
    pub humidity: Option<f64>,
    pub sea_temp: Option<f64>,
    pub current_speed: Option<f64>,
    pub current_direction: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationInfo {
    /// Straight-line distance from the origin port.
    pub distance_from_start_km: f64,
    /// Straight-line distance to the destination port.
    pub distance_to_destination_km: f64,
    pub distance_to_next_km: f64,
    /// Degrees in [0, 360); 0 on the final checkpoint.
    pub bearing: f64,
    /// Knots.
    pub estimated_speed: f64,
    /// Tons burned on the leg to the next checkpoint.
    pub fuel_to_next: f64,
    pub time_to_next: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyInfo {
    pub nearest_port: String,
    pub nearest_port_distance_km: f64,
    pub risk_level: RiskLevel,
    pub warnings: Vec<String>,
    pub recommendations: Vec<String>,
}

/// A waypoint enriched with schedule, weather, navigation and safety data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub position: Coordinate,
    pub estimated_time: DateTime<Utc>,
    /// Cumulative path distance from the origin in km.
    pub distance_km: f64,
    pub weather_forecast: WeatherSnapshot,
    pub navigation_info: NavigationInfo,
    pub safety_info: SafetyInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JourneyDetails {
    pub estimated_arrival: DateTime<Utc>,
    /// USD.
    pub fuel_cost_estimate: f64,
    pub total_duration_hours: f64,
    pub checkpoints: Vec<Checkpoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteType {
    Standard,
    WeatherOptimized,
    FuelEfficient,
}

impl RouteType {
    pub fn label(&self) -> &'static str {
        match self {
            RouteType::Standard => "Standard",
            RouteType::WeatherOptimized => "Weather Optimized",
            RouteType::FuelEfficient => "Fuel Efficient",
        }
    }
}

/// A computed sea route and its journey report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    pub waypoints: Vec<Coordinate>,
    /// Total path length in km.
    pub distance_km: f64,
    pub duration: String,
    /// Tons.
    pub fuel_consumption: f64,
    pub weather_risk: WeatherRisk,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_type: Option<RouteType>,
    pub journey_details: JourneyDetails,
}

/// Port nearest to a position, as reported by a port catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearestPort {
    pub name: String,
    pub distance_km: f64,
    pub coordinates: Coordinate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_serializes_as_lon_lat_pair() {
        let coord = Coordinate::new(55.27, 25.27);
        let json = serde_json::to_string(&coord).unwrap();
        assert_eq!(json, "[55.27,25.27]");

        let parsed: Coordinate = serde_json::from_str("[72.85,18.92]").unwrap();
        assert_eq!(parsed, Coordinate::new(72.85, 18.92));
    }

    #[test]
    fn risk_levels_are_ordered() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
        assert_eq!(serde_json::to_string(&RiskLevel::High).unwrap(), "\"high\"");
    }

    #[test]
    fn coordinate_validity_checks_range() {
        assert!(Coordinate::new(-180.0, 90.0).is_valid());
        assert!(!Coordinate::new(181.0, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, f64::NAN).is_valid());
    }

    #[test]
    fn route_options_default_ship_type_is_container() {
        let options: RouteOptions = serde_json::from_str(
            r#"{"ship_speed": 15.0, "departure_time": "2026-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(options.ship_type, ShipType::Container);
        assert!(!options.consider_weather);
        assert!(!options.fuel_efficient);
    }

    #[test]
    fn zero_or_nan_speed_is_rejected() {
        let mut options = RouteOptions::new(0.0, Utc::now(), ShipType::Bulk);
        assert!(matches!(options.validate(), Err(RouteError::InvalidOptions(_))));
        options.ship_speed = f64::NAN;
        assert!(options.validate().is_err());
        options.ship_speed = 12.5;
        assert!(options.validate().is_ok());
    }
}
