pub mod error;
pub mod journey;
pub mod land;
pub mod models;
pub mod planner;
pub mod ports;
pub mod risk;
pub mod route_engine;
pub mod rules;
pub mod spatial;
pub mod water;
pub mod weather;

pub use error::RouteError;
pub use journey::{format_duration, JourneySynthesizer};
pub use land::{BoundingBox, Corridor, LandModel, Landmass, MarginRegion, ShippingLane};
pub use models::{
    Checkpoint, Coordinate, JourneyDetails, NavigationInfo, NearestPort, RiskLevel, RouteOptions,
    RouteResult, RouteType, SafetyInfo, ShipType, WeatherForecast, WeatherRisk, WeatherSnapshot,
};
pub use planner::RoutePlanner;
pub use ports::{Port, PortCatalog, StaticPortCatalog};
pub use risk::{assess, assess_risk, RiskAssessment};
pub use route_engine::{Leg, LegShape, RouteStrategy, SeaRouteBuilder};
pub use rules::{JourneyRules, NavigationRules};
pub use spatial::distance_km;
pub use water::WaterClassifier;
pub use weather::{NoWeather, StaticWeather, WeatherError, WeatherProvider};
