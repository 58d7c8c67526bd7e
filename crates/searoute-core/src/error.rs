//! Error types for route planning.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RouteError {
    #[error("invalid route options: {0}")]
    InvalidOptions(String),
    #[error("invalid coordinate ({lon}, {lat})")]
    InvalidCoordinate { lon: f64, lat: f64 },
    #[error("origin and destination are the same position")]
    IdenticalEndpoints,
    #[error("route needs at least 2 waypoints")]
    EmptyRoute,
}
