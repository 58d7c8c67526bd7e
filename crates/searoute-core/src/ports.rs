//! Port catalog lookups.

use crate::models::{Coordinate, NearestPort};
use crate::spatial::distance_km;
use serde::{Deserialize, Serialize};

/// Source of named ports for checkpoint safety info.
pub trait PortCatalog: Send + Sync {
    fn nearest_port(&self, position: Coordinate) -> Option<NearestPort>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Port {
    pub name: String,
    pub coordinates: Coordinate,
}

impl Port {
    pub fn new(name: impl Into<String>, lon: f64, lat: f64) -> Self {
        Self {
            name: name.into(),
            coordinates: Coordinate::new(lon, lat),
        }
    }
}

/// Fixed list of ports scanned linearly by great-circle distance.
#[derive(Debug, Clone)]
pub struct StaticPortCatalog {
    ports: Vec<Port>,
}

impl StaticPortCatalog {
    pub fn new(ports: Vec<Port>) -> Self {
        Self { ports }
    }

    /// Ports of the Gulf, Arabian Sea and Bay of Bengal, plus Singapore.
    pub fn builtin() -> Self {
        Self::new(vec![
            Port::new("Dubai", 55.27, 25.27),
            Port::new("Abu Dhabi", 54.37, 24.52),
            Port::new("Fujairah", 56.36, 25.12),
            Port::new("Sharjah", 55.38, 25.36),
            Port::new("Ras Al Khaimah", 55.94, 25.79),
            Port::new("Muscat", 58.57, 23.63),
            Port::new("Karachi", 66.98, 24.84),
            Port::new("Mumbai", 72.85, 18.92),
            Port::new("Kochi", 76.24, 9.97),
            Port::new("Colombo", 79.85, 6.95),
            Port::new("Chennai", 80.29, 13.09),
            Port::new("Singapore", 103.82, 1.26),
        ])
    }

    pub fn ports(&self) -> &[Port] {
        &self.ports
    }

    /// Case-insensitive lookup by name.
    pub fn find(&self, name: &str) -> Option<&Port> {
        self.ports
            .iter()
            .find(|port| port.name.eq_ignore_ascii_case(name))
    }
}

impl Default for StaticPortCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PortCatalog for StaticPortCatalog {
    /// Ranks ports by haversine km rather than planar degrees, so the
    /// reported distance agrees with route and checkpoint distances.
    fn nearest_port(&self, position: Coordinate) -> Option<NearestPort> {
        self.ports
            .iter()
            .map(|port| (port, distance_km(position, port.coordinates)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(port, distance)| NearestPort {
                name: port.name.clone(),
                distance_km: distance,
                coordinates: port.coordinates,
            })
    }
}
