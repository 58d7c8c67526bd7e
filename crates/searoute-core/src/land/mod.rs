//! Static land model: coastline rings, shipping lanes and region overrides.
//!
//! A `LandModel` is built once and shared read-only (usually behind an
//! `Arc`). Tests build small synthetic models with [`LandModel::new`] and the
//! `with_*` builders; production code uses [`LandModel::world`].

mod world;

use crate::models::Coordinate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    pub const fn new(min_lon: f64, max_lon: f64, min_lat: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            max_lon,
            min_lat,
            max_lat,
        }
    }

    pub fn contains(&self, point: Coordinate) -> bool {
        point.lon >= self.min_lon
            && point.lon <= self.max_lon
            && point.lat >= self.min_lat
            && point.lat <= self.max_lat
    }
}

/// A closed coastline ring approximating a landmass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Landmass {
    pub name: String,
    pub ring: Vec<Coordinate>,
}

impl Landmass {
    pub fn new(name: impl Into<String>, ring: Vec<Coordinate>) -> Self {
        Self {
            name: name.into(),
            ring,
        }
    }
}

/// A known-safe corridor, as a polyline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingLane {
    pub name: String,
    pub points: Vec<Coordinate>,
}

impl ShippingLane {
    pub fn new(name: impl Into<String>, points: Vec<Coordinate>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }
}

/// Area where the coastline clearance differs from the default margin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarginRegion {
    pub name: String,
    pub bounds: BoundingBox,
    pub margin_deg: f64,
}

impl MarginRegion {
    pub fn new(name: impl Into<String>, bounds: BoundingBox, margin_deg: f64) -> Self {
        Self {
            name: name.into(),
            bounds,
            margin_deg,
        }
    }
}

/// Named detour for leaving an enclosed sea.
///
/// Applies when exactly one endpoint lies inside `enclosure`; `via` is
/// ordered from the enclosure outward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Corridor {
    pub name: String,
    pub enclosure: BoundingBox,
    pub via: Vec<Coordinate>,
}

impl Corridor {
    pub fn new(name: impl Into<String>, enclosure: BoundingBox, via: Vec<Coordinate>) -> Self {
        Self {
            name: name.into(),
            enclosure,
            via,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LandModel {
    pub landmasses: Vec<Landmass>,
    pub lanes: Vec<ShippingLane>,
    /// Lanes are only consulted for points inside one of these boxes
    pub lane_regions: Vec<BoundingBox>,
    /// First matching region wins
    pub margin_regions: Vec<MarginRegion>,
    pub corridors: Vec<Corridor>,
}

impl LandModel {
    pub fn new(landmasses: Vec<Landmass>) -> Self {
        Self {
            landmasses,
            ..Self::default()
        }
    }

    /// The built-in coastline tables.
    pub fn world() -> Self {
        world::build()
    }

    pub fn with_lanes(mut self, lanes: Vec<ShippingLane>, regions: Vec<BoundingBox>) -> Self {
        self.lanes.extend(lanes);
        self.lane_regions.extend(regions);
        self
    }

    pub fn with_margin_region(mut self, region: MarginRegion) -> Self {
        self.margin_regions.push(region);
        self
    }

    pub fn with_corridor(mut self, corridor: Corridor) -> Self {
        self.corridors.push(corridor);
        self
    }

    /// Coastline clearance at `point`, falling back to `default_margin`.
    pub fn margin_at(&self, point: Coordinate, default_margin: f64) -> f64 {
        self.margin_regions
            .iter()
            .find(|region| region.bounds.contains(point))
            .map(|region| region.margin_deg)
            .unwrap_or(default_margin)
    }

    pub fn in_lane_region(&self, point: Coordinate) -> bool {
        self.lane_regions.iter().any(|region| region.contains(point))
    }

    /// Via points of the first corridor joining `start` and `end`, oriented
    /// from start to end.
    pub fn corridor_between(&self, start: Coordinate, end: Coordinate) -> Option<(&str, Vec<Coordinate>)> {
        self.corridors.iter().find_map(|corridor| {
            let start_inside = corridor.enclosure.contains(start);
            let end_inside = corridor.enclosure.contains(end);
            match (start_inside, end_inside) {
                (true, false) => Some((corridor.name.as_str(), corridor.via.clone())),
                (false, true) => {
                    let mut via = corridor.via.clone();
                    via.reverse();
                    Some((corridor.name.as_str(), via))
                }
                _ => None,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(lon: f64, lat: f64) -> Coordinate {
        Coordinate::new(lon, lat)
    }

    #[test]
    fn margin_regions_override_default_in_order() {
        let model = LandModel::default()
            .with_margin_region(MarginRegion::new("inner", BoundingBox::new(0.0, 1.0, 0.0, 1.0), 0.1))
            .with_margin_region(MarginRegion::new("outer", BoundingBox::new(0.0, 5.0, 0.0, 5.0), 0.3));

        assert_eq!(model.margin_at(c(0.5, 0.5), 0.5), 0.1);
        assert_eq!(model.margin_at(c(3.0, 3.0), 0.5), 0.3);
        assert_eq!(model.margin_at(c(9.0, 9.0), 0.5), 0.5);
    }

    #[test]
    fn corridor_orients_via_points() {
        let model = LandModel::default().with_corridor(Corridor::new(
            "gate",
            BoundingBox::new(0.0, 2.0, 0.0, 2.0),
            vec![c(3.0, 1.0), c(4.0, 1.0)],
        ));

        let (name, out) = model.corridor_between(c(1.0, 1.0), c(8.0, 1.0)).unwrap();
        assert_eq!(name, "gate");
        assert_eq!(out, vec![c(3.0, 1.0), c(4.0, 1.0)]);

        let (_, back) = model.corridor_between(c(8.0, 1.0), c(1.0, 1.0)).unwrap();
        assert_eq!(back, vec![c(4.0, 1.0), c(3.0, 1.0)]);

        assert!(model.corridor_between(c(0.5, 0.5), c(1.5, 1.5)).is_none());
        assert!(model.corridor_between(c(6.0, 6.0), c(8.0, 8.0)).is_none());
    }

    #[test]
    fn world_model_loads_regions() {
        let world = LandModel::world();
        assert!(world.landmasses.len() >= 10);
        assert!(world.landmasses.iter().all(|land| land.ring.len() >= 3));
        assert_eq!(world.lanes.len(), 2);
        assert!(world.in_lane_region(c(80.0, 5.0)));
        assert!(!world.in_lane_region(c(55.0, 25.0)));
        assert!(world
            .corridor_between(c(55.27, 25.27), c(72.85, 18.92))
            .is_some());
    }
}
