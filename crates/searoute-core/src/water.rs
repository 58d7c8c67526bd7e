//! Navigable-water classification and safe-point search.

use crate::land::LandModel;
use crate::models::Coordinate;
use crate::rules::NavigationRules;
use crate::spatial::{planar_distance, point_in_polygon, point_to_segment_distance, ring_edges};

/// Probe directions in search order (east first, then clockwise through
/// south). Normalised to unit length before use.
const PROBE_DIRECTIONS: [(f64, f64); 8] = [
    (1.0, 0.0),
    (1.0, -0.5),
    (0.7, -0.7),
    (0.0, -1.0),
    (-0.7, -0.7),
    (-1.0, 0.0),
    (-0.7, 0.7),
    (0.0, 1.0),
];

/// Classifies positions against a land model.
#[derive(Debug, Clone, Copy)]
pub struct WaterClassifier<'a> {
    model: &'a LandModel,
    rules: &'a NavigationRules,
}

impl<'a> WaterClassifier<'a> {
    pub fn new(model: &'a LandModel, rules: &'a NavigationRules) -> Self {
        Self { model, rules }
    }

    pub fn model(&self) -> &'a LandModel {
        self.model
    }

    /// True if `point` is navigable.
    ///
    /// Inside a lane region, a point close to a shipping lane is water as
    /// long as it is clear of every coastline vertex and not inside a
    /// landmass. Everywhere else the point must keep the regional margin
    /// from every coastline edge and lie outside every ring. Positions off
    /// the globe are never water.
    pub fn is_water(&self, point: Coordinate) -> bool {
        if !point.is_valid() {
            return false;
        }
        if self.model.in_lane_region(point) && self.near_lane(point) && self.clear_of_shore(point) {
            return true;
        }

        let margin = self.model.margin_at(point, self.rules.default_margin_deg);
        self.model.landmasses.iter().all(|land| {
            let near_edge = ring_edges(&land.ring)
                .any(|(a, b)| point_to_segment_distance(point, a, b) < margin);
            !near_edge && !point_in_polygon(point, &land.ring)
        })
    }

    /// Probe outward from `point` for the first water position.
    ///
    /// Returns `point` itself when it is already water, `None` when nothing
    /// within the probe radius cap qualifies.
    pub fn search_water(&self, point: Coordinate) -> Option<Coordinate> {
        if self.is_water(point) {
            return Some(point);
        }

        let step = self.rules.probe_step_deg;
        if step <= 0.0 {
            return None;
        }

        let rings = (self.rules.probe_max_radius_deg / step + 1e-9).floor() as usize;
        (1..=rings)
            .map(|i| i as f64 * step)
            .flat_map(|radius| {
                PROBE_DIRECTIONS.iter().map(move |&(dx, dy)| {
                    let norm = (dx * dx + dy * dy).sqrt();
                    Coordinate::new(point.lon + dx / norm * radius, point.lat + dy / norm * radius)
                })
            })
            .find(|candidate| self.is_water(*candidate))
    }

    /// Nearest water position, or the configured fallback offset when the
    /// probe finds nothing.
    ///
    /// The fallback is clamped to the valid lon/lat range but not
    /// re-classified, so it may still be on land; callers treat the result
    /// as best effort.
    pub fn find_safe_water_point(&self, point: Coordinate) -> Coordinate {
        self.search_water(point).unwrap_or_else(|| {
            let (dlon, dlat) = self.rules.fallback_offset_deg;
            tracing::debug!(%point, "no water within probe radius, using fallback offset");
            Coordinate::new(
                (point.lon + dlon).clamp(-180.0, 180.0),
                (point.lat + dlat).clamp(-90.0, 90.0),
            )
        })
    }

    fn near_lane(&self, point: Coordinate) -> bool {
        self.model.lanes.iter().any(|lane| {
            lane.points
                .windows(2)
                .any(|pair| point_to_segment_distance(point, pair[0], pair[1]) < self.rules.lane_tolerance_deg)
        })
    }

    fn clear_of_shore(&self, point: Coordinate) -> bool {
        self.model.landmasses.iter().all(|land| {
            !point_in_polygon(point, &land.ring)
                && land
                    .ring
                    .iter()
                    .all(|vertex| planar_distance(point, *vertex) >= self.rules.shore_exclusion_deg)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::land::{BoundingBox, Landmass, ShippingLane};

    fn c(lon: f64, lat: f64) -> Coordinate {
        Coordinate::new(lon, lat)
    }

    fn square_island() -> LandModel {
        LandModel::new(vec![Landmass::new(
            "square",
            vec![c(0.0, 0.0), c(4.0, 0.0), c(4.0, 4.0), c(0.0, 4.0)],
        )])
    }

    #[test]
    fn margin_is_authoritative_over_interior_test() {
        let model = square_island();
        let rules = NavigationRules::default();
        let water = WaterClassifier::new(&model, &rules);

        assert!(!water.is_water(c(2.0, 2.0)));
        // Outside the ring but within the 0.5 margin.
        assert!(!water.is_water(c(4.3, 2.0)));
        assert!(water.is_water(c(4.6, 2.0)));
        assert!(water.is_water(c(-1.0, 2.0)));
    }

    #[test]
    fn water_points_are_never_inside_land() {
        let model = LandModel::world();
        let rules = NavigationRules::default();
        let water = WaterClassifier::new(&model, &rules);

        for lon in (500..800).step_by(7) {
            for lat in (50..300).step_by(7) {
                let point = c(lon as f64 / 10.0, lat as f64 / 10.0);
                if water.is_water(point) {
                    assert!(
                        model.landmasses.iter().all(|land| !point_in_polygon(point, &land.ring)),
                        "{point} classified as water inside a landmass"
                    );
                }
            }
        }
    }

    #[test]
    fn lane_overrides_margin_but_not_interior() {
        let model = square_island().with_lanes(
            vec![ShippingLane::new("coastal", vec![c(4.2, -2.0), c(4.2, 6.0)])],
            vec![BoundingBox::new(-10.0, 10.0, -10.0, 10.0)],
        );
        let rules = NavigationRules::default();
        let water = WaterClassifier::new(&model, &rules);

        // Within the default margin but on the lane and clear of vertices.
        assert!(water.is_water(c(4.3, 2.0)));
        // Close to a vertex.
        assert!(!water.is_water(c(4.1, 3.95)));
        // Inside the ring, near the lane.
        assert!(!water.is_water(c(3.5, 2.0)));
    }

    #[test]
    fn search_returns_water_points_unchanged() {
        let model = square_island();
        let rules = NavigationRules::default();
        let water = WaterClassifier::new(&model, &rules);

        let sea = c(10.0, 10.0);
        assert_eq!(water.search_water(sea), Some(sea));
        assert_eq!(water.find_safe_water_point(sea), sea);
    }

    #[test]
    fn search_probes_outward() {
        let model = square_island();
        let rules = NavigationRules::default();
        let water = WaterClassifier::new(&model, &rules);

        let found = water.search_water(c(3.9, 3.9)).unwrap();
        assert!(found.approx_eq(&c(4.65, 3.9), 1e-9));
        assert!(water.is_water(found));

        assert!(water.search_water(c(2.0, 2.0)).is_none());
        let fallback = water.find_safe_water_point(c(2.0, 2.0));
        assert!(fallback.approx_eq(&c(3.5, 1.0), 1e-9));
    }

    #[test]
    fn search_stays_on_the_globe_at_the_antimeridian() {
        let model = LandModel::new(vec![Landmass::new(
            "dateline",
            vec![c(178.0, -2.0), c(180.0, -2.0), c(180.0, 2.0), c(178.0, 2.0)],
        )]);
        let rules = NavigationRules::default();
        let water = WaterClassifier::new(&model, &rules);

        assert!(!water.is_water(c(181.0, 0.0)));
        assert!(water.search_water(c(179.9, 0.0)).is_none());
        let fallback = water.find_safe_water_point(c(179.9, 0.0));
        assert!(fallback.is_valid());
        assert!(fallback.approx_eq(&c(180.0, -1.0), 1e-9));
    }

    #[test]
    fn world_ports_snap_to_water() {
        let model = LandModel::world();
        let rules = NavigationRules::default();
        let water = WaterClassifier::new(&model, &rules);

        let dubai = water.find_safe_water_point(c(55.27, 25.27));
        assert!(dubai.approx_eq(&c(55.02, 25.27), 1e-9));
        let mumbai = water.find_safe_water_point(c(72.85, 18.92));
        assert!(mumbai.approx_eq(&c(72.85, 18.67), 1e-9));
    }
}
