//! Geometry primitives shared by every routing component.
//!
//! Positions are treated on a plane in degree units: segment distances and
//! containment tests do not correct longitude for latitude. Path lengths are
//! always summed with [`distance_km`] so totals stay comparable across
//! route variants.

use crate::models::Coordinate;

pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Great-circle distance between two points in kilometers (haversine).
pub fn distance_km(from: Coordinate, to: Coordinate) -> f64 {
    let phi1 = from.lat.to_radians();
    let phi2 = to.lat.to_radians();
    let dphi = (to.lat - from.lat).to_radians();
    let dlambda = (to.lon - from.lon).to_radians();
    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Sum of consecutive segment lengths in kilometers.
pub fn path_length_km(points: &[Coordinate]) -> f64 {
    points
        .windows(2)
        .map(|pair| distance_km(pair[0], pair[1]))
        .sum()
}

/// Planar distance in degrees between two points.
pub fn planar_distance(a: Coordinate, b: Coordinate) -> f64 {
    let dx = a.lon - b.lon;
    let dy = a.lat - b.lat;
    (dx * dx + dy * dy).sqrt()
}

/// Distance in degrees from `point` to the segment `a`-`b`.
///
/// Projects onto the segment and clamps to its endpoints.
pub fn point_to_segment_distance(point: Coordinate, a: Coordinate, b: Coordinate) -> f64 {
    let sx = b.lon - a.lon;
    let sy = b.lat - a.lat;
    let seg_len_sq = sx * sx + sy * sy;

    if seg_len_sq <= f64::EPSILON {
        return planar_distance(point, a);
    }

    // t = ((P-A) · (B-A)) / |B-A|²
    let px = point.lon - a.lon;
    let py = point.lat - a.lat;
    let t = ((px * sx + py * sy) / seg_len_sq).clamp(0.0, 1.0);

    let dx = px - t * sx;
    let dy = py - t * sy;
    (dx * dx + dy * dy).sqrt()
}

/// Even-odd ray casting test. The ring is implicitly closed.
pub fn point_in_polygon(point: Coordinate, ring: &[Coordinate]) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = (ring[i].lon, ring[i].lat);
        let (xj, yj) = (ring[j].lon, ring[j].lat);

        if ((yi > point.lat) != (yj > point.lat))
            && (point.lon < (xj - xi) * (point.lat - yi) / (yj - yi) + xi)
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Iterate the edges of a closed ring, including the closing edge.
pub fn ring_edges(ring: &[Coordinate]) -> impl Iterator<Item = (Coordinate, Coordinate)> + '_ {
    let n = ring.len();
    (0..n).filter_map(move |i| {
        let next = (i + 1) % n;
        (next != i).then(|| (ring[i], ring[next]))
    })
}

/// Planar initial bearing from `from` to `to` in degrees, [0, 360).
///
/// 0 = north, 90 = east. The longitude delta is not scaled by cos(lat), so
/// headings drift from the true great-circle bearing away from the equator.
pub fn bearing(from: Coordinate, to: Coordinate) -> f64 {
    let dx = to.lon - from.lon;
    let dy = to.lat - from.lat;
    if dx.abs() <= f64::EPSILON && dy.abs() <= f64::EPSILON {
        return 0.0;
    }
    dx.atan2(dy).to_degrees().rem_euclid(360.0)
}

/// Linear interpolation between two positions, `t` in [0, 1].
pub fn lerp(a: Coordinate, b: Coordinate, t: f64) -> Coordinate {
    Coordinate::new(a.lon + (b.lon - a.lon) * t, a.lat + (b.lat - a.lat) * t)
}

/// Point on the quadratic Bezier curve `start`-`control`-`end` at `t`.
pub fn quadratic_bezier(start: Coordinate, control: Coordinate, end: Coordinate, t: f64) -> Coordinate {
    let u = 1.0 - t;
    Coordinate::new(
        u * u * start.lon + 2.0 * u * t * control.lon + t * t * end.lon,
        u * u * start.lat + 2.0 * u * t * control.lat + t * t * end.lat,
    )
}

/// Offset a position by `distance` degrees along a planar angle in radians
/// (0 = east, π/2 = north).
pub fn offset_planar(origin: Coordinate, distance: f64, angle_rad: f64) -> Coordinate {
    Coordinate::new(
        origin.lon + distance * angle_rad.cos(),
        origin.lat + distance * angle_rad.sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(lon: f64, lat: f64) -> Coordinate {
        Coordinate::new(lon, lat)
    }

    #[test]
    fn test_distance_known_value() {
        // ~111km between these points (1 degree latitude)
        let dist = distance_km(c(0.0, 0.0), c(0.0, 1.0));
        assert!((dist - 111.19).abs() < 0.1);
    }

    #[test]
    fn test_distance_same_point() {
        let dist = distance_km(c(55.27, 25.27), c(55.27, 25.27));
        assert!(dist < 1e-9);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = c(55.27, 25.27);
        let b = c(72.85, 18.92);
        assert!((distance_km(a, b) - distance_km(b, a)).abs() < 1e-9);
    }

    #[test]
    fn segment_distance_clamps_to_endpoints() {
        let a = c(0.0, 0.0);
        let b = c(2.0, 0.0);
        assert!((point_to_segment_distance(c(1.0, 1.0), a, b) - 1.0).abs() < 1e-12);
        assert!((point_to_segment_distance(c(3.0, 0.0), a, b) - 1.0).abs() < 1e-12);
        assert!((point_to_segment_distance(c(-3.0, 4.0), a, b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn segment_distance_handles_degenerate_segment() {
        let a = c(1.0, 1.0);
        assert!((point_to_segment_distance(c(4.0, 5.0), a, a) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn point_in_polygon_square() {
        let square = [c(0.0, 0.0), c(4.0, 0.0), c(4.0, 4.0), c(0.0, 4.0)];
        assert!(point_in_polygon(c(2.0, 2.0), &square));
        assert!(!point_in_polygon(c(5.0, 2.0), &square));
        assert!(!point_in_polygon(c(2.0, -0.5), &square));
    }

    #[test]
    fn point_in_polygon_concave_notch() {
        // U shape opening north; the notch is outside.
        let ring = [
            c(0.0, 0.0),
            c(3.0, 0.0),
            c(3.0, 3.0),
            c(2.0, 3.0),
            c(2.0, 1.0),
            c(1.0, 1.0),
            c(1.0, 3.0),
            c(0.0, 3.0),
        ];
        assert!(!point_in_polygon(c(1.5, 2.0), &ring));
        assert!(point_in_polygon(c(0.5, 2.0), &ring));
        assert!(point_in_polygon(c(1.5, 0.5), &ring));
    }

    #[test]
    fn degenerate_ring_contains_nothing() {
        assert!(!point_in_polygon(c(0.0, 0.0), &[c(0.0, 0.0), c(1.0, 1.0)]));
    }

    #[test]
    fn ring_edges_include_closing_edge() {
        let tri = [c(0.0, 0.0), c(1.0, 0.0), c(0.0, 1.0)];
        let edges: Vec<_> = ring_edges(&tri).collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2], (c(0.0, 1.0), c(0.0, 0.0)));
    }

    #[test]
    fn bearing_cardinal_directions() {
        let origin = c(10.0, 10.0);
        assert!((bearing(origin, c(10.0, 11.0)) - 0.0).abs() < 1e-9);
        assert!((bearing(origin, c(11.0, 10.0)) - 90.0).abs() < 1e-9);
        assert!((bearing(origin, c(10.0, 9.0)) - 180.0).abs() < 1e-9);
        assert!((bearing(origin, c(9.0, 10.0)) - 270.0).abs() < 1e-9);
        assert_eq!(bearing(origin, origin), 0.0);
    }

    #[test]
    fn bezier_hits_endpoints_and_bends_toward_control() {
        let start = c(0.0, 0.0);
        let end = c(4.0, 0.0);
        let control = c(2.0, 2.0);
        assert_eq!(quadratic_bezier(start, control, end, 0.0), start);
        assert_eq!(quadratic_bezier(start, control, end, 1.0), end);
        let mid = quadratic_bezier(start, control, end, 0.5);
        assert!((mid.lon - 2.0).abs() < 1e-12);
        assert!((mid.lat - 1.0).abs() < 1e-12);
    }

    #[test]
    fn path_length_sums_segments() {
        let pts = [c(0.0, 0.0), c(0.0, 1.0), c(0.0, 2.0)];
        let total = path_length_km(&pts);
        assert!((total - 2.0 * distance_km(pts[0], pts[1])).abs() < 1e-9);
        assert_eq!(path_length_km(&pts[..1]), 0.0);
    }
}
