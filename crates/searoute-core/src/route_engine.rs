//! Sea route construction.
//!
//! A route is built leg by leg between anchors: the snapped origin, any
//! corridor via points, and the snapped destination. Each leg is either
//! segmented and repaired against the water classifier, or bent into a
//! quadratic Bezier curve that clears every landmass.

use crate::land::LandModel;
use crate::models::{Coordinate, RouteOptions};
use crate::rules::NavigationRules;
use crate::spatial::{lerp, offset_planar, planar_distance, quadratic_bezier};
use crate::water::WaterClassifier;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Consecutive points closer than this are collapsed.
const DUPLICATE_EPS_DEG: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteStrategy {
    /// Fixed-step interpolation with nearby-water repair.
    Segmented,
    /// Bezier legs with retried control points, segmented fallback.
    Curved,
}

impl RouteStrategy {
    /// Weather-aware routes take the wider curved legs.
    pub fn for_options(options: &RouteOptions) -> Self {
        if options.consider_weather {
            RouteStrategy::Curved
        } else {
            RouteStrategy::Segmented
        }
    }
}

/// How a single leg was shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegShape {
    /// Short leg, endpoints connected directly.
    Direct,
    /// Curve accepted on the given attempt (0-based).
    Curved { attempt: usize },
    /// Straight interpolation, land samples moved to nearby water.
    Repaired,
}

/// Interior points of a leg, excluding both anchors.
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    pub shape: LegShape,
    pub points: Vec<Coordinate>,
}

pub struct SeaRouteBuilder<'a> {
    model: &'a LandModel,
    rules: &'a NavigationRules,
    water: WaterClassifier<'a>,
}

impl<'a> SeaRouteBuilder<'a> {
    pub fn new(model: &'a LandModel, rules: &'a NavigationRules) -> Self {
        Self {
            model,
            rules,
            water: WaterClassifier::new(model, rules),
        }
    }

    pub fn classifier(&self) -> &WaterClassifier<'a> {
        &self.water
    }

    /// Build a waypoint sequence from `start` to `end`.
    ///
    /// The result always begins with `start` and ends with `end`. When an
    /// endpoint is on land (ports usually are) the snapped water point is
    /// placed next to it. Intermediate points are best effort: a repaired
    /// sample with no water nearby is kept as is.
    pub fn build_sea_route(
        &self,
        start: Coordinate,
        end: Coordinate,
        strategy: RouteStrategy,
    ) -> Vec<Coordinate> {
        let safe_start = self.water.find_safe_water_point(start);
        let safe_end = self.water.find_safe_water_point(end);

        let mut anchors = vec![safe_start];
        if let Some((name, via)) = self.model.corridor_between(start, end) {
            tracing::debug!(corridor = name, points = via.len(), "routing through corridor");
            anchors.extend(via);
        }
        anchors.push(safe_end);

        let mut route = vec![start, safe_start];
        for pair in anchors.windows(2) {
            let leg = match strategy {
                RouteStrategy::Segmented => self.segmented_leg(pair[0], pair[1], self.rules.segment_step_deg),
                RouteStrategy::Curved => self.curved_leg(pair[0], pair[1]),
            };
            tracing::trace!(from = %pair[0], to = %pair[1], shape = ?leg.shape, "leg built");
            route.extend(leg.points);
            route.push(pair[1]);
        }
        route.push(end);

        let route = dedupe_consecutive(route);
        tracing::debug!(
            ?strategy,
            waypoints = route.len(),
            "sea route built from {start} to {end}"
        );
        route
    }

    /// Straight leg sampled every `step_deg`, land samples repaired.
    pub fn segmented_leg(&self, from: Coordinate, to: Coordinate, step_deg: f64) -> Leg {
        let length = planar_distance(from, to);
        let legs = if step_deg > 0.0 {
            ((length / step_deg).ceil() as usize).max(1)
        } else {
            1
        };

        let points = (1..legs)
            .map(|j| {
                let sample = lerp(from, to, j as f64 / legs as f64);
                self.water.search_water(sample).unwrap_or(sample)
            })
            .collect();

        Leg {
            shape: LegShape::Repaired,
            points,
        }
    }

    /// Bezier leg whose samples are all water, or a repaired leg when no
    /// control point orientation works.
    ///
    /// Control points alternate sides of the chord at growing angles:
    /// +30°, -30°, +60°, -60° and so on.
    pub fn curved_leg(&self, from: Coordinate, to: Coordinate) -> Leg {
        let length = planar_distance(from, to);
        if length <= self.rules.curve_threshold_deg {
            return Leg {
                shape: LegShape::Direct,
                points: Vec::new(),
            };
        }

        let spacing = self.rules.curve_sample_spacing_deg;
        let steps = ((length / spacing).ceil() as usize).max(2);
        let heading = (to.lat - from.lat).atan2(to.lon - from.lon);
        let control_distance = (length / 4.0).min(self.rules.max_control_distance_deg);

        for attempt in 0..self.rules.max_curve_attempts {
            let side = if attempt % 2 == 0 { 1.0 } else { -1.0 };
            let offset = (PI / 6.0) * side * ((attempt / 2) as f64 + 1.0);
            let control = offset_planar(from, control_distance, heading + offset);

            let samples: Option<Vec<Coordinate>> = (1..steps)
                .map(|s| {
                    let point = quadratic_bezier(from, control, to, s as f64 / steps as f64);
                    self.water.is_water(point).then_some(point)
                })
                .collect();

            if let Some(points) = samples {
                return Leg {
                    shape: LegShape::Curved { attempt },
                    points,
                };
            }
        }

        tracing::debug!(from = %from, to = %to, "no clear curve, repairing straight leg");
        self.segmented_leg(from, to, spacing)
    }
}

fn dedupe_consecutive(points: Vec<Coordinate>) -> Vec<Coordinate> {
    let last = points.last().copied();
    let mut out: Vec<Coordinate> = Vec::with_capacity(points.len());
    for point in points {
        if out
            .last()
            .map_or(true, |prev| !prev.approx_eq(&point, DUPLICATE_EPS_DEG))
        {
            out.push(point);
        }
    }
    if out.len() < 2 {
        if let Some(end) = last {
            out.push(end);
        }
    }
    out
}
