//! Tunable thresholds for land avoidance and journey estimation.

use crate::models::{RiskLevel, ShipType};
use serde::{Deserialize, Serialize};

/// Configuration for water classification and path construction.
///
/// Distances are planar degrees unless the name says otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationRules {
    /// Clearance required from any coastline edge outside margin regions
    pub default_margin_deg: f64,
    /// A point this close to a shipping lane counts as water inside lane regions
    pub lane_tolerance_deg: f64,
    /// Lane points closer than this to a coastline vertex are rejected
    pub shore_exclusion_deg: f64,
    /// First probe radius when searching for nearby water
    pub probe_step_deg: f64,
    /// Probe radius cap
    pub probe_max_radius_deg: f64,
    /// Offset returned when no water is found within the probe cap (lon, lat)
    pub fallback_offset_deg: (f64, f64),
    /// Step length for the segmented strategy
    pub segment_step_deg: f64,
    /// Legs longer than this are curved; shorter legs connect directly
    pub curve_threshold_deg: f64,
    /// Approximate spacing between curve samples
    pub curve_sample_spacing_deg: f64,
    /// Upper bound on the Bezier control point distance
    pub max_control_distance_deg: f64,
    /// Number of control point orientations tried before falling back
    pub max_curve_attempts: usize,
}

impl Default for NavigationRules {
    fn default() -> Self {
        Self {
            default_margin_deg: 0.5,
            lane_tolerance_deg: 1.5,
            shore_exclusion_deg: 0.2,
            probe_step_deg: 0.25,
            probe_max_radius_deg: 2.0,
            fallback_offset_deg: (1.5, -1.0),
            segment_step_deg: 1.0,
            curve_threshold_deg: 5.0,
            curve_sample_spacing_deg: 3.0,
            max_control_distance_deg: 4.0,
            max_curve_attempts: 12,
        }
    }
}

/// Configuration for journey metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JourneyRules {
    /// km/h per knot
    pub knot_to_kmh: f64,
    /// Fuel burned per km on each checkpoint leg, tons
    pub checkpoint_fuel_rate_t_per_km: f64,
    /// Multiplier applied to the base rate when the fuel-efficient option is set
    pub fuel_efficient_factor: f64,
    /// USD per ton of fuel
    pub fuel_price_per_ton: f64,
    pub medium_risk_fuel_multiplier: f64,
    pub high_risk_fuel_multiplier: f64,
}

impl Default for JourneyRules {
    fn default() -> Self {
        Self {
            knot_to_kmh: 1.852,
            checkpoint_fuel_rate_t_per_km: 0.3,
            fuel_efficient_factor: 0.85,
            fuel_price_per_ton: 500.0,
            medium_risk_fuel_multiplier: 1.15,
            high_risk_fuel_multiplier: 1.3,
        }
    }
}

impl JourneyRules {
    /// Base fuel burn in tons per km for a ship type.
    pub fn base_fuel_rate(&self, ship_type: ShipType) -> f64 {
        match ship_type {
            ShipType::Container => 0.30,
            ShipType::Bulk => 0.25,
            ShipType::Tanker => 0.28,
            ShipType::Cruise => 0.35,
            ShipType::Ferry => 0.20,
        }
    }

    pub fn weather_multiplier(&self, level: RiskLevel) -> f64 {
        match level {
            RiskLevel::Low => 1.0,
            RiskLevel::Medium => self.medium_risk_fuel_multiplier,
            RiskLevel::High => self.high_risk_fuel_multiplier,
        }
    }
}
