//! Threshold-based weather risk scoring.

use crate::models::{RiskLevel, WeatherForecast, WeatherRisk};

pub const HIGH_WIND_KNOTS: f64 = 30.0;
pub const MODERATE_WIND_KNOTS: f64 = 20.0;
pub const HIGH_WAVES_M: f64 = 4.0;
pub const MODERATE_WAVES_M: f64 = 2.0;
pub const POOR_VISIBILITY_KM: f64 = 1.0;
pub const REDUCED_VISIBILITY_KM: f64 = 3.0;

const GOOD_CONDITIONS: &str = "Good conditions";

/// A scored forecast together with the individual hazards that raised it.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskAssessment {
    pub risk: WeatherRisk,
    pub hazards: Vec<&'static str>,
}

/// Score a forecast.
///
/// Each triggered hazard can only raise the level. Missing readings never
/// trigger a hazard.
pub fn assess_risk(forecast: &WeatherForecast) -> WeatherRisk {
    assess(forecast).risk
}

/// Like [`assess_risk`], keeping the hazard list for per-checkpoint warnings.
pub fn assess(forecast: &WeatherForecast) -> RiskAssessment {
    let mut level = RiskLevel::Low;
    let mut hazards: Vec<&'static str> = Vec::new();
    let mut recommendations: Vec<String> = Vec::new();

    let mut raise = |to: RiskLevel, hazard: &'static str, advice: &[&str]| {
        level = level.max(to);
        hazards.push(hazard);
        recommendations.extend(advice.iter().map(|s| s.to_string()));
    };

    if let Some(wind) = forecast.wind_speed {
        if wind > HIGH_WIND_KNOTS {
            raise(
                RiskLevel::High,
                "High winds",
                &["Consider rerouting or delaying departure"],
            );
        } else if wind > MODERATE_WIND_KNOTS {
            raise(RiskLevel::Medium, "Moderate winds", &["Monitor wind conditions"]);
        }
    }

    if let Some(waves) = forecast.wave_height {
        if waves > HIGH_WAVES_M {
            raise(RiskLevel::High, "High waves", &["Avoid the area if possible"]);
        } else if waves > MODERATE_WAVES_M {
            raise(RiskLevel::Medium, "Moderate waves", &["Prepare for rough seas"]);
        }
    }

    if let Some(visibility) = forecast.visibility {
        if visibility < POOR_VISIBILITY_KM {
            raise(
                RiskLevel::High,
                "Poor visibility",
                &["Use radar navigation", "Reduce speed"],
            );
        } else if visibility < REDUCED_VISIBILITY_KM {
            raise(RiskLevel::Medium, "Reduced visibility", &["Maintain a sharp lookout"]);
        }
    }

    let description = if hazards.is_empty() {
        GOOD_CONDITIONS.to_string()
    } else {
        hazards.join(", ")
    };

    RiskAssessment {
        risk: WeatherRisk {
            level,
            description,
            recommendations,
        },
        hazards,
    }
}

/// Highest-level risk in `risks`; the earliest wins ties.
pub fn worst_risk<'a, I>(risks: I) -> Option<&'a WeatherRisk>
where
    I: IntoIterator<Item = &'a WeatherRisk>,
{
    risks.into_iter().fold(None, |worst: Option<&WeatherRisk>, risk| match worst {
        Some(current) if current.level >= risk.level => Some(current),
        _ => Some(risk),
    })
}
