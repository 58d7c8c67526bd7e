//! Journey synthesis: distance, schedule, fuel and per-checkpoint reports.

use crate::error::RouteError;
use crate::models::{
    Checkpoint, Coordinate, JourneyDetails, NavigationInfo, RiskLevel, RouteOptions, RouteResult,
    SafetyInfo, WeatherForecast, WeatherRisk, WeatherSnapshot,
};
use crate::ports::PortCatalog;
use crate::risk::{assess, worst_risk};
use crate::rules::JourneyRules;
use crate::spatial::{bearing, distance_km};
use crate::weather::{WeatherError, WeatherProvider};
use chrono::{DateTime, Duration, Utc};
use futures::future::join_all;
use std::sync::Arc;

pub const UNAVAILABLE_DESCRIPTION: &str = "Live weather data unavailable";
pub const UNAVAILABLE_WARNING: &str = "Weather data unavailable";
pub const UNAVAILABLE_RECOMMENDATION: &str = "Check weather service status";
const UNKNOWN_PORT: &str = "Unknown";

/// Format hours as `"{d}d {h}h"`, or `"{h}h"` under a day. Partial hours
/// are truncated.
pub fn format_duration(hours: f64) -> String {
    let hours = if hours.is_finite() && hours > 0.0 { hours } else { 0.0 };
    let days = (hours / 24.0).floor() as u64;
    let rest = (hours % 24.0).floor() as u64;
    if days > 0 {
        format!("{days}d {rest}h")
    } else {
        format!("{rest}h")
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// `start` shifted by `hours`, or an options error when the offset does not
/// fit in a timestamp (a vanishingly small ship speed, for instance).
fn hours_after(start: DateTime<Utc>, hours: f64) -> Result<DateTime<Utc>, RouteError> {
    let millis = (hours * 3_600_000.0).round();
    let out_of_range = || {
        RouteError::InvalidOptions(format!("voyage of {hours:.0} hours is out of range"))
    };
    if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
        return Err(out_of_range());
    }
    Duration::try_milliseconds(millis as i64)
        .and_then(|offset| start.checked_add_signed(offset))
        .ok_or_else(out_of_range)
}

/// Fill gaps with typical readings and round to display precision.
fn normalize_forecast(raw: WeatherForecast) -> WeatherForecast {
    let description = raw
        .description
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| "No data available".to_string());

    WeatherForecast {
        description: Some(description),
        temperature: Some(round_to(raw.temperature.unwrap_or(20.0), 1)),
        wind_speed: Some(raw.wind_speed.unwrap_or(0.0).round()),
        wind_direction: Some(raw.wind_direction.unwrap_or(0.0).round()),
        wave_height: Some(round_to(raw.wave_height.unwrap_or(0.0), 1)),
        precipitation: Some(round_to(raw.precipitation.unwrap_or(0.0), 2)),
        visibility: Some(raw.visibility.unwrap_or(10.0).round()),
        pressure: Some(raw.pressure.unwrap_or(1013.0).round()),
        humidity: Some(raw.humidity.unwrap_or(70.0).round()),
        sea_temp: Some(round_to(raw.sea_temp.unwrap_or(20.0), 1)),
        current_speed: Some(round_to(raw.current_speed.unwrap_or(0.0), 1)),
        current_direction: Some(raw.current_direction.unwrap_or(0.0).round()),
    }
}

fn live_snapshot(forecast: &WeatherForecast) -> WeatherSnapshot {
    WeatherSnapshot {
        description: format!(
            "{} (Live)",
            forecast.description.as_deref().unwrap_or("No data available")
        ),
        temperature: forecast.temperature,
        wind_speed: forecast.wind_speed,
        wind_direction: forecast.wind_direction,
        wave_height: forecast.wave_height,
        precipitation: forecast.precipitation,
        visibility: forecast.visibility,
        pressure: forecast.pressure,
        humidity: forecast.humidity,
        sea_temp: forecast.sea_temp,
        current_speed: forecast.current_speed,
        current_direction: forecast.current_direction,
    }
}

fn unavailable_snapshot() -> WeatherSnapshot {
    WeatherSnapshot {
        description: UNAVAILABLE_DESCRIPTION.to_string(),
        temperature: None,
        wind_speed: None,
        wind_direction: None,
        wave_height: None,
        precipitation: None,
        visibility: None,
        pressure: None,
        humidity: None,
        sea_temp: None,
        current_speed: None,
        current_direction: None,
    }
}

/// Turns a waypoint path into a [`RouteResult`].
///
/// Forecasts are requested for every waypoint concurrently. A failed
/// request only degrades its own checkpoint.
#[derive(Clone)]
pub struct JourneySynthesizer {
    rules: JourneyRules,
    ports: Arc<dyn PortCatalog>,
    weather: Arc<dyn WeatherProvider>,
}

impl JourneySynthesizer {
    pub fn new(
        rules: JourneyRules,
        ports: Arc<dyn PortCatalog>,
        weather: Arc<dyn WeatherProvider>,
    ) -> Self {
        Self {
            rules,
            ports,
            weather,
        }
    }

    pub fn rules(&self) -> &JourneyRules {
        &self.rules
    }

    pub async fn synthesize(
        &self,
        waypoints: &[Coordinate],
        options: &RouteOptions,
        start_port: Coordinate,
        end_port: Coordinate,
    ) -> Result<RouteResult, RouteError> {
        if waypoints.len() < 2 {
            return Err(RouteError::EmptyRoute);
        }
        options.validate()?;
        if let Some(bad) = waypoints.iter().find(|p| !p.is_valid()) {
            return Err(RouteError::InvalidCoordinate {
                lon: bad.lon,
                lat: bad.lat,
            });
        }

        let mut cumulative = Vec::with_capacity(waypoints.len());
        let mut running = 0.0;
        cumulative.push(running);
        for pair in waypoints.windows(2) {
            running += distance_km(pair[0], pair[1]);
            cumulative.push(running);
        }
        let total_km = running;

        let speed_kmh = options.ship_speed * self.rules.knot_to_kmh;
        let duration_hours = total_km / speed_kmh;

        let schedule = cumulative
            .iter()
            .map(|&done| {
                let fraction = if total_km > 0.0 { done / total_km } else { 0.0 };
                hours_after(options.departure_time, duration_hours * fraction)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let forecasts = join_all(
            waypoints
                .iter()
                .zip(schedule.iter())
                .map(|(&point, &at)| self.weather.forecast(point, at)),
        )
        .await;

        let mut checkpoints = Vec::with_capacity(waypoints.len());
        let mut risks = Vec::with_capacity(waypoints.len());
        for (index, forecast) in forecasts.into_iter().enumerate() {
            let (checkpoint, risk) = self.checkpoint(
                index,
                waypoints,
                &cumulative,
                schedule[index],
                forecast,
                options,
                speed_kmh,
                (start_port, end_port),
            );
            checkpoints.push(checkpoint);
            risks.push(risk);
        }

        let weather_risk = worst_risk(&risks).cloned().unwrap_or_default();

        let mut base_rate = self.rules.base_fuel_rate(options.ship_type);
        if options.fuel_efficient {
            base_rate *= self.rules.fuel_efficient_factor;
        }
        let fuel_consumption =
            (total_km * base_rate * self.rules.weather_multiplier(weather_risk.level)).round();
        let fuel_cost_estimate = (fuel_consumption * self.rules.fuel_price_per_ton).round();

        let estimated_arrival = schedule
            .last()
            .copied()
            .unwrap_or(options.departure_time);

        tracing::info!(
            distance_km = total_km.round(),
            checkpoints = checkpoints.len(),
            risk = %weather_risk.level,
            fuel_t = fuel_consumption,
            "journey synthesized"
        );

        Ok(RouteResult {
            waypoints: waypoints.to_vec(),
            distance_km: total_km.round(),
            duration: format_duration(duration_hours),
            fuel_consumption,
            weather_risk,
            route_type: None,
            journey_details: JourneyDetails {
                estimated_arrival,
                fuel_cost_estimate,
                total_duration_hours: duration_hours,
                checkpoints,
            },
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn checkpoint(
        &self,
        index: usize,
        waypoints: &[Coordinate],
        cumulative: &[f64],
        estimated_time: DateTime<Utc>,
        forecast: Result<WeatherForecast, WeatherError>,
        options: &RouteOptions,
        speed_kmh: f64,
        (start_port, end_port): (Coordinate, Coordinate),
    ) -> (Checkpoint, WeatherRisk) {
        let position = waypoints[index];
        let distance_from_start_km = distance_km(start_port, position).round();
        let distance_to_destination_km = distance_km(position, end_port).round();

        let forecast = match forecast {
            Ok(forecast) => normalize_forecast(forecast),
            Err(err) => {
                tracing::warn!(index, %position, error = %err, "weather lookup failed, checkpoint degraded");
                let risk = WeatherRisk {
                    level: RiskLevel::Low,
                    description: UNAVAILABLE_WARNING.to_string(),
                    recommendations: vec![UNAVAILABLE_RECOMMENDATION.to_string()],
                };
                let checkpoint = Checkpoint {
                    position,
                    estimated_time,
                    distance_km: cumulative[index].round(),
                    weather_forecast: unavailable_snapshot(),
                    navigation_info: NavigationInfo {
                        distance_from_start_km,
                        distance_to_destination_km,
                        distance_to_next_km: 0.0,
                        bearing: 0.0,
                        estimated_speed: options.ship_speed,
                        fuel_to_next: 0.0,
                        time_to_next: format_duration(0.0),
                    },
                    safety_info: SafetyInfo {
                        nearest_port: UNKNOWN_PORT.to_string(),
                        nearest_port_distance_km: 0.0,
                        risk_level: RiskLevel::Low,
                        warnings: vec![UNAVAILABLE_WARNING.to_string()],
                        recommendations: vec![UNAVAILABLE_RECOMMENDATION.to_string()],
                    },
                };
                return (checkpoint, risk);
            }
        };

        let (distance_to_next_km, heading) = match waypoints.get(index + 1) {
            Some(&next) => (distance_km(position, next), bearing(position, next)),
            None => (0.0, 0.0),
        };

        let assessment = assess(&forecast);
        let risk = assessment.risk;
        let (nearest_port, nearest_port_distance_km) = match self.ports.nearest_port(position) {
            Some(port) => (port.name, port.distance_km.round()),
            None => (UNKNOWN_PORT.to_string(), 0.0),
        };

        let checkpoint = Checkpoint {
            position,
            estimated_time,
            distance_km: cumulative[index].round(),
            weather_forecast: live_snapshot(&forecast),
            navigation_info: NavigationInfo {
                distance_from_start_km,
                distance_to_destination_km,
                distance_to_next_km: distance_to_next_km.round(),
                bearing: heading.round(),
                estimated_speed: options.ship_speed,
                fuel_to_next: (distance_to_next_km * self.rules.checkpoint_fuel_rate_t_per_km)
                    .round(),
                time_to_next: format_duration(distance_to_next_km / speed_kmh),
            },
            safety_info: SafetyInfo {
                nearest_port,
                nearest_port_distance_km,
                risk_level: risk.level,
                warnings: assessment.hazards.iter().map(|h| h.to_string()).collect(),
                recommendations: risk.recommendations.clone(),
            },
        };
        (checkpoint, risk)
    }
}
