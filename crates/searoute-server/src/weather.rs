//! Open-Meteo weather collaborator with a short-lived point cache.

use crate::cache::{self, CacheEntry, Freshness};
use crate::config::Config;
use async_trait::async_trait;
use chrono::{DateTime, Timelike, Utc};
use dashmap::DashMap;
use reqwest::Client;
use searoute_core::weather::{StaticWeather, WeatherError, WeatherProvider};
use searoute_core::{Coordinate, WeatherForecast};
use serde::Deserialize;
use std::sync::Arc;
use std::time::{Duration, Instant};

const KMH_PER_KNOT: f64 = 1.852;

/// Build the weather collaborator selected by `config`.
pub fn weather_provider(config: &Config) -> Arc<dyn WeatherProvider> {
    if config.offline_weather {
        tracing::info!("offline weather: serving calm conditions");
        Arc::new(StaticWeather::calm())
    } else {
        Arc::new(OpenMeteoWeather::new(config))
    }
}

#[derive(Debug, Clone)]
struct WeatherCacheEntry {
    fetched_at: Instant,
    forecast: WeatherForecast,
}

impl CacheEntry for WeatherCacheEntry {
    fn fetched_at(&self) -> Instant {
        self.fetched_at
    }
}

#[derive(Debug, Deserialize)]
struct HourlyResponse<T> {
    hourly: Option<T>,
}

#[derive(Debug, Default, Deserialize)]
struct ForecastHourly {
    #[serde(default)]
    temperature_2m: Vec<Option<f64>>,
    #[serde(default)]
    relative_humidity_2m: Vec<Option<f64>>,
    #[serde(default)]
    precipitation: Vec<Option<f64>>,
    #[serde(default)]
    weather_code: Vec<Option<f64>>,
    #[serde(default)]
    pressure_msl: Vec<Option<f64>>,
    #[serde(default)]
    visibility: Vec<Option<f64>>,
    #[serde(default)]
    wind_speed_10m: Vec<Option<f64>>,
    #[serde(default)]
    wind_direction_10m: Vec<Option<f64>>,
}

#[derive(Debug, Default, Deserialize)]
struct MarineHourly {
    #[serde(default)]
    wave_height: Vec<Option<f64>>,
    #[serde(default)]
    sea_surface_temperature: Vec<Option<f64>>,
    #[serde(default)]
    ocean_current_velocity: Vec<Option<f64>>,
    #[serde(default)]
    ocean_current_direction: Vec<Option<f64>>,
}

fn first(values: &[Option<f64>]) -> Option<f64> {
    values.first().copied().flatten().filter(|v| v.is_finite())
}

/// WMO weather interpretation code to a short description.
pub fn describe_weather_code(code: u32) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 | 48 => "Fog",
        51 | 53 | 55 => "Drizzle",
        56 | 57 => "Freezing drizzle",
        61 | 63 => "Rain",
        65 => "Heavy rain",
        66 | 67 => "Freezing rain",
        71 | 73 | 75 | 77 => "Snow",
        80 | 81 => "Rain showers",
        82 => "Violent rain showers",
        85 | 86 => "Snow showers",
        95 => "Thunderstorm",
        96 | 99 => "Thunderstorm with hail",
        _ => "Unknown conditions",
    }
}

fn hour_of(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:00").to_string()
}

fn cache_key(position: Coordinate, at: DateTime<Utc>) -> String {
    format!("{:.2}:{:.2}:{}", position.lat, position.lon, hour_of(at))
}

/// Point forecasts from the Open-Meteo forecast and marine APIs.
///
/// Both APIs are queried concurrently for the waypoint's hour. A marine
/// failure only drops the sea-state fields; a forecast failure falls back
/// to a stale cache entry when one is recent enough.
pub struct OpenMeteoWeather {
    client: Client,
    forecast_url: String,
    marine_url: String,
    cache: DashMap<String, WeatherCacheEntry>,
    cache_ttl: Duration,
    cache_max_entries: usize,
}

impl OpenMeteoWeather {
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.weather_timeout_s.max(1)))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            forecast_url: config.weather_url.clone(),
            marine_url: config.marine_url.clone(),
            cache: DashMap::new(),
            cache_ttl: Duration::from_secs(config.weather_cache_ttl_s.max(30)),
            cache_max_entries: config.weather_cache_max_entries.max(1),
        }
    }

    async fn fetch_forecast(
        &self,
        position: Coordinate,
        at: DateTime<Utc>,
    ) -> Result<ForecastHourly, WeatherError> {
        let hour = hour_of(at);
        let response = self
            .client
            .get(&self.forecast_url)
            .query(&[
                ("latitude", position.lat.to_string()),
                ("longitude", position.lon.to_string()),
                (
                    "hourly",
                    "temperature_2m,relative_humidity_2m,precipitation,weather_code,pressure_msl,visibility,wind_speed_10m,wind_direction_10m"
                        .to_string(),
                ),
                ("wind_speed_unit", "kn".to_string()),
                ("timezone", "UTC".to_string()),
                ("start_hour", hour.clone()),
                ("end_hour", hour),
            ])
            .send()
            .await
            .map_err(|err| WeatherError::Http(err.to_string()))?;

        if !response.status().is_success() {
            return Err(WeatherError::Status(response.status().as_u16()));
        }

        let payload: HourlyResponse<ForecastHourly> = response
            .json()
            .await
            .map_err(|err| WeatherError::Http(err.to_string()))?;
        payload
            .hourly
            .ok_or_else(|| WeatherError::MissingData("hourly forecast".to_string()))
    }

    async fn fetch_marine(
        &self,
        position: Coordinate,
        at: DateTime<Utc>,
    ) -> Result<MarineHourly, WeatherError> {
        let hour = hour_of(at);
        let response = self
            .client
            .get(&self.marine_url)
            .query(&[
                ("latitude", position.lat.to_string()),
                ("longitude", position.lon.to_string()),
                (
                    "hourly",
                    "wave_height,sea_surface_temperature,ocean_current_velocity,ocean_current_direction"
                        .to_string(),
                ),
                ("timezone", "UTC".to_string()),
                ("start_hour", hour.clone()),
                ("end_hour", hour),
            ])
            .send()
            .await
            .map_err(|err| WeatherError::Http(err.to_string()))?;

        if !response.status().is_success() {
            return Err(WeatherError::Status(response.status().as_u16()));
        }

        let payload: HourlyResponse<MarineHourly> = response
            .json()
            .await
            .map_err(|err| WeatherError::Http(err.to_string()))?;
        payload
            .hourly
            .ok_or_else(|| WeatherError::MissingData("hourly marine data".to_string()))
    }
}

fn merge(forecast: ForecastHourly, marine: Option<MarineHourly>) -> WeatherForecast {
    let marine = marine.unwrap_or_default();
    WeatherForecast {
        description: first(&forecast.weather_code)
            .map(|code| describe_weather_code(code.max(0.0) as u32).to_string()),
        temperature: first(&forecast.temperature_2m),
        wind_speed: first(&forecast.wind_speed_10m),
        wind_direction: first(&forecast.wind_direction_10m),
        wave_height: first(&marine.wave_height),
        precipitation: first(&forecast.precipitation),
        visibility: first(&forecast.visibility).map(|m| m / 1000.0),
        pressure: first(&forecast.pressure_msl),
        humidity: first(&forecast.relative_humidity_2m),
        sea_temp: first(&marine.sea_surface_temperature),
        current_speed: first(&marine.ocean_current_velocity).map(|kmh| kmh / KMH_PER_KNOT),
        current_direction: first(&marine.ocean_current_direction),
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoWeather {
    async fn forecast(
        &self,
        position: Coordinate,
        at: DateTime<Utc>,
    ) -> Result<WeatherForecast, WeatherError> {
        // Open-Meteo serves whole hours.
        let at = at
            .with_minute(0)
            .and_then(|t| t.with_second(0))
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or(at);
        let key = cache_key(position, at);

        let mut stale: Option<WeatherForecast> = None;
        if let Some(entry) = self.cache.get(&key) {
            match cache::freshness(entry.fetched_at.elapsed(), self.cache_ttl) {
                Freshness::Fresh => return Ok(entry.forecast.clone()),
                Freshness::Stale => stale = Some(entry.forecast.clone()),
                Freshness::Expired => {}
            }
        }

        let (forecast, marine) = tokio::join!(
            self.fetch_forecast(position, at),
            self.fetch_marine(position, at)
        );

        let marine = match marine {
            Ok(marine) => Some(marine),
            Err(err) => {
                tracing::debug!(%position, error = %err, "marine data unavailable");
                None
            }
        };

        match forecast {
            Ok(hourly) => {
                let forecast = merge(hourly, marine);
                self.cache.insert(
                    key,
                    WeatherCacheEntry {
                        fetched_at: Instant::now(),
                        forecast: forecast.clone(),
                    },
                );
                cache::prune_cache(&self.cache, self.cache_max_entries, self.cache_ttl);
                Ok(forecast)
            }
            Err(err) => match stale {
                Some(forecast) => {
                    tracing::warn!(%position, error = %err, "weather fetch failed, using stale cache");
                    Ok(forecast)
                }
                None => Err(err),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn merge_converts_units() {
        let forecast = ForecastHourly {
            weather_code: vec![Some(61.0)],
            visibility: vec![Some(2500.0)],
            wind_speed_10m: vec![Some(18.0)],
            ..ForecastHourly::default()
        };
        let marine = MarineHourly {
            wave_height: vec![Some(1.7)],
            ocean_current_velocity: vec![Some(1.852)],
            ..MarineHourly::default()
        };

        let merged = merge(forecast, Some(marine));
        assert_eq!(merged.description.as_deref(), Some("Rain"));
        assert_eq!(merged.visibility, Some(2.5));
        assert_eq!(merged.wind_speed, Some(18.0));
        assert_eq!(merged.wave_height, Some(1.7));
        assert!((merged.current_speed.unwrap() - 1.0).abs() < 1e-12);
        assert_eq!(merged.temperature, None);
    }

    #[test]
    fn merge_without_marine_leaves_sea_state_empty() {
        let merged = merge(ForecastHourly::default(), None);
        assert_eq!(merged, WeatherForecast::default());
    }

    #[test]
    fn hourly_payload_tolerates_nulls() {
        let payload: HourlyResponse<ForecastHourly> = serde_json::from_str(
            r#"{"hourly": {"time": ["2026-05-10T08:00"], "temperature_2m": [null], "wind_speed_10m": [12.5]}}"#,
        )
        .unwrap();
        let hourly = payload.hourly.unwrap();
        assert_eq!(first(&hourly.temperature_2m), None);
        assert_eq!(first(&hourly.wind_speed_10m), Some(12.5));
    }

    #[test]
    fn cache_key_groups_by_hour_and_rounded_position() {
        let at = Utc.with_ymd_and_hms(2026, 5, 10, 8, 0, 0).unwrap();
        assert_eq!(
            cache_key(Coordinate::new(55.271, 25.268), at),
            "25.27:55.27:2026-05-10T08:00"
        );
    }

    #[test]
    fn unknown_codes_have_a_description() {
        assert_eq!(describe_weather_code(0), "Clear sky");
        assert_eq!(describe_weather_code(1234), "Unknown conditions");
    }
}
