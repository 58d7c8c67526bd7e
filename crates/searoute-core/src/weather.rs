//! Weather collaborator interface.

use crate::models::{Coordinate, WeatherForecast};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum WeatherError {
    #[error("weather request failed: {0}")]
    Http(String),
    #[error("weather service returned status {0}")]
    Status(u16),
    #[error("weather response missing {0}")]
    MissingData(String),
    #[error("weather unavailable: {0}")]
    Unavailable(String),
}

/// Point forecast lookup. Implementations may fail per call; callers
/// recover locally.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn forecast(
        &self,
        position: Coordinate,
        at: DateTime<Utc>,
    ) -> Result<WeatherForecast, WeatherError>;
}

/// Returns the same forecast for every point and time.
#[derive(Debug, Clone, Default)]
pub struct StaticWeather {
    forecast: WeatherForecast,
}

impl StaticWeather {
    pub fn new(forecast: WeatherForecast) -> Self {
        Self { forecast }
    }

    /// Calm seas with typical readings.
    pub fn calm() -> Self {
        Self::new(WeatherForecast {
            description: Some("Clear sky".to_string()),
            temperature: Some(20.0),
            wind_speed: Some(8.0),
            wind_direction: Some(0.0),
            wave_height: Some(0.8),
            precipitation: Some(0.0),
            visibility: Some(10.0),
            pressure: Some(1013.0),
            humidity: Some(70.0),
            sea_temp: Some(20.0),
            current_speed: Some(0.5),
            current_direction: Some(0.0),
        })
    }
}

#[async_trait]
impl WeatherProvider for StaticWeather {
    async fn forecast(
        &self,
        _position: Coordinate,
        _at: DateTime<Utc>,
    ) -> Result<WeatherForecast, WeatherError> {
        Ok(self.forecast.clone())
    }
}

/// Provider that always fails. Used when forecasts are disabled.
#[derive(Debug, Clone, Default)]
pub struct NoWeather;

#[async_trait]
impl WeatherProvider for NoWeather {
    async fn forecast(
        &self,
        _position: Coordinate,
        _at: DateTime<Utc>,
    ) -> Result<WeatherForecast, WeatherError> {
        Err(WeatherError::Unavailable("forecasts disabled".to_string()))
    }
}
