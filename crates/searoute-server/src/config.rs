//! Server configuration from environment.

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub weather_url: String,
    pub marine_url: String,
    pub weather_timeout_s: u64,
    pub weather_cache_ttl_s: u64,
    pub weather_cache_max_entries: usize,
    /// Serve fixed calm conditions instead of querying Open-Meteo.
    pub offline_weather: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SEAROUTE_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3000),
            weather_url: env::var("SEAROUTE_WEATHER_URL")
                .unwrap_or_else(|_| "https://api.open-meteo.com/v1/forecast".to_string()),
            marine_url: env::var("SEAROUTE_MARINE_URL")
                .unwrap_or_else(|_| "https://marine-api.open-meteo.com/v1/marine".to_string()),
            weather_timeout_s: env::var("SEAROUTE_WEATHER_TIMEOUT_S")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            weather_cache_ttl_s: env::var("SEAROUTE_WEATHER_CACHE_TTL_S")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(900),
            weather_cache_max_entries: env::var("SEAROUTE_WEATHER_CACHE_MAX")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(2048),
            offline_weather: env::var("SEAROUTE_OFFLINE_WEATHER")
                .ok()
                .map(|s| matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }
}
