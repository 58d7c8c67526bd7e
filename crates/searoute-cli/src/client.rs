//! Blocking HTTP client for the sea route server.

use anyhow::{bail, Context, Result};
use reqwest::blocking::Client;
use searoute_core::{Coordinate, RouteResult, ShipType};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct PlanRequest {
    pub start: Coordinate,
    pub end: Coordinate,
    pub ship_speed: f64,
    pub ship_type: ShipType,
    pub consider_weather: bool,
    pub fuel_efficient: bool,
}

#[derive(Debug, Deserialize)]
struct AlternativesResponse {
    routes: Vec<RouteResult>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

pub struct RouteClient {
    client: Client,
    base_url: String,
}

impl RouteClient {
    /// Create a client for a server at `base_url` (e.g. "http://localhost:3000").
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn plan(&self, request: &PlanRequest) -> Result<RouteResult> {
        self.post("/v1/routes/plan", request)
    }

    pub fn alternatives(&self, request: &PlanRequest) -> Result<Vec<RouteResult>> {
        let response: AlternativesResponse = self.post("/v1/routes/alternatives", request)?;
        Ok(response.routes)
    }

    fn post<T: DeserializeOwned>(&self, path: &str, body: &PlanRequest) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .with_context(|| format!("failed to reach {url}"))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .map(|body| body.error)
                .unwrap_or_else(|_| status.to_string());
            bail!("server rejected request ({status}): {message}");
        }

        response.json().context("failed to parse route response")
    }
}
