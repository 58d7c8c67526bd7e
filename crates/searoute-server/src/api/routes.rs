//! REST API routes.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::state::AppState;
use searoute_core::ports::{Port, PortCatalog};
use searoute_core::{Coordinate, NearestPort, RouteError, RouteOptions, RouteResult, ShipType};

/// Create the API router.
pub fn create_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/v1/routes/plan", post(plan_route))
        .route("/v1/routes/alternatives", post(route_alternatives))
        .route("/v1/water/check", post(check_water))
        .route("/v1/ports", get(list_ports))
        .route("/v1/ports/nearest", get(nearest_port))
}

/// Error body returned by every handler: `{"error": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    Route(RouteError),
    NotFound(String),
}

impl From<RouteError> for ApiError {
    fn from(err: RouteError) -> Self {
        ApiError::Route(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Route(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlanRouteRequest {
    pub start: Coordinate,
    pub end: Coordinate,
    pub ship_speed: f64,
    /// Defaults to the time the request is received.
    #[serde(default)]
    pub departure_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub consider_weather: bool,
    #[serde(default)]
    pub fuel_efficient: bool,
    #[serde(default)]
    pub ship_type: ShipType,
}

impl PlanRouteRequest {
    fn options(&self) -> RouteOptions {
        RouteOptions {
            ship_speed: self.ship_speed,
            departure_time: self.departure_time.unwrap_or_else(Utc::now),
            consider_weather: self.consider_weather,
            fuel_efficient: self.fuel_efficient,
            ship_type: self.ship_type,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AlternativesResponse {
    pub routes: Vec<RouteResult>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PositionQuery {
    pub lon: f64,
    pub lat: f64,
}

impl PositionQuery {
    fn coordinate(self) -> Result<Coordinate, ApiError> {
        let point = Coordinate::new(self.lon, self.lat);
        if point.is_valid() {
            Ok(point)
        } else {
            Err(RouteError::InvalidCoordinate {
                lon: self.lon,
                lat: self.lat,
            }
            .into())
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WaterCheckResponse {
    pub water: bool,
    pub safe_point: Coordinate,
}

async fn plan_route(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PlanRouteRequest>,
) -> Result<Json<RouteResult>, ApiError> {
    let options = request.options();
    let result = state
        .planner()
        .plan_route(request.start, request.end, &options)
        .await?;

    tracing::info!(
        start = %request.start,
        end = %request.end,
        distance_km = result.distance_km,
        waypoints = result.waypoints.len(),
        "route planned"
    );
    Ok(Json(result))
}

async fn route_alternatives(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PlanRouteRequest>,
) -> Result<Json<AlternativesResponse>, ApiError> {
    let options = request.options();
    let routes = state
        .planner()
        .compute_alternatives(request.start, request.end, &options)
        .await?;
    Ok(Json(AlternativesResponse { routes }))
}

async fn check_water(
    State(state): State<Arc<AppState>>,
    Json(position): Json<PositionQuery>,
) -> Result<Json<WaterCheckResponse>, ApiError> {
    let point = position.coordinate()?;
    let classifier = state.planner().classifier();
    Ok(Json(WaterCheckResponse {
        water: classifier.is_water(point),
        safe_point: classifier.find_safe_water_point(point),
    }))
}

async fn list_ports(State(state): State<Arc<AppState>>) -> Json<Vec<Port>> {
    Json(state.ports().ports().to_vec())
}

async fn nearest_port(
    State(state): State<Arc<AppState>>,
    Query(position): Query<PositionQuery>,
) -> Result<Json<NearestPort>, ApiError> {
    let point = position.coordinate()?;
    state
        .ports()
        .nearest_port(point)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("no ports configured".to_string()))
}
