//! Process-wide planner and catalogs, shared read-only across handlers.

use crate::config::Config;
use crate::weather::weather_provider;
use searoute_core::{
    JourneyRules, JourneySynthesizer, LandModel, NavigationRules, RoutePlanner, StaticPortCatalog,
};
use std::sync::Arc;

pub struct AppState {
    planner: RoutePlanner,
    ports: Arc<StaticPortCatalog>,
    config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let land = Arc::new(LandModel::world());
        let ports = Arc::new(StaticPortCatalog::builtin());
        let journey = JourneySynthesizer::new(
            JourneyRules::default(),
            ports.clone(),
            weather_provider(&config),
        );
        tracing::info!(
            landmasses = land.landmasses.len(),
            lanes = land.lanes.len(),
            ports = ports.ports().len(),
            "land model loaded"
        );

        Self {
            planner: RoutePlanner::new(land, NavigationRules::default(), journey),
            ports,
            config,
        }
    }

    pub fn planner(&self) -> &RoutePlanner {
        &self.planner
    }

    pub fn ports(&self) -> &StaticPortCatalog {
        &self.ports
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
