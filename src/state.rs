//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::ShipStore;
use crate::services::ShipService;
use crate::utils::clock::{Clock, SystemClock};

#[derive(Clone)]
pub struct AppState {
    pub ships: ShipService,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn ShipStore>, config: EnvironmentConfig) -> Self {
        Self::with_clock(store, Arc::new(SystemClock), config)
    }

    /// Estado con un reloj explícito (tests)
    pub fn with_clock(store: Arc<dyn ShipStore>, clock: Arc<dyn Clock>, config: EnvironmentConfig) -> Self {
        Self {
            ships: ShipService::new(store, clock),
            config,
        }
    }
}
