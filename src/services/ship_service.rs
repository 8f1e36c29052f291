//! Servicio de Ships
//!
//! Orquesta validación, cálculo de rating y merge-on-update, y delega la
//! persistencia al `ShipStore`.

use std::sync::Arc;
use tracing::{debug, info};

use crate::dto::ShipPayload;
use crate::models::{truncate_to_day, Ship, ShipDraft};
use crate::query::{Page, ShipFilter, ShipOrder, ShipQuery};
use crate::repositories::ShipStore;
use crate::services::rating::compute_rating;
use crate::services::ship_validator::{validate_for_create, validate_for_update};
use crate::utils::clock::Clock;
use crate::utils::errors::{not_found_error, AppResult};

#[derive(Clone)]
pub struct ShipService {
    store: Arc<dyn ShipStore>,
    clock: Arc<dyn Clock>,
}

impl ShipService {
    pub fn new(store: Arc<dyn ShipStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Crear un ship: validar, calcular rating y persistir
    pub async fn add(&self, payload: ShipPayload) -> AppResult<Ship> {
        let current_year = self.clock.current_year();
        let draft = validate_for_create(payload, current_year)?;
        let rating = compute_rating(draft.is_used, draft.prod_date, draft.speed, current_year)?;

        let ship = self.store.insert(draft.rated(rating)).await?;
        info!("Ship {} created with rating {}", ship.id, ship.rating);
        Ok(ship)
    }

    pub async fn get(&self, id: i64) -> AppResult<Option<Ship>> {
        self.store.find_by_id(id).await
    }

    /// Actualizar un ship con un payload parcial
    pub async fn update(&self, id: i64, payload: ShipPayload) -> AppResult<Ship> {
        let stored = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Ship", id))?;

        let current_year = self.clock.current_year();
        validate_for_update(&payload, current_year)?;

        let merged = merge_payload(stored.draft(), payload);
        let rating = compute_rating(merged.is_used, merged.prod_date, merged.speed, current_year)?;

        let ship = self.store.update(&Ship::from_new(id, merged.rated(rating))).await?;
        info!("Ship {} updated with rating {}", ship.id, ship.rating);
        Ok(ship)
    }

    pub async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        self.store.delete_by_id(id).await?;
        info!("Ship {} deleted", id);
        Ok(())
    }

    pub async fn get_filtered_ships(
        &self,
        filter: &ShipFilter,
        order: Option<ShipOrder>,
        page: Page,
    ) -> AppResult<Vec<Ship>> {
        let query = ShipQuery::new(filter, order, page);
        debug!("Listing ships with {} predicates, page {:?}", query.predicates.len(), page);
        self.store.find_page(&query).await
    }

    pub async fn get_count(&self, filter: &ShipFilter) -> AppResult<i64> {
        self.store.count_matching(&filter.predicates()).await
    }

    /// Total de registros sin filtros
    pub async fn count_all(&self) -> AppResult<i64> {
        self.store.count().await
    }
}

/// Los campos presentes en el payload pisan los almacenados
fn merge_payload(stored: ShipDraft, payload: ShipPayload) -> ShipDraft {
    ShipDraft {
        name: payload.name.unwrap_or(stored.name),
        planet: payload.planet.unwrap_or(stored.planet),
        ship_type: payload.ship_type.unwrap_or(stored.ship_type),
        prod_date: payload.prod_date.map(truncate_to_day).unwrap_or(stored.prod_date),
        speed: payload.speed.unwrap_or(stored.speed),
        crew_size: payload.crew_size.unwrap_or(stored.crew_size),
        is_used: payload.is_used.unwrap_or(stored.is_used),
    }
}
