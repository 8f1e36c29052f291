//! Store en memoria
//!
//! Interpreta los mismos predicados que el repositorio SQL. Se usa en tests
//! y con `STORAGE_BACKEND=memory`.

use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::models::{NewShip, Ship};
use crate::query::{matches_all, Predicate, ShipQuery};
use crate::repositories::ship_store::ShipStore;
use crate::utils::errors::{not_found_error, AppError};

#[derive(Default)]
struct Inner {
    ships: BTreeMap<i64, Ship>,
    last_id: i64,
}

#[derive(Default)]
pub struct InMemoryShipStore {
    inner: RwLock<Inner>,
}

impl InMemoryShipStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShipStore for InMemoryShipStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Ship>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.ships.get(&id).cloned())
    }

    async fn insert(&self, ship: NewShip) -> Result<Ship, AppError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;

        let stored = Ship::from_new(inner.last_id, ship);
        inner.ships.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, ship: &Ship) -> Result<Ship, AppError> {
        let mut inner = self.inner.write().await;
        match inner.ships.get_mut(&ship.id) {
            Some(slot) => {
                *slot = ship.clone();
                Ok(ship.clone())
            }
            None => Err(not_found_error("Ship", ship.id)),
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let mut inner = self.inner.write().await;
        inner.ships.remove(&id);
        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.ships.len() as i64)
    }

    async fn find_page(&self, query: &ShipQuery) -> Result<Vec<Ship>, AppError> {
        let inner = self.inner.read().await;
        let sort_field = query.sort_field();

        // BTreeMap itera por id ascendente y sort_by es estable: empate -> id
        let mut matching: Vec<&Ship> = inner
            .ships
            .values()
            .filter(|ship| matches_all(&query.predicates, ship))
            .collect();
        matching.sort_by(|a, b| {
            sort_field
                .value_of(a)
                .partial_cmp(&sort_field.value_of(b))
                .unwrap_or(Ordering::Equal)
        });

        let offset = usize::try_from(query.page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(query.page.limit()).unwrap_or(usize::MAX);

        Ok(matching.into_iter().skip(offset).take(limit).cloned().collect())
    }

    async fn count_matching(&self, predicates: &[Predicate]) -> Result<i64, AppError> {
        let inner = self.inner.read().await;
        let count = inner
            .ships
            .values()
            .filter(|ship| matches_all(predicates, ship))
            .count();
        Ok(count as i64)
    }
}
