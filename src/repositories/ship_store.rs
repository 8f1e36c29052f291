//! Contrato de persistencia de Ships
//!
//! El servicio solo conoce este trait; `PgShipRepository` e
//! `InMemoryShipStore` lo implementan.

use async_trait::async_trait;

use crate::models::{NewShip, Ship};
use crate::query::{Predicate, ShipQuery};
use crate::utils::errors::AppError;

#[async_trait]
pub trait ShipStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Ship>, AppError>;

    /// Insertar un registro nuevo; el store asigna el id
    async fn insert(&self, ship: NewShip) -> Result<Ship, AppError>;

    /// Reescribir un registro existente
    async fn update(&self, ship: &Ship) -> Result<Ship, AppError>;

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;

    async fn count(&self) -> Result<i64, AppError>;

    /// Página filtrada y ordenada
    async fn find_page(&self, query: &ShipQuery) -> Result<Vec<Ship>, AppError>;

    /// Cardinalidad del conjunto filtrado, sin materializarlo
    async fn count_matching(&self, predicates: &[Predicate]) -> Result<i64, AppError>;
}
