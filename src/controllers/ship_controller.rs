use crate::dto::{ShipListParams, ShipPayload};
use crate::models::Ship;
use crate::services::ShipService;
use crate::utils::errors::{bad_address_error, not_found_error, AppError};
use crate::utils::validation::validate_positive_id;

pub struct ShipController {
    service: ShipService,
}

impl ShipController {
    pub fn new(service: ShipService) -> Self {
        Self { service }
    }

    pub async fn list(&self, params: ShipListParams) -> Result<Vec<Ship>, AppError> {
        let filter = params.filter()?;
        self.service
            .get_filtered_ships(&filter, Some(params.order()), params.page())
            .await
    }

    pub async fn count(&self, params: ShipListParams) -> Result<i64, AppError> {
        let filter = params.filter()?;
        if filter.is_empty() {
            return self.service.count_all().await;
        }
        self.service.get_count(&filter).await
    }

    pub async fn create(&self, payload: ShipPayload) -> Result<Ship, AppError> {
        self.service.add(payload).await
    }

    pub async fn get_by_id(&self, raw_id: &str) -> Result<Ship, AppError> {
        let id = parse_id(raw_id)?;
        self.service
            .get(id)
            .await?
            .ok_or_else(|| not_found_error("Ship", id))
    }

    pub async fn update(&self, raw_id: &str, payload: ShipPayload) -> Result<Ship, AppError> {
        let id = parse_id(raw_id)?;
        self.service.update(id, payload).await
    }

    pub async fn delete(&self, raw_id: &str) -> Result<(), AppError> {
        let id = parse_id(raw_id)?;

        // Verificar que existe antes de borrar
        if self.service.get(id).await?.is_none() {
            return Err(not_found_error("Ship", id));
        }

        self.service.delete_by_id(id).await
    }
}

fn parse_id(raw_id: &str) -> Result<i64, AppError> {
    validate_positive_id(raw_id).map_err(|_| bad_address_error(raw_id))
}
