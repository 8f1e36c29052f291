use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::ShipType;
use crate::query::{Page, ShipFilter, ShipOrder, DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};
use crate::utils::errors::{invalid_field_error, AppResult};

// Body para crear o actualizar un ship; todos los campos son opcionales
// en el wire, `id` y `rating` se ignoran si vienen en el body
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShipPayload {
    #[validate(length(min = 1, max = 50))]
    pub name: Option<String>,

    #[validate(length(max = 50))]
    pub planet: Option<String>,

    pub ship_type: Option<ShipType>,

    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub prod_date: Option<DateTime<Utc>>,

    pub speed: Option<f64>,

    #[validate(range(min = 1, max = 9999))]
    pub crew_size: Option<i32>,

    pub is_used: Option<bool>,
}

// Parámetros de query para listado y conteo
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipListParams {
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
    pub order: Option<ShipOrder>,
    pub name: Option<String>,
    pub planet: Option<String>,
    pub ship_type: Option<ShipType>,
    pub after: Option<i64>,
    pub before: Option<i64>,
    pub is_used: Option<bool>,
    pub min_speed: Option<f64>,
    pub max_speed: Option<f64>,
    pub min_crew_size: Option<i32>,
    pub max_crew_size: Option<i32>,
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
}

impl ShipListParams {
    pub fn filter(&self) -> AppResult<ShipFilter> {
        Ok(ShipFilter {
            name: self.name.clone(),
            planet: self.planet.clone(),
            ship_type: self.ship_type,
            is_used: self.is_used,
            after: self.after.map(|ms| millis_to_instant("after", ms)).transpose()?,
            before: self.before.map(|ms| millis_to_instant("before", ms)).transpose()?,
            min_speed: finite_bound("minSpeed", self.min_speed)?,
            max_speed: finite_bound("maxSpeed", self.max_speed)?,
            min_crew_size: self.min_crew_size,
            max_crew_size: self.max_crew_size,
            min_rating: finite_bound("minRating", self.min_rating)?,
            max_rating: finite_bound("maxRating", self.max_rating)?,
        })
    }

    pub fn order(&self) -> ShipOrder {
        self.order.unwrap_or_default()
    }

    pub fn page(&self) -> Page {
        Page::new(
            self.page_number.unwrap_or(DEFAULT_PAGE_NUMBER),
            self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }
}

/// Los límites flotantes deben ser finitos
fn finite_bound(field: &'static str, bound: Option<f64>) -> AppResult<Option<f64>> {
    match bound {
        Some(value) if !value.is_finite() => {
            Err(invalid_field_error(field, "finite", "bound must be a finite number"))
        }
        other => Ok(other),
    }
}

fn millis_to_instant(field: &'static str, millis: i64) -> AppResult<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .ok_or_else(|| invalid_field_error(field, "timestamp", "timestamp out of range"))
}
