//! Criterios de filtrado, orden y paginación de Ships

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::predicate::{FieldValue, Predicate, ShipField};
use crate::models::ShipType;

/// Filtros para búsqueda de ships; un campo `None` no aporta cláusula
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShipFilter {
    pub name: Option<String>,
    pub planet: Option<String>,
    pub ship_type: Option<ShipType>,
    pub is_used: Option<bool>,
    pub after: Option<DateTime<Utc>>,
    pub before: Option<DateTime<Utc>>,
    pub min_speed: Option<f64>,
    pub max_speed: Option<f64>,
    pub min_crew_size: Option<i32>,
    pub max_crew_size: Option<i32>,
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
}

impl ShipFilter {
    /// Sin ningún criterio: equivale al conjunto completo
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Construir la conjunción de predicados para los parámetros presentes
    pub fn predicates(&self) -> Vec<Predicate> {
        let mut predicates = Vec::new();

        if let Some(name) = &self.name {
            predicates.push(Predicate::Contains { field: ShipField::Name, needle: name.clone() });
        }
        if let Some(planet) = &self.planet {
            predicates.push(Predicate::Contains { field: ShipField::Planet, needle: planet.clone() });
        }
        if let Some(ship_type) = self.ship_type {
            predicates.push(Predicate::Equals {
                field: ShipField::ShipType,
                value: FieldValue::ShipType(ship_type),
            });
        }
        if let Some(is_used) = self.is_used {
            predicates.push(Predicate::Equals { field: ShipField::IsUsed, value: FieldValue::Bool(is_used) });
        }

        push_range(
            &mut predicates,
            ShipField::ProdDate,
            self.after.map(FieldValue::Timestamp),
            self.before.map(FieldValue::Timestamp),
        );
        push_range(
            &mut predicates,
            ShipField::Speed,
            self.min_speed.map(FieldValue::Float),
            self.max_speed.map(FieldValue::Float),
        );
        push_range(
            &mut predicates,
            ShipField::CrewSize,
            self.min_crew_size.map(|v| FieldValue::Int(i64::from(v))),
            self.max_crew_size.map(|v| FieldValue::Int(i64::from(v))),
        );
        push_range(
            &mut predicates,
            ShipField::Rating,
            self.min_rating.map(FieldValue::Float),
            self.max_rating.map(FieldValue::Float),
        );

        predicates
    }
}

fn push_range(
    predicates: &mut Vec<Predicate>,
    field: ShipField,
    min: Option<FieldValue>,
    max: Option<FieldValue>,
) {
    if min.is_some() || max.is_some() {
        predicates.push(Predicate::Range { field, min, max });
    }
}

/// Clave de orden ascendente
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipOrder {
    #[default]
    Id,
    Speed,
    Date,
    Rating,
}

impl ShipOrder {
    pub fn field(self) -> ShipField {
        match self {
            ShipOrder::Id => ShipField::Id,
            ShipOrder::Speed => ShipField::Speed,
            ShipOrder::Date => ShipField::ProdDate,
            ShipOrder::Rating => ShipField::Rating,
        }
    }
}

pub const DEFAULT_PAGE_NUMBER: u32 = 0;
pub const DEFAULT_PAGE_SIZE: u32 = 3;

/// Ventana de resultados, `number` empieza en 0
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub number: u32,
    pub size: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self { number: DEFAULT_PAGE_NUMBER, size: DEFAULT_PAGE_SIZE }
    }
}

impl Page {
    pub fn new(number: u32, size: u32) -> Self {
        Self { number, size }
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.number) * u64::from(self.size)
    }

    pub fn limit(&self) -> u64 {
        u64::from(self.size)
    }
}

/// Descripción completa de una consulta paginada para el store
#[derive(Debug, Clone, PartialEq)]
pub struct ShipQuery {
    pub predicates: Vec<Predicate>,
    pub order: Option<ShipOrder>,
    pub page: Page,
}

impl ShipQuery {
    pub fn new(filter: &ShipFilter, order: Option<ShipOrder>, page: Page) -> Self {
        Self { predicates: filter.predicates(), order, page }
    }

    /// Campo de orden efectivo; sin clave se ordena por id
    pub fn sort_field(&self) -> ShipField {
        self.order.map_or(ShipField::Id, ShipOrder::field)
    }
}
