//! Descripciones de predicados independientes del backend
//!
//! Un `Predicate` describe una cláusula de filtro sobre un campo del Ship.
//! Cada store la interpreta a su manera (SQL, memoria).

use chrono::{DateTime, Utc};
use std::cmp::Ordering;

use crate::models::{Ship, ShipType};

/// Campos escalares del Ship sobre los que se puede filtrar u ordenar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShipField {
    Id,
    Name,
    Planet,
    ShipType,
    ProdDate,
    Speed,
    CrewSize,
    IsUsed,
    Rating,
}

impl ShipField {
    /// Nombre de la columna en la tabla `ships`
    pub fn column(self) -> &'static str {
        match self {
            ShipField::Id => "id",
            ShipField::Name => "name",
            ShipField::Planet => "planet",
            ShipField::ShipType => "ship_type",
            ShipField::ProdDate => "prod_date",
            ShipField::Speed => "speed",
            ShipField::CrewSize => "crew_size",
            ShipField::IsUsed => "is_used",
            ShipField::Rating => "rating",
        }
    }

    /// Valor actual del campo en un registro
    pub fn value_of(self, ship: &Ship) -> FieldValue {
        match self {
            ShipField::Id => FieldValue::Int(ship.id),
            ShipField::Name => FieldValue::Text(ship.name.clone()),
            ShipField::Planet => FieldValue::Text(ship.planet.clone()),
            ShipField::ShipType => FieldValue::ShipType(ship.ship_type),
            ShipField::ProdDate => FieldValue::Timestamp(ship.prod_date),
            ShipField::Speed => FieldValue::Float(ship.speed),
            ShipField::CrewSize => FieldValue::Int(i64::from(ship.crew_size)),
            ShipField::IsUsed => FieldValue::Bool(ship.is_used),
            ShipField::Rating => FieldValue::Float(ship.rating),
        }
    }
}

/// Valor tipado usado en comparaciones
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    ShipType(ShipType),
    Bool(bool),
    Timestamp(DateTime<Utc>),
    Float(f64),
    Int(i64),
}

impl PartialOrd for FieldValue {
    /// Solo valores de la misma variante son comparables
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => a.partial_cmp(b),
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a.partial_cmp(b),
            (FieldValue::Timestamp(a), FieldValue::Timestamp(b)) => a.partial_cmp(b),
            (FieldValue::Float(a), FieldValue::Float(b)) => a.partial_cmp(b),
            (FieldValue::Int(a), FieldValue::Int(b)) => a.partial_cmp(b),
            (FieldValue::ShipType(a), FieldValue::ShipType(b)) if a == b => Some(Ordering::Equal),
            _ => None,
        }
    }
}

/// Cláusula de filtro
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Igualdad exacta
    Equals { field: ShipField, value: FieldValue },
    /// Contiene la subcadena (sensible a mayúsculas)
    Contains { field: ShipField, needle: String },
    /// Rango inclusivo; cada extremo es opcional
    Range {
        field: ShipField,
        min: Option<FieldValue>,
        max: Option<FieldValue>,
    },
}

impl Predicate {
    /// Evaluar el predicado contra un registro en memoria
    pub fn matches(&self, ship: &Ship) -> bool {
        match self {
            Predicate::Equals { field, value } => field.value_of(ship) == *value,
            Predicate::Contains { field, needle } => match field.value_of(ship) {
                FieldValue::Text(text) => text.contains(needle.as_str()),
                _ => false,
            },
            Predicate::Range { field, min, max } => {
                let actual = field.value_of(ship);
                let above_min = min
                    .as_ref()
                    .map_or(true, |min| matches!(actual.partial_cmp(min), Some(Ordering::Greater | Ordering::Equal)));
                let below_max = max
                    .as_ref()
                    .map_or(true, |max| matches!(actual.partial_cmp(max), Some(Ordering::Less | Ordering::Equal)));
                above_min && below_max
            }
        }
    }
}

/// Conjunción: todos los predicados deben cumplirse
pub fn matches_all(predicates: &[Predicate], ship: &Ship) -> bool {
    predicates.iter().all(|predicate| predicate.matches(ship))
}
