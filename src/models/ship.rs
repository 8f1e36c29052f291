//! Modelo de Ship
//!
//! Este módulo contiene el struct Ship y sus variantes para CRUD operations.
//! Mapea exactamente a la tabla `ships` del schema PostgreSQL.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

/// Tipo de nave - mapea al ENUM ship_type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq, Hash)]
#[sqlx(type_name = "ship_type", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipType {
    Transport,
    Military,
    Merchant,
}

/// Ship principal - un registro persistido con id asignado por el store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Ship {
    pub id: i64,
    pub name: String,
    pub planet: String,
    pub ship_type: ShipType,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub prod_date: DateTime<Utc>,
    pub speed: f64,
    pub crew_size: i32,
    pub is_used: bool,
    pub rating: f64,
}

/// Atributos completos de un ship antes de calcular el rating
#[derive(Debug, Clone, PartialEq)]
pub struct ShipDraft {
    pub name: String,
    pub planet: String,
    pub ship_type: ShipType,
    pub prod_date: DateTime<Utc>,
    pub speed: f64,
    pub crew_size: i32,
    pub is_used: bool,
}

impl ShipDraft {
    pub fn rated(self, rating: f64) -> NewShip {
        NewShip {
            name: self.name,
            planet: self.planet,
            ship_type: self.ship_type,
            prod_date: self.prod_date,
            speed: self.speed,
            crew_size: self.crew_size,
            is_used: self.is_used,
            rating,
        }
    }
}

/// Ship completamente poblado, listo para insertar (sin id)
#[derive(Debug, Clone, PartialEq)]
pub struct NewShip {
    pub name: String,
    pub planet: String,
    pub ship_type: ShipType,
    pub prod_date: DateTime<Utc>,
    pub speed: f64,
    pub crew_size: i32,
    pub is_used: bool,
    pub rating: f64,
}

impl Ship {
    /// Atributos actuales, base para el merge de un update
    pub fn draft(&self) -> ShipDraft {
        ShipDraft {
            name: self.name.clone(),
            planet: self.planet.clone(),
            ship_type: self.ship_type,
            prod_date: self.prod_date,
            speed: self.speed,
            crew_size: self.crew_size,
            is_used: self.is_used,
        }
    }

    pub fn from_new(id: i64, ship: NewShip) -> Self {
        Self {
            id,
            name: ship.name,
            planet: ship.planet,
            ship_type: ship.ship_type,
            prod_date: ship.prod_date,
            speed: ship.speed,
            crew_size: ship.crew_size,
            is_used: ship.is_used,
            rating: ship.rating,
        }
    }
}

/// Trunca un instante a la medianoche UTC del mismo día
pub fn truncate_to_day(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .map(|naive| naive.and_utc())
        .unwrap_or(instant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone};

    fn sample() -> Ship {
        Ship {
            id: 7,
            name: "Orion III".to_string(),
            planet: "Mars".to_string(),
            ship_type: ShipType::Merchant,
            prod_date: Utc.with_ymd_and_hms(2995, 1, 1, 0, 0, 0).unwrap(),
            speed: 0.82,
            crew_size: 617,
            is_used: true,
            rating: 1.31,
        }
    }

    #[test]
    fn test_ship_serializes_with_wire_names() {
        let json = serde_json::to_value(sample()).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["shipType"], "MERCHANT");
        assert_eq!(json["crewSize"], 617);
        assert_eq!(json["isUsed"], true);
        assert_eq!(
            json["prodDate"],
            Utc.with_ymd_and_hms(2995, 1, 1, 0, 0, 0).unwrap().timestamp_millis()
        );
    }

    #[test]
    fn test_truncate_to_day_drops_time_of_day() {
        let instant = Utc.with_ymd_and_hms(3001, 6, 15, 17, 42, 9).unwrap();
        let truncated = truncate_to_day(instant);

        assert_eq!(truncated, Utc.with_ymd_and_hms(3001, 6, 15, 0, 0, 0).unwrap());
        assert_eq!(truncated.year(), 3001);
    }
}
