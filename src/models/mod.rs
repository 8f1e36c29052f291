//! Modelos del sistema
//! 
//! Este módulo contiene los modelos de datos que mapean exactamente
//! al schema PostgreSQL.

pub mod ship;

pub use ship::{truncate_to_day, NewShip, Ship, ShipDraft, ShipType};
