//! Configuración del proyecto
//!
//! Variables de entorno del servidor, backend de persistencia y
//! parámetros del pool de PostgreSQL.

pub mod database;
pub mod environment;

pub use environment::*;
