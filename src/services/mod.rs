//! Services module
//! 
//! Este módulo contiene la lógica de negocio de la aplicación: cálculo del
//! rating, validación de payloads y el servicio de Ships.

pub mod rating;
pub mod ship_service;
pub mod ship_validator;

pub use ship_service::ShipService;
