//! Construcción de consultas
//!
//! Traduce los criterios de filtrado opcionales a una lista de predicados
//! más orden y paginación, sin depender de un backend concreto.

pub mod filter;
pub mod predicate;

pub use filter::{Page, ShipFilter, ShipOrder, ShipQuery, DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};
pub use predicate::{matches_all, FieldValue, Predicate, ShipField};
