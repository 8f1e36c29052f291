pub mod memory_store;
pub mod ship_repository;
pub mod ship_store;

pub use memory_store::InMemoryShipStore;
pub use ship_repository::PgShipRepository;
pub use ship_store::ShipStore;
