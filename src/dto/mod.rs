pub mod ship_dto;

pub use ship_dto::{ShipListParams, ShipPayload};
