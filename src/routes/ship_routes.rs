use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use crate::controllers::ship_controller::ShipController;
use crate::dto::{ShipListParams, ShipPayload};
use crate::models::Ship;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_ship_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_ships).post(create_ship))
        .route("/count", get(count_ships))
        .route("/:id", get(get_ship).post(update_ship).delete(delete_ship))
}

async fn list_ships(
    State(state): State<AppState>,
    Query(params): Query<ShipListParams>,
) -> Result<Json<Vec<Ship>>, AppError> {
    let controller = ShipController::new(state.ships.clone());
    let ships = controller.list(params).await?;
    Ok(Json(ships))
}

async fn count_ships(
    State(state): State<AppState>,
    Query(params): Query<ShipListParams>,
) -> Result<Json<i64>, AppError> {
    let controller = ShipController::new(state.ships.clone());
    let count = controller.count(params).await?;
    Ok(Json(count))
}

async fn create_ship(
    State(state): State<AppState>,
    Json(payload): Json<ShipPayload>,
) -> Result<Json<Ship>, AppError> {
    let controller = ShipController::new(state.ships.clone());
    let ship = controller.create(payload).await?;
    Ok(Json(ship))
}

async fn get_ship(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Ship>, AppError> {
    let controller = ShipController::new(state.ships.clone());
    let ship = controller.get_by_id(&id).await?;
    Ok(Json(ship))
}

async fn update_ship(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ShipPayload>,
) -> Result<Json<Ship>, AppError> {
    let controller = ShipController::new(state.ships.clone());
    let ship = controller.update(&id, payload).await?;
    Ok(Json(ship))
}

async fn delete_ship(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let controller = ShipController::new(state.ships.clone());
    controller.delete(&id).await?;
    Ok(StatusCode::OK)
}
