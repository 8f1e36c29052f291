//! Validación de payloads de Ship
//!
//! Update valida solo los campos presentes. Create además exige los campos
//! obligatorios y el rango de `speed`, y devuelve el draft completo con
//! `isUsed = false` por defecto.

use chrono::Datelike;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::dto::ShipPayload;
use crate::models::{truncate_to_day, ShipDraft};
use crate::services::rating::current_epoch_year;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::{push_field_error, validate_range};

pub const MIN_PROD_YEAR: i32 = 2800;
pub const MIN_SPEED: f64 = 0.0;
pub const MAX_SPEED: f64 = 1.0;

/// Validar los campos presentes de un payload parcial
pub fn validate_for_update(payload: &ShipPayload, current_year: i32) -> AppResult<()> {
    let mut errors = payload
        .validate()
        .err()
        .map(with_wire_names)
        .unwrap_or_else(ValidationErrors::new);

    if let Some(prod_date) = payload.prod_date {
        push_field_error(
            &mut errors,
            "prodDate",
            validate_range(prod_date.year(), MIN_PROD_YEAR, current_epoch_year(current_year)),
        );
    }

    into_result(errors)
}

/// Validar un payload de creación y completar los valores por defecto
pub fn validate_for_create(payload: ShipPayload, current_year: i32) -> AppResult<ShipDraft> {
    validate_for_update(&payload, current_year)?;

    let name = payload.name.ok_or(AppError::MissingField("name"))?;
    let planet = payload.planet.ok_or(AppError::MissingField("planet"))?;
    let prod_date = payload.prod_date.ok_or(AppError::MissingField("prodDate"))?;
    let crew_size = payload.crew_size.ok_or(AppError::MissingField("crewSize"))?;
    let ship_type = payload.ship_type.ok_or(AppError::MissingField("shipType"))?;
    let speed = payload.speed.ok_or(AppError::MissingField("speed"))?;

    let mut errors = ValidationErrors::new();
    push_field_error(&mut errors, "speed", validate_range(speed, MIN_SPEED, MAX_SPEED));
    into_result(errors)?;

    Ok(ShipDraft {
        name,
        planet,
        ship_type,
        prod_date: truncate_to_day(prod_date),
        speed,
        crew_size,
        is_used: payload.is_used.unwrap_or(false),
    })
}

/// Nombre del campo en el wire (camelCase)
fn wire_name(field: &'static str) -> &'static str {
    match field {
        "ship_type" => "shipType",
        "prod_date" => "prodDate",
        "crew_size" => "crewSize",
        "is_used" => "isUsed",
        other => other,
    }
}

/// Re-indexar los errores del derive con los nombres del wire
fn with_wire_names(errors: ValidationErrors) -> ValidationErrors {
    let mut renamed = ValidationErrors::new();
    for (field, kind) in errors.into_errors() {
        if let ValidationErrorsKind::Field(field_errors) = kind {
            for error in field_errors {
                renamed.add(wire_name(field), error);
            }
        }
    }
    renamed
}

fn into_result(errors: ValidationErrors) -> AppResult<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::InvalidField(errors))
    }
}
