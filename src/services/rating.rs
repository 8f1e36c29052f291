//! Cálculo del rating de un ship
//!
//! `rating = round_half_up(80 * speed * k / years_in_service, 2)` con
//! `k = 0.5` para ships usados. El cociente se convierte de forma exacta a
//! `Decimal` antes de redondear para que el resultado sea reproducible.

use chrono::{DateTime, Datelike, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::utils::errors::{invalid_field_error, AppError, AppResult};

/// Desfase entre el calendario real y el del universo
pub const EPOCH_OFFSET_YEARS: i32 = 1000;

const RATING_SCALE: u32 = 2;
const USED_COEFFICIENT: f64 = 0.5;
const NEW_COEFFICIENT: f64 = 1.0;

/// Año actual en el calendario del universo
pub fn current_epoch_year(current_year: i32) -> i32 {
    current_year + EPOCH_OFFSET_YEARS
}

/// Calcular el rating para `current_year` (año calendario real)
pub fn compute_rating(
    is_used: bool,
    prod_date: DateTime<Utc>,
    speed: f64,
    current_year: i32,
) -> AppResult<f64> {
    let k = if is_used { USED_COEFFICIENT } else { NEW_COEFFICIENT };
    let years_in_service = current_epoch_year(current_year) - prod_date.year() + 1;

    if years_in_service < 1 {
        return Err(invalid_field_error(
            "prodDate",
            "years_in_service",
            "production year lies after the current epoch year",
        ));
    }

    let raw = (80.0 * speed * k) / f64::from(years_in_service);

    round_half_up(raw, RATING_SCALE).ok_or_else(|| {
        if raw.is_finite() {
            AppError::Internal(format!("rating {} is not representable", raw))
        } else {
            invalid_field_error("speed", "finite", "speed produces a non-finite rating")
        }
    })
}

/// Redondeo HALF_UP sobre el valor binario exacto de `value`
pub fn round_half_up(value: f64, scale: u32) -> Option<f64> {
    Decimal::from_f64_retain(value)?
        .round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
}
