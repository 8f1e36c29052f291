//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de tipos.

use serde::Serialize;
use validator::{ValidationError, ValidationErrors};

/// Validar que un valor esté en un rango específico (ambos extremos inclusivos)
pub fn validate_range<T: PartialOrd + std::fmt::Display + Serialize>(
    value: T,
    min: T,
    max: T,
) -> Result<(), ValidationError> {
    if value < min || value > max {
        let mut error = ValidationError::new("range");
        error.add_param("min".into(), &min);
        error.add_param("max".into(), &max);
        error.add_param("actual".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar y convertir un identificador de ruta a entero positivo
pub fn validate_positive_id(value: &str) -> Result<i64, ValidationError> {
    match value.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => {
            let mut error = ValidationError::new("positive_id");
            error.add_param("value".into(), &value.to_string());
            Err(error)
        }
    }
}

/// Acumular un error de campo en un conjunto de errores de validación
pub fn push_field_error(
    errors: &mut ValidationErrors,
    field: &'static str,
    result: Result<(), ValidationError>,
) {
    if let Err(error) = result {
        errors.add(field, error);
    }
}
