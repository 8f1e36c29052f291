//! Utilidades del sistema
//! 
//! Este módulo contiene utilidades para manejo de errores, validación
//! y acceso al reloj del sistema.

pub mod clock;
pub mod errors;
pub mod validation;
